pub mod audio;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod light;
pub mod music;
pub mod scan;
pub mod scene;
pub mod tone;
pub mod visualizer;
pub mod wall;

pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");

pub use audio::*;
pub use config::*;
pub use constants::*;
pub use draw::*;
pub use error::*;
pub use geometry::*;
pub use light::*;
pub use music::*;
pub use scan::*;
pub use scene::*;
pub use tone::*;
pub use visualizer::*;
pub use wall::*;
