use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("empty scale name")]
    Empty,
    #[error("unknown tonic `{0}`")]
    UnknownTonic(String),
    #[error("missing scale kind after tonic in `{0}`")]
    MissingKind(String),
    #[error("unknown scale kind `{0}`")]
    UnknownKind(String),
    #[error("no scale names to choose from")]
    NoScales,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ray step must be in (0, 360] degrees, got {0}")]
    RayStep(f32),
    #[error("minimum radius must be positive, got {0}")]
    MinRadius(f32),
    #[error("{name} range is inverted: ({lo}, {hi})")]
    InvertedRange { name: &'static str, lo: f32, hi: f32 },
    #[error("wall span must be non-negative, got {0}")]
    WallSpan(f32),
    #[error("note interval must be positive, got {0}")]
    NoteInterval(f32),
    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("scale `{name}` is invalid: {source}")]
    Scale { name: String, source: ScaleError },
    #[error("scale list is empty")]
    NoScales,
}

#[derive(Debug, Error)]
#[error("audio backend error: {0}")]
pub struct AudioError(pub String);

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scale(#[from] ScaleError),
    #[error(transparent)]
    Audio(#[from] AudioError),
}
