// Host-side tests for the ray fan and light source.

use glam::Vec2;
use lightfan_core::{create_fan, intersect, LightSource, Ray, Segment};

#[test]
fn fan_count_is_floor_of_full_turn_over_step() {
    assert_eq!(create_fan(0.25).len(), 1440);
    assert_eq!(create_fan(90.0).len(), 4);
    assert_eq!(create_fan(7.0).len(), 51);
    assert_eq!(create_fan(360.0).len(), 1);
    assert_eq!(create_fan(400.0).len(), 0);
}

#[test]
fn fan_directions_are_unit_and_evenly_spaced() {
    let fan = create_fan(30.0);
    assert_eq!(fan.len(), 12);
    assert!((fan[0].direction() - Vec2::X).length() < 1e-6);
    for (i, ray) in fan.iter().enumerate() {
        let d = ray.direction();
        assert!((d.length() - 1.0).abs() < 1e-5);
        let expected = (i as f32 * 30.0).to_radians();
        assert!((Vec2::from_angle(expected) - d).length() < 1e-5);
    }
}

#[test]
fn look_at_normalizes_toward_target() {
    let mut ray = Ray::from_angle(0.0);
    ray.look_at(Vec2::new(10.0, 10.0), Vec2::new(10.0, 30.0));
    assert!((ray.direction() - Vec2::Y).length() < 1e-6);
}

#[test]
fn look_at_own_origin_leaves_zero_direction() {
    let mut ray = Ray::from_angle(1.0);
    let p = Vec2::new(3.0, 4.0);
    ray.look_at(p, p);
    assert_eq!(ray.direction(), Vec2::ZERO);
    // a degenerate ray never reports a hit
    let seg = Segment::new(Vec2::new(10.0, -5.0), Vec2::new(10.0, 5.0));
    assert!(intersect(&seg, p, ray.direction()).is_none());
}

#[test]
fn retarget_uses_shared_origin() {
    let mut source = LightSource::new(Vec2::new(100.0, 100.0), 90.0);
    source.retarget(0, Vec2::new(100.0, 0.0));
    assert!((source.rays()[0].direction() - Vec2::NEG_Y).length() < 1e-6);
    // other rays untouched
    assert!((source.rays()[2].direction() - Vec2::NEG_X).length() < 1e-5);
    // out of range is a no-op
    source.retarget(99, Vec2::ZERO);
    assert_eq!(source.rays().len(), 4);
}

#[test]
fn move_to_keeps_directions() {
    let mut source = LightSource::new(Vec2::ZERO, 45.0);
    let before: Vec<_> = source.rays().iter().map(Ray::direction).collect();
    source.move_to(Vec2::new(-20.0, 75.0));
    assert_eq!(source.position(), Vec2::new(-20.0, 75.0));
    let after: Vec<_> = source.rays().iter().map(Ray::direction).collect();
    assert_eq!(before, after);
}
