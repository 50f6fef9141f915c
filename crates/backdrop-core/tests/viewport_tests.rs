// Host-side tests for viewport sizing.

use backdrop_core::surface::{DrawCall, RecordingSurface};
use backdrop_core::Viewport;
use glam::DVec2;

#[test]
fn device_scale_is_capped_at_two() {
    assert_eq!(Viewport::new(100.0, 100.0, 3.0).dpr, 2.0);
    assert_eq!(Viewport::new(100.0, 100.0, 1.5).dpr, 1.5);
    assert_eq!(Viewport::new(100.0, 100.0, 0.0).dpr, 1.0);
    assert_eq!(Viewport::new(100.0, 100.0, f64::NAN).dpr, 1.0);
}

#[test]
fn backing_size_floors_scaled_dimensions() {
    assert_eq!(Viewport::new(1000.0, 333.0, 1.5).backing_size(), (1500, 499));
    assert_eq!(Viewport::new(1280.5, 720.3, 3.0).backing_size(), (2561, 1440));
}

#[test]
fn apply_sizes_surface_and_sets_scale() {
    let vp = Viewport::new(1000.0, 333.0, 1.5);
    let mut surface = RecordingSurface::new();
    vp.apply(&mut surface).unwrap();
    assert_eq!(surface.backing, (1500, 499));
    assert_eq!(surface.display, (1000.0, 333.0));
    assert_eq!(surface.scale, 1.5);
    assert_eq!(
        surface.calls,
        vec![
            DrawCall::BackingSize(1500, 499),
            DrawCall::DisplaySize(1000.0, 333.0),
            DrawCall::Scale(1.5),
        ]
    );
}

#[test]
fn margin_bounds_are_inclusive() {
    let vp = Viewport::new(800.0, 600.0, 1.0);
    assert!(vp.contains_with_margin(DVec2::new(-160.0, 760.0), 160.0));
    assert!(vp.contains_with_margin(DVec2::new(960.0, 300.0), 160.0));
    assert!(!vp.contains_with_margin(DVec2::new(960.5, 300.0), 160.0));
    assert!(!vp.contains_with_margin(DVec2::new(10.0, -160.5), 160.0));
}
