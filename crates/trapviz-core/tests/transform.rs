// File: crates/trapviz-core/tests/transform.rs
// Purpose: World-to-device mapping, flips, margins and degenerate viewports.

use trapviz_core::{AffineTransform, Error, ViewportConfig};

fn classic() -> ViewportConfig {
    ViewportConfig::new((-1.0, -1.0), (7.0, 7.0)).with_margin(0.0).with_y_flipped(true)
}

#[test]
fn origin_lands_an_eighth_in_from_the_min_corner() {
    let t = AffineTransform::configure(&classic(), 280, 280).unwrap();
    let o = t.to_device(0.0, 0.0);
    // 279 usable pixels over 8 world units
    assert_eq!((o.x, o.y), (34.875, 244.125));
    assert!((o.x - 35.0).abs() < 1.0 && (o.y - 245.0).abs() < 1.0);
}

#[test]
fn flip_puts_world_max_y_at_the_top() {
    let t = classic().configure(280, 280).unwrap();
    let top_left = t.to_device(-1.0, 7.0);
    let bottom_right = t.to_device(7.0, -1.0);
    assert_eq!((top_left.x, top_left.y), (0.0, 0.0));
    assert_eq!((bottom_right.x, bottom_right.y), (279.0, 279.0));
    assert!(t.yscale() < 0.0);
    assert!(t.ypix() < 0.0);
}

#[test]
fn unflipped_maps_min_to_min() {
    let t = classic().with_y_flipped(false).configure(280, 280).unwrap();
    let p = t.to_device(-1.0, -1.0);
    assert_eq!((p.x, p.y), (0.0, 0.0));
    let q = t.to_device(7.0, 7.0);
    assert_eq!((q.x, q.y), (279.0, 279.0));
}

#[test]
fn margin_shrinks_the_device_box() {
    let t = classic().with_margin(10.0).configure(280, 280).unwrap();
    let p = t.to_device(-1.0, 7.0);
    assert_eq!((p.x, p.y), (10.0, 10.0));
    let q = t.to_device(7.0, -1.0);
    assert_eq!((q.x, q.y), (269.0, 269.0));
    assert_eq!(t.device_bounds(), (10.0, 269.0, 269.0, 10.0));
}

#[test]
fn one_pixel_in_world_units() {
    let t = classic().configure(280, 280).unwrap();
    assert!((t.xpix() - 8.0 / 279.0).abs() < 1e-12);
    assert!((t.xpix() * t.xscale() - 1.0).abs() < 1e-12);
}

#[test]
fn to_world_inverts_to_device() {
    let t = classic().with_margin(3.0).configure(640, 480).unwrap();
    for &(x, y) in &[(0.0, 0.0), (-1.0, 6.5), (3.3, 2.2), (7.0, -1.0)] {
        let d = t.to_device(x, y);
        let w = t.to_world(d.x, d.y);
        assert!((w.x - x).abs() < 1e-4 && (w.y - y).abs() < 1e-4, "({x}, {y}) -> {w:?}");
    }
}

#[test]
fn too_small_for_the_margin() {
    // 21 - 10 - 1 - 10 leaves zero pixels
    let err = classic().with_margin(10.0).configure(21, 280).unwrap_err();
    assert!(matches!(err, Error::DegenerateViewport { .. }));
    assert!(classic().configure(1, 1).is_err());
    assert!(classic().configure(0, 280).is_err());
}

#[test]
fn zero_or_reversed_world_extent() {
    let flat = ViewportConfig::new((0.0, 1.0), (5.0, 1.0));
    assert!(matches!(flat.configure(280, 280), Err(Error::DegenerateViewport { .. })));
    let reversed = ViewportConfig::new((5.0, 0.0), (0.0, 5.0));
    assert!(matches!(reversed.configure(280, 280), Err(Error::DegenerateViewport { .. })));
}

#[test]
fn bad_margins() {
    assert!(classic().with_margin(-1.0).configure(280, 280).is_err());
    assert!(classic().with_margin(f64::NAN).configure(280, 280).is_err());
}

#[test]
fn reconfiguring_builds_a_new_value() {
    let small = classic().configure(280, 280).unwrap();
    let large = classic().configure(559, 559).unwrap();
    assert_eq!(large.xscale(), 2.0 * small.xscale());
    // the first transform is untouched
    assert_eq!(small.to_device(0.0, 0.0).x, 34.875);
}
