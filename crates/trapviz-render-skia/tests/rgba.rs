// File: crates/trapviz-render-skia/tests/rgba.rs
// Purpose: RGBA buffer shape and a few known pixels after drawing shapes in world coordinates.

use trapviz_core::{Color, DrawingSurface, Point, TextStyle, ViewportConfig, WorldCanvas};
use trapviz_render_skia::{SkiaSurface, TextShaper};

fn pixel(px: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn buffer_shape_and_background() {
    let mut surface = SkiaSurface::new(64, 48, Color::WHITE).unwrap();
    assert_eq!((surface.width(), surface.height()), (64, 48));
    assert_eq!(surface.background(), Color::WHITE);
    let px = surface.to_rgba8().expect("rgba");
    assert_eq!(px.len(), surface.width() as usize * surface.height() as usize * 4);
    assert_eq!(pixel(&px, 64, 0, 0), [255, 255, 255, 255]);
    assert_eq!(pixel(&px, 64, 63, 47), [255, 255, 255, 255]);
}

#[test]
fn filled_polygon_lands_under_the_flip() {
    let mut surface = SkiaSurface::new(280, 280, Color::WHITE).unwrap();
    {
        let mut canvas = WorldCanvas::with_viewport(&mut surface, &ViewportConfig::default(), 280, 280).unwrap();
        // unit square above the origin, world (0..1, 0..1) -> device x 35..70, y 209..244
        let square = [Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 1.0), Point::new(1.0, 0.0)];
        canvas.draw_polygon(&square, Some(Color::LIGHT_BLUE), None);
    }
    let px = surface.to_rgba8().unwrap();
    assert_eq!(pixel(&px, 280, 52, 226), [173, 216, 230, 255]);
    // mirrored below the x axis stays background
    assert_eq!(pixel(&px, 280, 52, 262), [255, 255, 255, 255]);
}

#[test]
fn clear_restores_the_background() {
    let mut surface = SkiaSurface::new(32, 32, Color::WHITE).unwrap();
    surface.draw_rectangle(
        trapviz_core::DeviceRect::from_ltrb(0.0, 0.0, 32.0, 32.0),
        Some(Color::RED),
        None,
    );
    assert_eq!(pixel(&surface.to_rgba8().unwrap(), 32, 16, 16), [255, 0, 0, 255]);

    surface.set_background(Color::BLACK);
    assert_eq!(surface.background(), Color::BLACK);
    surface.clear();
    assert_eq!(pixel(&surface.to_rgba8().unwrap(), 32, 16, 16), [0, 0, 0, 255]);
}

#[test]
fn longer_labels_measure_wider() {
    let shaper = TextShaper::new();
    let style = TextStyle::new(Color::BLACK);
    let (short_w, short_h) = shaper.measure("1", &style);
    let (long_w, long_h) = shaper.measure("1000", &style);
    assert!(long_w >= short_w, "{long_w} < {short_w}");
    assert_eq!(short_h, long_h);
    assert_eq!(shaper.measure("", &style).0, 0.0);
}
