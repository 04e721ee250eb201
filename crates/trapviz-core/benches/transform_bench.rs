use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trapviz_core::{Builtin, Color, IntegrationOptions, RecordingSurface, Scene, ViewportConfig, WorldCanvas};

fn bench_to_device(c: &mut Criterion) {
    let t = ViewportConfig::default().configure(1920, 1080).unwrap_or_else(|e| panic!("{e}"));
    let xs: Vec<f64> = (0..100_000).map(|i| -1.0 + i as f64 * 8.0 / 100_000.0).collect();
    c.bench_function("to_device_100k", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &xs {
                let d = t.to_device(x, x.sin());
                acc += d.x + d.y;
            }
            black_box(acc)
        })
    });
}

fn bench_plot(c: &mut Criterion) {
    let cfg = ViewportConfig::default();
    c.bench_function("draw_function_1920px", |b| {
        let mut surface = RecordingSurface::new();
        b.iter(|| {
            let mut canvas = WorldCanvas::with_viewport(&mut surface, &cfg, 1920, 1080).unwrap_or_else(|e| panic!("{e}"));
            canvas.clear();
            let step = canvas.transform().xpix();
            black_box(canvas.draw_function(|x| x.sin(), Color::GREEN, -1.0, 7.0, step))
        })
    });
}

fn bench_scene(c: &mut Criterion) {
    let cfg = ViewportConfig::default();
    c.bench_function("scene_recording_280", |b| {
        let mut surface = RecordingSurface::new();
        b.iter(|| {
            let mut canvas = WorldCanvas::with_viewport(&mut surface, &cfg, 280, 280).unwrap_or_else(|e| panic!("{e}"));
            let scene = Scene::new(&Builtin::SineRamp, 0.0, 5.0, IntegrationOptions::new(5, 0.01));
            black_box(scene.draw(&mut canvas).map(|s| s.plot_samples))
        })
    });
}

criterion_group!(benches, bench_to_device, bench_plot, bench_scene);
criterion_main!(benches);
