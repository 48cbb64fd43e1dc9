use criterion::{Criterion, criterion_group, criterion_main};
use plot_rs::api::Heatmap;
use plot_rs::core::{AxisRange, CoordinateTransform, Grid, Pixel, Viewport, normalize, quantize_grayscale};
use plot_rs::interaction::DragKind;
use plot_rs::render::NullRenderer;
use plot_rs::{Plot, PlotConfig};
use std::hint::black_box;

fn bench_transform_round_trip(c: &mut Criterion) {
    let transform = CoordinateTransform::new(AxisRange::new(-250.0, 10_000.0), 1920.0, 0.0, true);

    c.bench_function("transform_round_trip", |b| {
        b.iter(|| {
            let px = transform.to_pixel(black_box(4_321.123));
            transform.to_coordinate(px)
        })
    });
}

fn bench_normalize_512x512(c: &mut Criterion) {
    let (width, height) = (512, 512);
    let values = (0..width * height)
        .map(|i| ((i % width) as f64 * 0.01).sin() * ((i / width) as f64 * 0.02).cos())
        .collect();
    let grid = Grid::new(width, height, values).expect("valid grid");

    c.bench_function("normalize_quantize_512x512", |b| {
        b.iter(|| quantize_grayscale(&normalize(black_box(&grid), None, None)))
    });
}

fn bench_pan_drag_with_heatmap(c: &mut Criterion) {
    let mut plot = Plot::new(NullRenderer::default(), PlotConfig::new(Viewport::new(1920, 1080)))
        .expect("plot init");
    let grid = Grid::new(256, 256, vec![1.0; 256 * 256]).expect("valid grid");
    plot.add_plottable(Box::new(Heatmap::new(grid)));
    plot.autoscale(false).expect("autoscale");
    plot.render().expect("render");

    c.bench_function("pan_drag_and_render", |b| {
        b.iter(|| {
            plot.begin_drag(DragKind::Pan, Pixel::new(900.0, 500.0));
            for step in 0..16 {
                plot.drag_to(Pixel::new(900.0 - step as f32 * 5.0, 500.0 + step as f32 * 3.0));
            }
            plot.end_drag();
            plot.render().expect("render")
        })
    });
}

criterion_group!(
    benches,
    bench_transform_round_trip,
    bench_normalize_512x512,
    bench_pan_drag_with_heatmap
);
criterion_main!(benches);
