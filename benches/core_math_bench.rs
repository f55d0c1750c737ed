use chart_motion::api::{LineChart, LineChartConfig};
use chart_motion::core::{
    CoordinateMapper, DataPoint, PlotRect, ScreenPoint, Series, SeriesId, SeriesPathBuilder,
    ValueDomain, Viewport,
};
use chart_motion::interaction::nearest_point;
use chart_motion::particles::{ParticleConfig, ParticleSystem};
use chart_motion::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn daily_points(len: usize) -> Vec<DataPoint> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            let value = 500.0 + (t * 0.37).sin() * 240.0 + t * 0.5;
            DataPoint::new(i, value, format!("D{i}"))
        })
        .collect()
}

fn bench_coordinate_mapping_365(c: &mut Criterion) {
    let points = daily_points(365);
    let domain = ValueDomain::from_values(points.iter().map(|point| point.value));
    let mapper = CoordinateMapper::new(domain, PlotRect::new(48.0, 38.0, 1_200.0, 640.0), 365);

    c.bench_function("coordinate_mapping_365", |b| {
        b.iter(|| {
            for point in black_box(&points) {
                black_box(mapper.to_screen(point.index, point.value));
            }
        })
    });
}

fn bench_series_path_build_365(c: &mut Criterion) {
    let points = daily_points(365);
    let domain = ValueDomain::from_values(points.iter().map(|point| point.value));
    let mapper = CoordinateMapper::new(domain, PlotRect::new(48.0, 38.0, 1_200.0, 640.0), 365);
    let mut builder = SeriesPathBuilder::new();

    c.bench_function("series_path_build_365", |b| {
        b.iter(|| {
            let path = builder
                .build(black_box(&points), black_box(0.8), mapper)
                .expect("drawable series");
            black_box(path.fill.len());
        })
    });
}

fn bench_hit_test_two_series_365(c: &mut Criterion) {
    let primary = Series::new(SeriesId::Primary, "Income", daily_points(365));
    let secondary = Series::new(SeriesId::Secondary, "Expense", daily_points(365));
    let domain = ValueDomain::from_series(&primary, &secondary);
    let mapper = CoordinateMapper::new(domain, PlotRect::new(48.0, 38.0, 1_200.0, 640.0), 365);
    let pointer = ScreenPoint::new(640.0, 300.0);

    c.bench_function("hit_test_two_series_365", |b| {
        b.iter(|| {
            black_box(nearest_point(
                black_box(pointer),
                &[&primary, &secondary],
                mapper,
                1.0,
                40.0,
            ))
        })
    });
}

fn bench_particle_tick_150(c: &mut Criterion) {
    let mut system =
        ParticleSystem::with_seed(ParticleConfig::default(), Viewport::new(1080, 1920), 7);
    system.start();

    c.bench_function("particle_tick_150", |b| {
        b.iter(|| black_box(system.tick(black_box(16.0))))
    });
}

fn bench_line_chart_frame_build_90(c: &mut Criterion) {
    let config = LineChartConfig::new(Viewport::new(1_280, 720));
    let mut chart = LineChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(daily_points(90), daily_points(90));
    chart.tick(1_000.0);

    c.bench_function("line_chart_frame_build_90", |b| {
        b.iter(|| black_box(chart.build_render_frame().primitive_count()))
    });
}

criterion_group!(
    benches,
    bench_coordinate_mapping_365,
    bench_series_path_build_365,
    bench_hit_test_two_series_365,
    bench_particle_tick_150,
    bench_line_chart_frame_build_90
);
criterion_main!(benches);
