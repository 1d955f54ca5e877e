use bubble_chart_rs::api::{build_render_frame, compute_layout};
use bubble_chart_rs::core::{
    CapabilityCatalog, Effort, JitterConfig, Lifecycle, Record, Risk, ValueDriver, Viewport,
    jitter_offsets, seed,
};
use bubble_chart_rs::{ChartConfig, ViewState};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_records(count: usize) -> Vec<Record> {
    let capabilities: Vec<String> = CapabilityCatalog::grouped_default()
        .capabilities()
        .map(str::to_owned)
        .collect();
    let drivers: Vec<ValueDriver> = ValueDriver::known().collect();
    let stages: Vec<Lifecycle> = Lifecycle::known().collect();
    let risks: Vec<Risk> = Risk::known().collect();
    let efforts: Vec<Effort> = Effort::known().collect();

    (0..count)
        .map(|i| {
            Record::new(
                format!("Initiative {i}"),
                capabilities[i % capabilities.len()].clone(),
                drivers[(i / 3) % drivers.len()].clone(),
                50_000.0 + (i as f64) * 1_250.0,
                stages[i % stages.len()].clone(),
                risks[(i / 7) % risks.len()].clone(),
                efforts[i % efforts.len()].clone(),
            )
        })
        .collect()
}

fn bench_seed_layout(c: &mut Criterion) {
    let records = seed::benefit_sized_records();
    let config = ChartConfig::collapsible();
    let view = ViewState::default();

    c.bench_function("seed_layout", |b| {
        b.iter(|| {
            let _ = compute_layout(
                black_box(&records),
                black_box(&config),
                black_box(&view),
                black_box(Viewport::default()),
            )
            .expect("layout should succeed");
        })
    });
}

fn bench_layout_and_frame_5k(c: &mut Criterion) {
    let records = generated_records(5_000);
    let config = ChartConfig::collapsible();
    let view = ViewState::default();

    c.bench_function("layout_and_frame_5k", |b| {
        b.iter(|| {
            let layout = compute_layout(
                black_box(&records),
                black_box(&config),
                black_box(&view),
                black_box(Viewport::new(1600.0, 720.0)),
            )
            .expect("layout should succeed");
            let _ = build_render_frame(&layout, &records, &config.render_style, true);
        })
    });
}

fn bench_jitter_dense_cells_10k(c: &mut Criterion) {
    let records = generated_records(10_000);
    let refs: Vec<&Record> = records.iter().collect();

    c.bench_function("jitter_dense_cells_10k", |b| {
        b.iter(|| {
            let _ = jitter_offsets(black_box(&refs), black_box(JitterConfig::default()));
        })
    });
}

criterion_group!(
    benches,
    bench_seed_layout,
    bench_layout_and_frame_5k,
    bench_jitter_dense_cells_10k
);
criterion_main!(benches);
