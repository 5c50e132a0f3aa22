use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wave_labels::config::FitConfig;
use wave_labels::geometry::Point;
use wave_labels::ir::{Peak, PeakSpec};
use wave_labels::layout::{DebugRecorder, NoopObserver, annotate_peaks, fit_w_label};
use wave_labels::text_metrics::ApproxMetrics;

/// Alternating upper and lower W peaks along a wave, `depth` units tall.
fn synthetic_wave(count: usize, depth: f32) -> Vec<PeakSpec> {
    (0..count)
        .map(|i| {
            let x = i as f32 * 300.0;
            let peak = if i % 2 == 0 {
                Peak::from_boundaries(
                    Point::new(x - 150.0, depth * 1.4),
                    Point::new(x, depth),
                    Point::new(x + 150.0, depth * 1.4),
                    Point::new(x - 150.0, depth * 0.6),
                    Point::new(x, 0.0),
                    Point::new(x + 150.0, depth * 0.6),
                )
            } else {
                Peak::from_boundaries(
                    Point::new(x - 150.0, depth * 0.4),
                    Point::new(x, depth),
                    Point::new(x + 150.0, depth * 0.4),
                    Point::new(x - 150.0, -depth * 0.4),
                    Point::new(x, 0.0),
                    Point::new(x + 150.0, -depth * 0.4),
                )
            };
            PeakSpec {
                text: format!("Artist number {i}"),
                peak,
            }
        })
        .collect()
}

fn bench_single_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_w_label");
    let config = FitConfig::default();
    let metrics = ApproxMetrics::default();
    for depth in [50.0f32, 200.0, 800.0] {
        let peak = synthetic_wave(1, depth).remove(0).peak;
        group.bench_with_input(BenchmarkId::from_parameter(depth), &peak, |b, peak| {
            b.iter(|| {
                fit_w_label(
                    black_box(peak),
                    black_box("Godspeed You! Black Emperor"),
                    "serif",
                    &metrics,
                    &config,
                )
            })
        });
    }
    group.finish();
}

fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate_peaks");
    let config = FitConfig::default();
    let metrics = ApproxMetrics::default();
    for count in [10usize, 100, 1000] {
        let peaks = synthetic_wave(count, 120.0);
        group.bench_with_input(BenchmarkId::new("noop", count), &peaks, |b, peaks| {
            b.iter(|| annotate_peaks(black_box(peaks), "serif", &metrics, &config, &mut NoopObserver))
        });
        group.bench_with_input(BenchmarkId::new("recorded", count), &peaks, |b, peaks| {
            b.iter(|| {
                let mut recorder = DebugRecorder::new();
                annotate_peaks(black_box(peaks), "serif", &metrics, &config, &mut recorder)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_fit, bench_annotate);
criterion_main!(benches);
