// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Size, Vec2};
use std::time::Duration;
use understory_pinch_zoom::{
    BoundsRestrictor, GestureCoordinator, PointerEvent, ScaleRange, ZoomConfig,
};

fn coordinator(restrict_bounds: bool) -> GestureCoordinator {
    let config = ZoomConfig {
        restrict_bounds,
        ..ZoomConfig::default()
    };
    GestureCoordinator::for_content(config, Size::new(4000.0, 3000.0), Size::new(1080.0, 1920.0))
        .unwrap()
}

/// Focal points of a two-finger pinch that spirals outward while zooming.
fn pinch_path(len: usize) -> Vec<(Point, f64)> {
    (0..len)
        .map(|i| {
            let t = i as f64 / len as f64;
            let angle = t * core::f64::consts::TAU * 3.0;
            let radius = 50.0 + 400.0 * t;
            let focus = Point::new(540.0 + radius * angle.cos(), 960.0 + radius * angle.sin());
            let factor = 0.5 + 6.0 * t;
            (focus, factor)
        })
        .collect()
}

fn bench_pinch_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch_zoom/pinch_stream");

    // Full event path: recognizer signal + move event per sample, then release
    // and settle the resulting animation at 60 Hz.
    for len in [64usize, 512, 4_096] {
        let path = pinch_path(len);
        group.throughput(Throughput::Elements(len as u64));

        for restrict in [false, true] {
            let id = if restrict { "restricted" } else { "free" };
            group.bench_with_input(BenchmarkId::new(id, len), &path, |b, path| {
                b.iter_batched(
                    || coordinator(restrict),
                    |mut zoom| {
                        let first = path[0].0;
                        zoom.handle_pointer(PointerEvent::down(first));
                        zoom.handle_pointer(PointerEvent::moved(2, first));
                        zoom.on_scale_begin();
                        for &(focus, factor) in path {
                            zoom.on_scale(factor, focus);
                            zoom.handle_pointer(PointerEvent::moved(2, focus));
                        }
                        zoom.on_scale_end();
                        zoom.handle_pointer(PointerEvent::up(path[path.len() - 1].0));
                        while zoom.on_frame(Duration::from_micros(16_667)) {}
                        black_box(zoom.current_transform());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_constraints(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch_zoom/constraints");

    let range = ScaleRange::new(0.6, 8.0).unwrap().relative_to(0.27);
    group.bench_function("constrain_scale", |b| {
        b.iter(|| {
            let mut scale = 0.27;
            for i in 0..256 {
                let factor = 0.25 + f64::from(i) * 0.05;
                scale *= range.constrain(0.27, black_box(factor), scale);
            }
            black_box(scale)
        });
    });

    let restrictor = BoundsRestrictor::new(true);
    let viewport = Size::new(1080.0, 1920.0);
    group.bench_function("restrict_delta", |b| {
        b.iter(|| {
            let mut bounds = Rect::new(-500.0, -300.0, 2000.0, 2600.0);
            for i in 0..256 {
                let delta = Vec2::new(f64::from(i % 17) - 8.0, f64::from(i % 23) - 11.0) * 9.0;
                let delta = restrictor.restrict(black_box(delta), bounds, viewport, false);
                bounds = bounds + delta;
            }
            black_box(bounds)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pinch_stream, bench_constraints);
criterion_main!(benches);
