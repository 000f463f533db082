// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use framefit_geometry::{
    Clip, ClipTransform, CropSpec, FitMode, LayoutKind, StageView, content_frame, content_rect,
};
use kurbo::{Rect, Size};

const CANVAS: Size = Size::new(1920.0, 1080.0);

fn clip(layer: usize, rotation: f64) -> Clip {
    Clip::new(layer)
        .with_intrinsic(3840.0, 2160.0)
        .with_transform(ClipTransform {
            scale: 1.25,
            position_x: 40.0,
            position_y: -25.0,
            rotation,
            fit_mode: FitMode::Cover,
            crop: Some(CropSpec::new(5.0, 10.0, 5.0, 0.0)),
        })
}

fn bench_content_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/content_rect");
    for layout in LayoutKind::ALL {
        let clips: Vec<Clip> = (0..layout.cell_count()).map(|layer| clip(layer, 0.0)).collect();
        group.bench_with_input(BenchmarkId::new("axis_aligned", layout), &clips, |b, clips| {
            b.iter(|| {
                for clip in clips {
                    black_box(content_rect(black_box(clip), CANVAS, layout));
                }
            });
        });
        let rotated: Vec<Clip> = (0..layout.cell_count()).map(|layer| clip(layer, 33.0)).collect();
        group.bench_with_input(BenchmarkId::new("rotated", layout), &rotated, |b, clips| {
            b.iter(|| {
                for clip in clips {
                    black_box(content_rect(black_box(clip), CANVAS, layout));
                }
            });
        });
    }
    group.finish();
}

fn bench_overlay_frame(c: &mut Criterion) {
    // The per-frame work of an overlay: content frame, then projection to screen.
    let stage = StageView::new(Rect::new(0.0, 0.0, 1280.0, 800.0), CANVAS);
    let clip = clip(2, 15.0);
    c.bench_function("geometry/overlay_frame", |b| {
        b.iter(|| {
            let frame = content_frame(black_box(&clip), CANVAS, LayoutKind::Grid2x2);
            black_box(stage.as_ref().map(|stage| stage.canvas_to_screen_frame(&frame)))
        });
    });
}

criterion_group!(benches, bench_content_rect, bench_overlay_frame);
criterion_main!(benches);
