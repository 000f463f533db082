// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use framefit_geometry::{Clip, LayoutKind, content_rect};
use framefit_style::{FramePreset, FrameStyle, FrameTheme, cell_separators};
use kurbo::Size;
use peniko::Color;

const CANVAS: Size = Size::new(1920.0, 1080.0);

fn bench_theme_lookup(c: &mut Criterion) {
    let accent = Color::from_rgba8(255, 90, 0, 255);
    let theme = FramePreset::ALL
        .into_iter()
        .step_by(2)
        .fold(FrameTheme::new(), |theme, preset| {
            theme.with(
                preset,
                FrameStyle {
                    border_color: accent,
                    ..preset.style()
                },
            )
        });
    c.bench_function("style/theme_lookup", |b| {
        b.iter(|| {
            for preset in FramePreset::ALL {
                black_box(theme.style(black_box(preset)));
            }
        });
    });
}

fn bench_paint_bounds(c: &mut Criterion) {
    // Decoration bounds for every clip of every layout, as a damage pass would.
    let mut group = c.benchmark_group("style/paint_bounds");
    for layout in LayoutKind::ALL {
        let rects: Vec<_> = (0..layout.cell_count())
            .map(|layer| {
                let clip = Clip::new(layer).with_intrinsic(1280.0, 720.0);
                content_rect(&clip, CANVAS, layout)
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(layout), &rects, |b, rects| {
            b.iter(|| {
                for preset in FramePreset::ALL {
                    let style = preset.style();
                    for &rect in rects {
                        black_box(style.paint_bounds(rect));
                    }
                }
            });
        });
    }
    group.finish();
}

fn bench_separators(c: &mut Criterion) {
    let mut group = c.benchmark_group("style/cell_separators");
    for layout in LayoutKind::ALL {
        group.bench_function(BenchmarkId::from_parameter(layout), |b| {
            b.iter(|| black_box(cell_separators(black_box(layout), CANVAS, 4.0)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_theme_lookup, bench_paint_bounds, bench_separators);
criterion_main!(benches);
