// Copyright 2025 the Framefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use framefit_geometry::{Clip, ClipTransform, ContentFrame, LayoutKind, StageView, TransformBounds};
use framefit_handles::{DragController, EditSession, HandleConfig, HandleKind, hit_test};
use kurbo::{Point, Rect, Size};
use ui_events::keyboard::Modifiers;

const CANVAS: Size = Size::new(1920.0, 1080.0);

fn bench_hit_test(c: &mut Criterion) {
    let config = HandleConfig::default();
    let mut group = c.benchmark_group("handles/hit_test");
    for rotation in [0.0, 30.0] {
        let frame = ContentFrame::new(Rect::new(200.0, 100.0, 680.0, 370.0), rotation);
        let pointers: Vec<Point> = (0..64)
            .map(|i| Point::new(150.0 + f64::from(i) * 9.0, 80.0 + f64::from(i % 8) * 40.0))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(rotation), &pointers, |b, pointers| {
            b.iter(|| {
                for &pointer in pointers {
                    black_box(hit_test(&frame, black_box(pointer), &config));
                }
            });
        });
    }
    group.finish();
}

fn bench_drag_update(c: &mut Criterion) {
    let Some(stage) = StageView::new(Rect::new(0.0, 0.0, 960.0, 540.0), CANVAS) else {
        return;
    };
    let bounds = TransformBounds::for_canvas(CANVAS);
    let frame = ContentFrame::new(Rect::new(240.0, 135.0, 720.0, 405.0), 20.0);
    let mut group = c.benchmark_group("handles/drag_update");
    for handle in [HandleKind::Move, HandleKind::Rotate, HandleKind::SouthEast, HandleKind::East] {
        let mut drag = DragController::default();
        drag.begin(handle, Point::new(720.0, 405.0), ClipTransform::IDENTITY, frame);
        group.bench_function(BenchmarkId::from_parameter(format!("{handle:?}")), |b| {
            b.iter(|| {
                black_box(drag.update(
                    black_box(Point::new(801.0, 433.0)),
                    Modifiers::SHIFT,
                    Some(&stage),
                    &bounds,
                ))
            });
        });
    }
    group.finish();
}

fn bench_session_gesture(c: &mut Criterion) {
    let stage = StageView::new(Rect::new(0.0, 0.0, 960.0, 540.0), CANVAS);
    let path: Vec<Point> = (0..120)
        .map(|i| Point::new(480.0 + f64::from(i) * 1.5, 270.0 - f64::from(i) * 0.75))
        .collect();
    c.bench_function("handles/session_gesture", |b| {
        b.iter(|| {
            let mut clip = Clip::new(0).with_intrinsic(1920.0, 1080.0);
            let mut session = EditSession::<u32>::default();
            session.pointer_down(1, &clip, LayoutKind::Single, stage.as_ref(), path[0]);
            for &pointer in &path {
                session.pointer_move(&1, &mut clip, pointer, Modifiers::empty(), stage.as_ref());
            }
            session.pointer_up();
            black_box(clip)
        });
    });
}

criterion_group!(benches, bench_hit_test, bench_drag_update, bench_session_gesture);
criterion_main!(benches);
