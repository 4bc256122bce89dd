//! Benchmarks for hot-path canvas and dither operations.
//!
//! Sizes mirror real text-mode outputs:
//!
//! - **80x24**: classic terminal.
//! - **160x50**: large terminal window.
//! - **320x100**: dithered image preview at high resolution.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use cellcanvas::{Algorithm, Canvas, Dither};

const SIZES: [(usize, usize); 3] = [
    (80, 24),   // Classic VT100.
    (160, 50),  // Large window.
    (320, 100), // Image preview.
];

/// Mostly ASCII with a CJK glyph every 20 columns.
fn mixed_line(cols: usize) -> String {
    (0..cols)
        .map(|i| if i % 20 == 19 { '好' } else { (b'a' + (i % 26) as u8) as char })
        .collect()
}

/// 32bpp gradient, 4 pixels per cell.
fn gradient(w: usize, h: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(w * h * 4);
    for y in 0..h {
        for x in 0..w {
            let r = (x * 255 / w) as u32;
            let g = (y * 255 / h) as u32;
            let px = (r << 16) | (g << 8) | ((r + g) / 2);
            out.extend_from_slice(&px.to_le_bytes());
        }
    }
    out
}

fn bench_put_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_str/full_screen");
    for &(cols, rows) in &SIZES {
        let line = mixed_line(cols);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{cols}x{rows}")),
            &(cols, rows, &line),
            |b, &(cols, rows, line)| {
                let mut cv = Canvas::new(cols, rows).expect("canvas");
                b.iter(|| {
                    for y in 0..rows as i32 {
                        cv.put_str(0, y, black_box(line));
                    }
                    cv.clear_dirty_rect_list();
                });
            },
        );
    }
    group.finish();
}

/// Scattered single-cell writes stress dirty-rectangle merging.
fn bench_dirty_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dirty/scatter");
    for &(cols, rows) in &SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{cols}x{rows}")),
            &(cols, rows),
            |b, &(cols, rows)| {
                let mut cv = Canvas::new(cols, rows).expect("canvas");
                b.iter(|| {
                    for i in 0..256usize {
                        let x = (i * 37) % cols;
                        let y = (i * 11) % rows;
                        cv.put_char(x as i32, y as i32, if i % 2 == 0 { '#' } else { '*' });
                    }
                    black_box(cv.dirty_rects());
                    cv.clear_dirty_rect_list();
                });
            },
        );
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw/mixed");
    for &(cols, rows) in &SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{cols}x{rows}")),
            &(cols, rows),
            |b, &(cols, rows)| {
                let mut cv = Canvas::new(cols, rows).expect("canvas");
                let (w, h) = (cols as i32, rows as i32);
                b.iter(|| {
                    cv.draw_thin_line(0, 0, w - 1, h - 1);
                    cv.draw_ellipse(w / 2, h / 2, w / 3, h / 3, '*');
                    cv.fill_triangle(0, h - 1, w / 2, 0, w - 1, h - 1, '#');
                    cv.draw_cp437_box(1, 1, w - 2, h - 2);
                    cv.clear_dirty_rect_list();
                });
            },
        );
    }
    group.finish();
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/rotate_left_right");
    for &(cols, rows) in &SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{cols}x{rows}")),
            &(cols, rows),
            |b, &(cols, rows)| {
                let mut cv = Canvas::new(cols, rows).expect("canvas");
                let line = mixed_line(cols);
                for y in 0..rows as i32 {
                    cv.put_str(0, y, &line);
                }
                b.iter(|| {
                    cv.rotate_left().expect("rotate");
                    cv.rotate_right().expect("rotate");
                    cv.flip();
                });
            },
        );
    }
    group.finish();
}

fn bench_dither(c: &mut Criterion) {
    let mut group = c.benchmark_group("dither/render");
    for algorithm in [Algorithm::None, Algorithm::Ordered8, Algorithm::FloydSteinberg] {
        for &(cols, rows) in &SIZES {
            let (pw, ph) = (cols * 2, rows * 2);
            let pixels = gradient(pw, ph);
            let mut dither =
                Dither::new(32, pw, ph, pw * 4, 0xff_0000, 0xff00, 0xff, 0).expect("dither");
            dither.set_algorithm(algorithm);
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), format!("{cols}x{rows}")),
                &(cols, rows),
                |b, &(cols, rows)| {
                    let mut cv = Canvas::new(cols, rows).expect("canvas");
                    b.iter(|| {
                        dither
                            .render(&mut cv, 0, 0, cols as i32, rows as i32, black_box(&pixels))
                            .expect("render");
                        cv.clear_dirty_rect_list();
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_put_str,
    bench_dirty_scatter,
    bench_draw,
    bench_transform,
    bench_dither,
);
criterion_main!(benches);
