//! Top-down pseudo-color view of a wave field with a colorbar legend.

use super::canvas::{Canvas, BLACK, WHITE};
use super::font;
use crate::colormap::{ColorMap, Normalize};
use crate::error::Result;
use crate::field::{linspace, WaveField};
use crate::layout::Rect;
use image::{Rgba, RgbaImage};

// Figure-relative placement (fractions of width/height, from the top-left).
const AXES_LEFT: f32 = 0.125;
const AXES_RIGHT: f32 = 0.745;
const AXES_TOP: f32 = 0.12;
const AXES_BOTTOM: f32 = 0.89;
const CBAR_LEFT: f32 = 0.775;
const CBAR_RIGHT: f32 = 0.81;

const AXIS_TICKS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];
const CBAR_TICKS: usize = 5;
const TICK_LEN: i32 = 4;
const LABEL_SCALE: i32 = 1;

/// Render `field` as a heatmap with axes and a legend.
pub fn render_heatmap(field: &WaveField, colormap: ColorMap, width: u32, height: u32) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(width, height, WHITE)?;
    let (axes, cbar) = frame_rects(width, height);
    let norm = Normalize::new(field.min(), field.max());

    draw_cells(&mut canvas, field, colormap, norm, axes);
    canvas.stroke_rect(axes, BLACK);
    draw_axis_ticks(&mut canvas, field, axes);

    draw_colorbar(&mut canvas, colormap, cbar);
    canvas.stroke_rect(cbar, BLACK);
    draw_colorbar_ticks(&mut canvas, norm, cbar);

    Ok(canvas.into_image())
}

/// Pixel rectangles of the plot area and the colorbar for a figure size.
pub fn frame_rects(width: u32, height: u32) -> (Rect, Rect) {
    let px = |f: f32, n: u32| (f * n as f32).round() as i32;
    let top = px(AXES_TOP, height);
    let bottom = px(AXES_BOTTOM, height);
    let axes = Rect::new(
        px(AXES_LEFT, width),
        top,
        px(AXES_RIGHT, width) - px(AXES_LEFT, width),
        bottom - top,
    );
    let cbar = Rect::new(
        px(CBAR_LEFT, width),
        top,
        px(CBAR_RIGHT, width) - px(CBAR_LEFT, width),
        bottom - top,
    );
    (axes, cbar)
}

// Nearest-cell shading: every grid sample owns an equal-size cell, so the
// data extent runs half a cell past [-1, 1] on each side.
fn draw_cells(canvas: &mut Canvas, field: &WaveField, colormap: ColorMap, norm: Normalize, axes: Rect) {
    let (rows, cols) = (field.rows(), field.cols());
    if rows == 0 || cols == 0 || axes.width <= 0 || axes.height <= 0 {
        return;
    }
    for py in 0..axes.height {
        let v = (py as f32 + 0.5) / axes.height as f32;
        let row = rows - 1 - ((v * rows as f32) as usize).min(rows - 1);
        for px in 0..axes.width {
            let u = (px as f32 + 0.5) / axes.width as f32;
            let col = ((u * cols as f32) as usize).min(cols - 1);
            let [r, g, b] = colormap.sample(norm.apply(field.get(row, col)));
            canvas.put(axes.x + px, axes.y + py, Rgba([r, g, b, 255]));
        }
    }
}

fn draw_axis_ticks(canvas: &mut Canvas, field: &WaveField, axes: Rect) {
    let half_x = if field.cols() > 1 { 1.0 / (field.cols() - 1) as f64 } else { 1.0 };
    let half_y = if field.rows() > 1 { 1.0 / (field.rows() - 1) as f64 } else { 1.0 };
    let label_h = font::text_height(LABEL_SCALE);

    for v in AXIS_TICKS {
        let label = format!("{v:.1}");
        let label_w = font::text_width(&label, LABEL_SCALE);

        let fx = (v + 1.0 + half_x) / (2.0 + 2.0 * half_x);
        let x = axes.x + (fx * axes.width as f64).round() as i32;
        canvas.line(x, axes.bottom(), x, axes.bottom() + TICK_LEN, BLACK);
        canvas.text(x - label_w / 2, axes.bottom() + TICK_LEN + 3, &label, LABEL_SCALE, BLACK);

        let fy = (v + 1.0 + half_y) / (2.0 + 2.0 * half_y);
        let y = axes.bottom() - (fy * axes.height as f64).round() as i32;
        canvas.line(axes.x - TICK_LEN, y, axes.x, y, BLACK);
        canvas.text(axes.x - TICK_LEN - 3 - label_w, y - label_h / 2, &label, LABEL_SCALE, BLACK);
    }
}

fn draw_colorbar(canvas: &mut Canvas, colormap: ColorMap, cbar: Rect) {
    for py in 0..cbar.height {
        let t = 1.0 - (py as f32 + 0.5) / cbar.height as f32;
        let [r, g, b] = colormap.sample(t);
        canvas.fill_rect(Rect::new(cbar.x, cbar.y + py, cbar.width, 1), Rgba([r, g, b, 255]));
    }
}

fn draw_colorbar_ticks(canvas: &mut Canvas, norm: Normalize, cbar: Rect) {
    let span = norm.vmax - norm.vmin;
    let values = if span.abs() <= f64::EPSILON {
        vec![norm.vmin]
    } else {
        linspace(norm.vmin, norm.vmax, CBAR_TICKS)
    };
    let label_h = font::text_height(LABEL_SCALE);
    for v in values {
        let t = norm.apply(v) as f64;
        let y = cbar.bottom() - 1 - (t * (cbar.height - 1) as f64).round() as i32;
        canvas.line(cbar.right(), y, cbar.right() + TICK_LEN, y, BLACK);
        canvas.text(
            cbar.right() + TICK_LEN + 3,
            y - label_h / 2,
            &format_tick(v, span),
            LABEL_SCALE,
            BLACK,
        );
    }
}

/// Fewer decimals as the data range grows.
pub fn format_tick(value: f64, span: f64) -> String {
    let span = span.abs();
    if span >= 10.0 {
        format!("{value:.0}")
    } else if span >= 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}
