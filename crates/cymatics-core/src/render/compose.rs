//! Assemble one window-sized frame from the two plots and the widgets.

use super::canvas::{Canvas, BLACK, GREY, RED, WHITE};
use super::font;
use super::{render_heatmap, render_surface};
use crate::config::FieldParams;
use crate::constants::{BUTTON_TEXT_SCALE, SLIDER_KNOB_HEIGHT, SLIDER_KNOB_WIDTH, TEXT_SCALE};
use crate::error::Result;
use crate::field::WaveField;
use crate::layout::Rect;
use crate::state::{AppState, Band};
use image::{Rgba, RgbaImage};

/// Everything produced for a single frame.
pub struct RenderedFrame {
    pub field: WaveField,
    pub heatmap: RgbaImage,
    pub composite: RgbaImage,
}

/// Run the full per-frame pipeline: field, both plots, composite.
pub fn render_frame(state: &AppState, params: &FieldParams, figure: (u32, u32)) -> Result<RenderedFrame> {
    let field = WaveField::generate(state.total_frequency(), state.time_step(), params);
    let colormap = state.colormap();
    let surface = render_surface(&field, &state.camera, colormap, figure.0, figure.1)?;
    let heatmap = render_heatmap(&field, colormap, figure.0, figure.1)?;
    let composite = compose(state, &surface, &heatmap)?;
    Ok(RenderedFrame {
        field,
        heatmap,
        composite,
    })
}

/// Draw plots, sliders, buttons and readouts onto a white frame sized to
/// the state's current layout.
pub fn compose(state: &AppState, surface: &RgbaImage, heatmap: &RgbaImage) -> Result<RgbaImage> {
    let layout = state.layout();
    let mut canvas = Canvas::new(layout.width, layout.height, WHITE)?;

    canvas.blit(surface, layout.surface_origin.0, layout.surface_origin.1);
    canvas.blit(heatmap, layout.heatmap_origin.0, layout.heatmap_origin.1);

    for band in Band::ALL {
        draw_slider(&mut canvas, layout.slider(band), band, state.sliders.get(band));
    }
    draw_button(&mut canvas, layout.reset, RED, "Reset", WHITE);
    draw_button(&mut canvas, layout.colormap, GREY, "Change Colormap", BLACK);
    canvas.text(
        layout.colormap.x,
        layout.colormap.y - 30,
        state.colormap().name(),
        TEXT_SCALE,
        BLACK,
    );

    let readout = state.readout();
    let readout_w = font::text_width(&readout, TEXT_SCALE);
    canvas.text(
        layout.width as i32 / 2 - readout_w / 2,
        layout.readout_y,
        &readout,
        TEXT_SCALE,
        BLACK,
    );

    Ok(canvas.into_image())
}

fn draw_slider(canvas: &mut Canvas, rect: Rect, band: Band, value: f64) {
    canvas.fill_rect(rect, GREY);
    let travel = (rect.width - SLIDER_KNOB_WIDTH) as f64;
    let knob_x = rect.x + (value / band.max() * travel) as i32;
    canvas.fill_rect(
        Rect::new(knob_x, rect.y - 10, SLIDER_KNOB_WIDTH, SLIDER_KNOB_HEIGHT),
        BLACK,
    );
    let label = format!("{}: {:.2}", band.label(), value);
    canvas.text(rect.x, rect.y - 30, &label, TEXT_SCALE, BLACK);
}

/// Filled button with its label centered.
fn draw_button(canvas: &mut Canvas, rect: Rect, fill: Rgba<u8>, label: &str, ink: Rgba<u8>) {
    canvas.fill_rect(rect, fill);
    let x = rect.x + (rect.width - font::text_width(label, BUTTON_TEXT_SCALE)) / 2;
    let y = rect.y + (rect.height - font::text_height(BUTTON_TEXT_SCALE)) / 2;
    canvas.text(x, y, label, BUTTON_TEXT_SCALE, ink);
}
