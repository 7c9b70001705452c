//! Widget geometry derived from the window size.
//!
//! [`Layout::compute`] is the only place widget rectangles are defined. The
//! state machine hit-tests against the stored layout and the compositor draws
//! from the same value, so both always agree for a given window size.

use crate::constants::*;
use crate::state::Band;
use glam::Vec2;

/// Axis-aligned pixel rectangle. Contains its top/left edges, not its
/// bottom/right edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x as f32
            && p.x < (self.x + self.width) as f32
            && p.y >= self.y as f32
            && p.y < (self.y + self.height) as f32
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

/// Interactive regions, in hit-test priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Widget {
    Slider(Band),
    Reset,
    ColormapCycle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub sliders: [Rect; 4],
    pub reset: Rect,
    pub colormap: Rect,
    pub surface_origin: (i32, i32),
    pub heatmap_origin: (i32, i32),
    pub readout_y: i32,
}

impl Layout {
    pub fn compute(width: u32, height: u32) -> Self {
        let w = width as i32;
        let h = height as i32;
        let row_y = h - CONTROLS_BOTTOM_OFFSET;
        let slider = |i: i32| Rect::new(SLIDER_LEFT + SLIDER_SPACING * i, row_y, SLIDER_WIDTH, SLIDER_HEIGHT);
        Self {
            width,
            height,
            sliders: [slider(0), slider(1), slider(2), slider(3)],
            reset: Rect::new(
                w - RESET_BUTTON_RIGHT_OFFSET,
                row_y,
                RESET_BUTTON_SIZE.0,
                RESET_BUTTON_SIZE.1,
            ),
            colormap: Rect::new(
                w - COLORMAP_BUTTON_RIGHT_OFFSET,
                row_y,
                COLORMAP_BUTTON_SIZE.0,
                COLORMAP_BUTTON_SIZE.1,
            ),
            surface_origin: (0, 0),
            heatmap_origin: (w / 2, 0),
            readout_y: h - READOUT_BOTTOM_OFFSET,
        }
    }

    #[inline]
    pub fn slider(&self, band: Band) -> Rect {
        self.sliders[band.index()]
    }

    /// First widget under `p`, sliders first, then reset, then color map.
    pub fn hit_test(&self, p: Vec2) -> Option<Widget> {
        if let Some(band) = Band::ALL.into_iter().find(|b| self.slider(*b).contains(p)) {
            return Some(Widget::Slider(band));
        }
        if self.reset.contains(p) {
            return Some(Widget::Reset);
        }
        if self.colormap.contains(p) {
            return Some(Widget::ColormapCycle);
        }
        None
    }
}
