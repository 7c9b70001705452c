//! Interactive state shared by the event loop and the compositor.
//!
//! All mutation goes through [`AppState::handle_event`]; the frontend only
//! translates platform events into [`InputEvent`] values and reads the state
//! back when drawing.

use crate::colormap::ColorMap;
use crate::constants::*;
use crate::layout::{Layout, Widget};
use glam::{Mat4, Vec2, Vec3};

/// Frequency band controlled by one slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    Hz,
    Khz,
    Mhz,
    Ghz,
}

impl Band {
    pub const ALL: [Band; 4] = [Band::Hz, Band::Khz, Band::Mhz, Band::Ghz];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Band::Hz => 0,
            Band::Khz => 1,
            Band::Mhz => 2,
            Band::Ghz => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::Hz => "Hz",
            Band::Khz => "kHz",
            Band::Mhz => "MHz",
            Band::Ghz => "GHz",
        }
    }

    /// Upper end of the slider range, in band units.
    pub fn max(self) -> f64 {
        match self {
            Band::Hz => HZ_MAX,
            Band::Khz => KHZ_MAX,
            Band::Mhz => MHZ_MAX,
            Band::Ghz => GHZ_MAX,
        }
    }

    /// Hertz per band unit.
    pub fn multiplier(self) -> f64 {
        match self {
            Band::Hz => 1.0,
            Band::Khz => 1e3,
            Band::Mhz => 1e6,
            Band::Ghz => 1e9,
        }
    }
}

/// Slider positions in band units, each kept within `[0, band.max()]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sliders {
    values: [f64; 4],
}

impl Sliders {
    #[inline]
    pub fn get(&self, band: Band) -> f64 {
        self.values[band.index()]
    }

    /// Store `value`, clamped into the band's range. NaN becomes 0.
    pub fn set(&mut self, band: Band, value: f64) {
        let value = if value.is_nan() { 0.0 } else { value };
        self.values[band.index()] = value.clamp(0.0, band.max());
    }

    pub fn reset(&mut self) {
        self.values = [0.0; 4];
    }

    /// Sum of every band scaled to hertz.
    pub fn total_frequency(&self) -> f64 {
        Band::ALL
            .iter()
            .map(|b| self.get(*b) * b.multiplier())
            .sum()
    }
}

/// Orbit camera angles in degrees. Unbounded; only the trigonometry wraps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraOrientation {
    pub elevation_deg: f32,
    pub azimuth_deg: f32,
}

impl Default for CameraOrientation {
    fn default() -> Self {
        Self {
            elevation_deg: INITIAL_ELEVATION_DEG,
            azimuth_deg: INITIAL_AZIMUTH_DEG,
        }
    }
}

impl CameraOrientation {
    /// Apply a pointer drag of `delta` pixels (x right, y down).
    pub fn rotate_by(&mut self, delta: Vec2) {
        self.elevation_deg += delta.y * DRAG_DEGREES_PER_PIXEL;
        self.azimuth_deg += delta.x * DRAG_DEGREES_PER_PIXEL;
    }

    /// Unit vector from the look-at target towards the eye (z up).
    pub fn eye_direction(&self) -> Vec3 {
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        Vec3::new(ce * ca, ce * sa, se)
    }

    /// Up vector perpendicular to the view direction; stays well defined
    /// when looking straight down or past the pole.
    pub fn up_vector(&self) -> Vec3 {
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();
        Vec3::new(-se * ca, -se * sa, ce)
    }

    /// View matrix for an eye at `distance` from the origin.
    pub fn view_matrix(&self, distance: f32) -> Mat4 {
        Mat4::look_at_rh(self.eye_direction() * distance, Vec3::ZERO, self.up_vector())
    }
}

/// What the held pointer button is currently manipulating.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragTarget {
    #[default]
    Idle,
    Slider(Band),
    /// Orbiting the 3D view; `last` is the previous pointer sample.
    Camera { last: Vec2 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerPressed(Vec2),
    PointerMoved(Vec2),
    PointerReleased,
    Resized { width: u32, height: u32 },
    SaveKey { held: bool },
    /// The window lost focus; pending releases will never arrive.
    FocusLost,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub sliders: Sliders,
    pub camera: CameraOrientation,
    colormap_index: usize,
    drag: DragTarget,
    layout: Layout,
    save_held: bool,
    time_step: u64,
    run_state: RunState,
}

impl AppState {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            sliders: Sliders::default(),
            camera: CameraOrientation::default(),
            colormap_index: 0,
            drag: DragTarget::Idle,
            layout: Layout::compute(width, height),
            save_held: false,
            time_step: 0,
            run_state: RunState::Running,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerPressed(p) => self.pointer_pressed(p),
            InputEvent::PointerMoved(p) => self.pointer_moved(p),
            InputEvent::PointerReleased => self.drag = DragTarget::Idle,
            InputEvent::Resized { width, height } => self.layout = Layout::compute(width, height),
            InputEvent::SaveKey { held } => self.save_held = held,
            InputEvent::FocusLost => {
                self.save_held = false;
                self.drag = DragTarget::Idle;
            }
            InputEvent::Quit => self.run_state = RunState::Stopped,
        }
    }

    fn pointer_pressed(&mut self, p: Vec2) {
        match self.layout.hit_test(p) {
            Some(Widget::Slider(band)) => {
                self.drag = DragTarget::Slider(band);
                self.set_slider_from_pointer(band, p);
            }
            Some(Widget::Reset) => {
                self.reset_sliders();
                self.drag = DragTarget::Idle;
            }
            Some(Widget::ColormapCycle) => {
                self.cycle_colormap();
                self.drag = DragTarget::Idle;
            }
            None => self.drag = DragTarget::Camera { last: p },
        }
    }

    fn pointer_moved(&mut self, p: Vec2) {
        match self.drag {
            DragTarget::Idle => {}
            DragTarget::Slider(band) => self.set_slider_from_pointer(band, p),
            DragTarget::Camera { last } => {
                self.camera.rotate_by(p - last);
                self.drag = DragTarget::Camera { last: p };
            }
        }
    }

    fn set_slider_from_pointer(&mut self, band: Band, p: Vec2) {
        let rect = self.layout.slider(band);
        let fraction = (p.x - rect.x as f32) as f64 / rect.width.max(1) as f64;
        self.sliders.set(band, fraction * band.max());
    }

    pub fn reset_sliders(&mut self) {
        self.sliders.reset();
        log::debug!("sliders reset");
    }

    pub fn cycle_colormap(&mut self) {
        self.colormap_index = (self.colormap_index + 1) % ColorMap::ALL.len();
        log::debug!("colormap -> {}", self.colormap().name());
    }

    /// Recompute layout from the current window size. Called at the start of
    /// every frame so hit-testing never lags a resize.
    pub fn begin_frame(&mut self) {
        self.layout = Layout::compute(self.layout.width, self.layout.height);
    }

    pub fn advance_time(&mut self) {
        self.time_step = self.time_step.wrapping_add(1);
    }

    #[inline]
    pub fn total_frequency(&self) -> f64 {
        self.sliders.total_frequency()
    }

    pub fn readout(&self) -> String {
        format!("Total Frequency: {:.2} Hz", self.total_frequency())
    }

    pub fn colormap_index(&self) -> usize {
        self.colormap_index
    }

    pub fn colormap(&self) -> ColorMap {
        ColorMap::from_index(self.colormap_index)
    }

    pub fn drag(&self) -> DragTarget {
        self.drag
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.layout.width, self.layout.height)
    }

    pub fn save_requested(&self) -> bool {
        self.save_held
    }

    pub fn time_step(&self) -> u64 {
        self.time_step
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}
