// Shared tuning constants used by the core renderer and the native frontend.

// Window
pub const WINDOW_TITLE: &str = "3D Cymatics Simulator";
pub const INITIAL_WINDOW_SIZE: (u32, u32) = (1600, 900);
pub const TARGET_FPS: u32 = 30;

// Wave synthesis
pub const SAMPLING_RATE: f64 = 44_100.0; // samples per second of the phase buffer
pub const WAVE_AMPLITUDE: f64 = 200.0;
pub const WAVE_DURATION_SEC: f64 = 1.0;
pub const PHASE_SAMPLE_PERIOD: u64 = 100; // time step is reduced modulo this
pub const GRID_ROWS: usize = 100;
pub const GRID_COLS: usize = 100;
pub const SMOOTHING_SIGMA: f64 = 1.0;
pub const SMOOTHING_TRUNCATE: f64 = 4.0; // kernel radius in sigmas

// Camera
pub const INITIAL_ELEVATION_DEG: f32 = 30.0;
pub const INITIAL_AZIMUTH_DEG: f32 = 45.0;
pub const DRAG_DEGREES_PER_PIXEL: f32 = 0.2;

// Plot figures
pub const FIGURE_WIDTH: u32 = 640;
pub const FIGURE_HEIGHT: u32 = 480;
pub const SURFACE_Z_LIMIT: f32 = 300.0; // vertical axis spans [-limit, limit]
pub const SURFACE_BOX_ASPECT_Z: f32 = 0.75; // box height relative to its half-width
pub const SURFACE_CAMERA_DISTANCE: f32 = 5.0;
pub const SURFACE_FOV_Y_DEG: f32 = 32.0;

// Widgets (pixels)
pub const SLIDER_LEFT: i32 = 100;
pub const SLIDER_SPACING: i32 = 300;
pub const SLIDER_WIDTH: i32 = 200;
pub const SLIDER_HEIGHT: i32 = 30;
pub const SLIDER_KNOB_WIDTH: i32 = 20;
pub const SLIDER_KNOB_HEIGHT: i32 = 40;
pub const CONTROLS_BOTTOM_OFFSET: i32 = 100; // widget row sits this far above the bottom edge
pub const READOUT_BOTTOM_OFFSET: i32 = 150;
pub const RESET_BUTTON_SIZE: (i32, i32) = (100, 40);
pub const RESET_BUTTON_RIGHT_OFFSET: i32 = 200;
pub const COLORMAP_BUTTON_SIZE: (i32, i32) = (150, 40);
pub const COLORMAP_BUTTON_RIGHT_OFFSET: i32 = 400;
pub const TEXT_SCALE: i32 = 2;
pub const BUTTON_TEXT_SCALE: i32 = 1;

// Slider ranges per band
pub const HZ_MAX: f64 = 999.0;
pub const KHZ_MAX: f64 = 999.0;
pub const MHZ_MAX: f64 = 1.0;
pub const GHZ_MAX: f64 = 1.0;

// Snapshot
pub const EXPORT_FILENAME: &str = "cymatics_pattern.png";
