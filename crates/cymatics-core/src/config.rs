use crate::constants::*;
use std::path::PathBuf;
use std::time::Duration;

/// Parameters of the wave field synthesis.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub sampling_rate: f64,
    pub amplitude: f64,
    pub duration_sec: f64,
    pub rows: usize,
    pub cols: usize,
    pub sigma: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            sampling_rate: SAMPLING_RATE,
            amplitude: WAVE_AMPLITUDE,
            duration_sec: WAVE_DURATION_SEC,
            rows: GRID_ROWS,
            cols: GRID_COLS,
            sigma: SMOOTHING_SIGMA,
        }
    }
}

/// Everything the native frontend needs to start a session.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub title: String,
    pub window_size: (u32, u32),
    pub target_fps: u32,
    pub figure_size: (u32, u32),
    pub field: FieldParams,
    pub export_path: PathBuf,
}

impl ViewerConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            window_size: INITIAL_WINDOW_SIZE,
            target_fps: TARGET_FPS,
            figure_size: (FIGURE_WIDTH, FIGURE_HEIGHT),
            field: FieldParams::default(),
            export_path: PathBuf::from(EXPORT_FILENAME),
        }
    }
}
