//! Radial sine-ripple wave field over a normalized square mesh.
//!
//! The field is deliberately simple: a single phase sample taken from a
//! one-second sine buffer scales a radial `sin(k * r)` pattern, which is
//! then rectified and smoothed. Higher frequencies pack more rings into the
//! same fixed-resolution mesh and eventually alias; that is accepted.

use crate::config::FieldParams;
use crate::constants::{PHASE_SAMPLE_PERIOD, SMOOTHING_TRUNCATE};
use std::f64::consts::TAU;

/// Scalar magnitudes on a `rows x cols` mesh covering [-1, 1] on both axes.
///
/// Storage is row-major; row `r` sits at `y = linspace(-1, 1, rows)[r]` and
/// column `c` at `x = linspace(-1, 1, cols)[c]`.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveField {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl WaveField {
    /// Compute the field for `frequency_hz` at animation `time_step`.
    pub fn generate(frequency_hz: f64, time_step: u64, params: &FieldParams) -> Self {
        let frequency = if frequency_hz.is_finite() && frequency_hz > 0.0 {
            frequency_hz
        } else {
            0.0
        };

        let wave = sine_wave(
            frequency,
            params.duration_sec,
            params.sampling_rate,
            params.amplitude,
        );
        let phase_index = (time_step % PHASE_SAMPLE_PERIOD) as usize;
        let phase_amplitude = wave.get(phase_index).copied().unwrap_or(0.0);
        let wavenumber = TAU * frequency / params.sampling_rate;

        let xs = linspace(-1.0, 1.0, params.cols);
        let ys = linspace(-1.0, 1.0, params.rows);
        let mut values = Vec::with_capacity(params.rows * params.cols);
        for y in &ys {
            for x in &xs {
                let distance = (x * x + y * y).sqrt();
                values.push((phase_amplitude * (wavenumber * distance).sin()).abs());
            }
        }

        let values = gaussian_filter(&values, params.rows, params.cols, params.sigma);
        Self {
            rows: params.rows,
            cols: params.cols,
            values,
        }
    }

    /// Build a field from raw row-major values.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Option<Self> {
        (values.len() == rows * cols).then_some(Self { rows, cols, values })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// Mesh x coordinate of column `col`.
    pub fn x_at(&self, col: usize) -> f64 {
        mesh_coord(col, self.cols)
    }

    /// Mesh y coordinate of row `row`.
    pub fn y_at(&self, row: usize) -> f64 {
        mesh_coord(row, self.rows)
    }
}

#[inline]
fn mesh_coord(i: usize, n: usize) -> f64 {
    if n <= 1 {
        -1.0
    } else {
        -1.0 + 2.0 * i as f64 / (n - 1) as f64
    }
}

/// `n` evenly spaced samples from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Sample buffer of `amplitude * sin(2π f t)` over `duration` seconds.
pub fn sine_wave(frequency: f64, duration: f64, sampling_rate: f64, amplitude: f64) -> Vec<f64> {
    let len = (sampling_rate * duration).max(0.0) as usize;
    (0..len)
        .map(|i| {
            let t = i as f64 / sampling_rate;
            amplitude * (TAU * frequency * t).sin()
        })
        .collect()
}

/// Normalized 1D Gaussian weights, truncated at `truncate` sigmas.
pub fn gaussian_kernel(sigma: f64, truncate: f64) -> Vec<f64> {
    if sigma <= 0.0 {
        return vec![1.0];
    }
    let radius = (truncate * sigma + 0.5) as isize;
    let mut weights: Vec<f64> = (-radius..=radius)
        .map(|x| (-0.5 * (x * x) as f64 / (sigma * sigma)).exp())
        .collect();
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Separable Gaussian blur of a row-major grid with half-sample symmetric
/// ("reflect") boundaries.
pub fn gaussian_filter(values: &[f64], rows: usize, cols: usize, sigma: f64) -> Vec<f64> {
    if rows == 0 || cols == 0 {
        return values.to_vec();
    }
    let kernel = gaussian_kernel(sigma, SMOOTHING_TRUNCATE);
    let radius = (kernel.len() / 2) as isize;

    // Horizontal pass
    let mut tmp = vec![0.0; rows * cols];
    for r in 0..rows {
        let row = &values[r * cols..(r + 1) * cols];
        for c in 0..cols {
            tmp[r * cols + c] = kernel
                .iter()
                .enumerate()
                .map(|(k, w)| w * row[reflect_index(c as isize + k as isize - radius, cols)])
                .sum();
        }
    }

    // Vertical pass
    let mut out = vec![0.0; rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            out[r * cols + c] = kernel
                .iter()
                .enumerate()
                .map(|(k, w)| {
                    let rr = reflect_index(r as isize + k as isize - radius, rows);
                    w * tmp[rr * cols + c]
                })
                .sum();
        }
    }
    out
}

/// Map an out-of-range index onto `0..n` by mirroring about the edges
/// (`d c b a | a b c d | d c b a`).
#[inline]
pub fn reflect_index(i: isize, n: usize) -> usize {
    let period = 2 * n as isize;
    let m = i.rem_euclid(period);
    if m < n as isize {
        m as usize
    } else {
        (period - 1 - m) as usize
    }
}
