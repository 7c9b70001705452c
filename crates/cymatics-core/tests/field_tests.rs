// Tests for wave field synthesis and the smoothing helpers it is built on.

use cymatics_core::field::{gaussian_filter, gaussian_kernel, linspace, reflect_index, sine_wave};
use cymatics_core::{FieldParams, WaveField};

const EPS: f64 = 1e-9;

fn field(frequency: f64, time_step: u64) -> WaveField {
    WaveField::generate(frequency, time_step, &FieldParams::default())
}

#[test]
fn zero_frequency_gives_flat_zero_field() {
    let f = field(0.0, 17);
    assert!(f.values().iter().all(|v| v.abs() < EPS));
}

#[test]
fn first_time_step_samples_zero_phase() {
    // sin(0) = 0, so every frequency starts flat.
    let f = field(1234.5, 0);
    assert!(f.values().iter().all(|v| v.abs() < EPS));
}

#[test]
fn field_has_configured_shape() {
    let f = field(440.0, 3);
    assert_eq!(f.rows(), 100);
    assert_eq!(f.cols(), 100);
    assert_eq!(f.values().len(), 100 * 100);
}

#[test]
fn field_is_non_negative_and_finite() {
    for freq in [1.0, 440.0, 999_999.0, 1_001_000_000.0] {
        let f = field(freq, 7);
        for v in f.values() {
            assert!(v.is_finite(), "non-finite value at {freq} Hz");
            assert!(*v >= 0.0, "negative value at {freq} Hz");
        }
    }
}

#[test]
fn nonzero_frequency_produces_ripples() {
    let f = field(440.0, 1);
    assert!(f.max() > 0.0);
    assert!(f.max() > f.min());
}

#[test]
fn invalid_frequency_is_treated_as_zero() {
    assert_eq!(field(-50.0, 5), field(0.0, 5));
    assert_eq!(field(f64::NAN, 5), field(0.0, 5));
}

#[test]
fn phase_repeats_every_hundred_steps() {
    assert_eq!(field(880.0, 5), field(880.0, 105));
    assert_eq!(field(880.0, 42), field(880.0, 4_242));
}

#[test]
fn field_is_radially_symmetric() {
    let f = field(2_000.0, 9);
    let n = f.rows();
    for r in 0..n {
        for c in 0..n {
            let v = f.get(r, c);
            assert!((v - f.get(r, n - 1 - c)).abs() < 1e-6, "mirror x at ({r},{c})");
            assert!((v - f.get(n - 1 - r, c)).abs() < 1e-6, "mirror y at ({r},{c})");
            assert!((v - f.get(c, r)).abs() < 1e-6, "transpose at ({r},{c})");
        }
    }
}

#[test]
fn mesh_coordinates_span_unit_square() {
    let f = field(0.0, 0);
    assert!((f.x_at(0) + 1.0).abs() < EPS);
    assert!((f.x_at(99) - 1.0).abs() < EPS);
    assert!((f.y_at(0) + 1.0).abs() < EPS);
    assert!((f.y_at(99) - 1.0).abs() < EPS);
}

#[test]
fn from_values_rejects_mismatched_length() {
    assert!(WaveField::from_values(2, 2, vec![0.0; 4]).is_some());
    assert!(WaveField::from_values(2, 2, vec![0.0; 3]).is_none());
}

#[test]
fn sine_buffer_covers_one_second() {
    let wave = sine_wave(440.0, 1.0, 44_100.0, 200.0);
    assert_eq!(wave.len(), 44_100);
    assert!(wave[0].abs() < EPS);
    assert!(wave.iter().all(|s| s.abs() <= 200.0 + EPS));
}

#[test]
fn linspace_includes_both_endpoints() {
    let xs = linspace(-1.0, 1.0, 5);
    assert_eq!(xs.len(), 5);
    assert!((xs[0] + 1.0).abs() < EPS);
    assert!((xs[2]).abs() < EPS);
    assert!((xs[4] - 1.0).abs() < EPS);
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
}

#[test]
fn kernel_is_normalized_and_symmetric() {
    let k = gaussian_kernel(1.0, 4.0);
    assert_eq!(k.len(), 9);
    let sum: f64 = k.iter().sum();
    assert!((sum - 1.0).abs() < 1e-12);
    for i in 0..k.len() / 2 {
        assert!((k[i] - k[k.len() - 1 - i]).abs() < 1e-15);
    }
    assert!(k[4] > k[3]);
}

#[test]
fn smoothing_preserves_constant_field() {
    let values = vec![3.0; 6 * 4];
    let out = gaussian_filter(&values, 6, 4, 1.0);
    assert!(out.iter().all(|v| (v - 3.0).abs() < 1e-12));
}

#[test]
fn smoothing_spreads_a_single_peak() {
    let mut values = vec![0.0; 9 * 9];
    values[4 * 9 + 4] = 1.0;
    let out = gaussian_filter(&values, 9, 9, 1.0);
    let total: f64 = out.iter().sum();
    assert!((total - 1.0).abs() < 1e-12);
    assert!(out[4 * 9 + 4] < 1.0);
    assert!(out[4 * 9 + 5] > 0.0);
}

#[test]
fn reflect_index_mirrors_about_edges() {
    assert_eq!(reflect_index(0, 5), 0);
    assert_eq!(reflect_index(4, 5), 4);
    assert_eq!(reflect_index(-1, 5), 0);
    assert_eq!(reflect_index(-2, 5), 1);
    assert_eq!(reflect_index(5, 5), 4);
    assert_eq!(reflect_index(6, 5), 3);
    assert_eq!(reflect_index(-4, 2), 0);
}
