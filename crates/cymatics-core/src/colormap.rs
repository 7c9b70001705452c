//! Named perceptual color maps and value normalization.
//!
//! Each palette is stored as nine evenly spaced RGB stops and sampled with
//! linear interpolation, which is close enough to the reference palettes at
//! plot resolution.

type Stops = [[u8; 3]; 9];

const VIRIDIS: Stops = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 82, 139],
    [44, 113, 142],
    [33, 145, 140],
    [40, 174, 128],
    [94, 201, 98],
    [170, 220, 50],
    [253, 231, 37],
];

const PLASMA: Stops = [
    [13, 8, 135],
    [75, 3, 161],
    [125, 3, 168],
    [168, 34, 150],
    [203, 70, 121],
    [229, 107, 93],
    [248, 148, 65],
    [253, 195, 40],
    [240, 249, 33],
];

const INFERNO: Stops = [
    [0, 0, 4],
    [31, 12, 72],
    [85, 15, 109],
    [136, 34, 106],
    [186, 54, 85],
    [227, 89, 51],
    [249, 140, 10],
    [249, 201, 50],
    [252, 255, 164],
];

const MAGMA: Stops = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const CIVIDIS: Stops = [
    [0, 34, 78],
    [18, 53, 112],
    [59, 73, 108],
    [87, 93, 109],
    [112, 113, 115],
    [138, 134, 120],
    [166, 157, 117],
    [196, 180, 105],
    [255, 234, 70],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMap {
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
}

impl ColorMap {
    /// Cycle order used by the color-map button.
    pub const ALL: [ColorMap; 5] = [
        ColorMap::Viridis,
        ColorMap::Plasma,
        ColorMap::Inferno,
        ColorMap::Magma,
        ColorMap::Cividis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorMap::Viridis => "viridis",
            ColorMap::Plasma => "plasma",
            ColorMap::Inferno => "inferno",
            ColorMap::Magma => "magma",
            ColorMap::Cividis => "cividis",
        }
    }

    /// Palette at `index`, wrapping past the end of [`ColorMap::ALL`].
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    fn stops(self) -> &'static Stops {
        match self {
            ColorMap::Viridis => &VIRIDIS,
            ColorMap::Plasma => &PLASMA,
            ColorMap::Inferno => &INFERNO,
            ColorMap::Magma => &MAGMA,
            ColorMap::Cividis => &CIVIDIS,
        }
    }

    /// Color for `t` in [0, 1]; values outside are clamped, NaN maps to 0.
    pub fn sample(self, t: f32) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let stops = self.stops();
        let pos = t * (stops.len() - 1) as f32;
        let i = (pos.floor() as usize).min(stops.len() - 2);
        let frac = pos - i as f32;
        let (a, b) = (stops[i], stops[i + 1]);
        let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * frac).round() as u8;
        [lerp(a[0], b[0]), lerp(a[1], b[1]), lerp(a[2], b[2])]
    }
}

/// Linear mapping of data values onto [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalize {
    pub vmin: f64,
    pub vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }

    /// A degenerate range (flat data) maps every value to 0.
    pub fn apply(&self, value: f64) -> f32 {
        let span = self.vmax - self.vmin;
        if span.abs() <= f64::EPSILON {
            0.0
        } else {
            ((value - self.vmin) / span).clamp(0.0, 1.0) as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_first_and_last_stop() {
        for cmap in ColorMap::ALL {
            assert_eq!(cmap.sample(0.0), cmap.stops()[0]);
            assert_eq!(cmap.sample(1.0), cmap.stops()[8]);
        }
    }

    #[test]
    fn sample_clamps_out_of_range() {
        assert_eq!(ColorMap::Magma.sample(-3.0), ColorMap::Magma.sample(0.0));
        assert_eq!(ColorMap::Magma.sample(7.0), ColorMap::Magma.sample(1.0));
        assert_eq!(ColorMap::Magma.sample(f32::NAN), ColorMap::Magma.sample(0.0));
    }

    #[test]
    fn flat_range_normalizes_to_zero() {
        let norm = Normalize::new(5.0, 5.0);
        assert_eq!(norm.apply(5.0), 0.0);
        let norm = Normalize::new(0.0, 10.0);
        assert!((norm.apply(2.5) - 0.25).abs() < 1e-6);
    }
}
