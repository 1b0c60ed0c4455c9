//! Ripple field generator: a fading puddle core with three expanding rings

use rand::Rng;
use rand_distr::StandardNormal;

/// Plot space spans `[0, PLOT_EXTENT]` on both axes
pub const PLOT_EXTENT: f64 = 100.0;

const CORE_RADIUS_SCALE: f64 = 0.5;
const CORE_PEAK: f64 = 0.7;
const NOISE_STD: f64 = 0.02;
const RING_COUNT: usize = 3;
const RING_WIDTH: f64 = 2.0;
const RING_PEAK: f64 = 0.5;

/// Square grid of intensities covering plot space.
///
/// Column `i` sits at plot x `i * cell`, row `j` at plot y `j * cell`
/// (y grows upward), where `cell = PLOT_EXTENT / resolution`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    resolution: usize,
    values: Vec<f64>,
}

impl Field {
    pub fn zeros(resolution: usize) -> Self {
        let resolution = resolution.max(1);
        Self {
            resolution,
            values: vec![0.0; resolution * resolution],
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn cell_size(&self) -> f64 {
        PLOT_EXTENT / self.resolution as f64
    }

    pub fn get(&self, col: usize, row: usize) -> f64 {
        self.values[row * self.resolution + col]
    }

    fn set(&mut self, col: usize, row: usize, v: f64) {
        self.values[row * self.resolution + col] = v;
    }

    /// Nearest-cell lookup at a plot coordinate, clamped to the grid
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let last = self.resolution - 1;
        let cell = self.cell_size();
        let col = ((x / cell).floor().max(0.0) as usize).min(last);
        let row = ((y / cell).floor().max(0.0) as usize).min(last);
        self.get(col, row)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn peak(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Inputs for one ripple frame
#[derive(Debug, Clone, Copy)]
pub struct RippleParams {
    /// Puddle radius scale in plot units
    pub size: f64,
    /// Ripple expansion step, starting at 1
    pub layer: usize,
    pub center: (f64, f64),
    /// Decay multiplier in `[0, 1]`
    pub fade: f64,
}

/// Outer radius of ring `index`; the ring covers `(outer - RING_WIDTH, outer]`
pub fn ring_outer_radius(size: f64, index: usize) -> f64 {
    size + RING_WIDTH * index as f64
}

/// Brightness of ring `index`, modulated so successive rings do not fade monotonically
pub fn ring_intensity(index: usize, fade: f64) -> f64 {
    RING_PEAK * fade * (0.5 + 0.5 * (index as f64 / 2.0).sin())
}

/// Build one ripple frame.
///
/// The core blob falls off linearly from `0.7 * fade` at the centre to zero at
/// `0.5 * size`, with gaussian noise inside the blob only. Rings `layer`,
/// `layer + 1` and `layer + 2` then overwrite whatever lies under them. The
/// result is clipped to `[0, 1]`.
pub fn ripple_field<R: Rng + ?Sized>(params: &RippleParams, resolution: usize, rng: &mut R) -> Field {
    let mut field = Field::zeros(resolution);
    let cell = field.cell_size();
    let (cx, cy) = params.center;
    let core_radius = params.size * CORE_RADIUS_SCALE;

    let rings: Vec<(f64, f64, f64)> = (params.layer..params.layer + RING_COUNT)
        .map(|r| {
            let outer = ring_outer_radius(params.size, r);
            let inner = outer - RING_WIDTH;
            (inner * inner, outer * outer, ring_intensity(r, params.fade))
        })
        .collect();

    for row in 0..field.resolution {
        let dy = row as f64 * cell - cy;
        for col in 0..field.resolution {
            let dx = col as f64 * cell - cx;
            let dist_sq = dx * dx + dy * dy;

            let mut v = 0.0;
            if core_radius > 0.0 {
                let grad = (1.0 - dist_sq.sqrt() / core_radius).clamp(0.0, 1.0);
                if grad > 0.0 {
                    let noise: f64 = rng.sample(StandardNormal);
                    v = CORE_PEAK * params.fade * grad + noise * NOISE_STD;
                }
            }

            // Rings are disjoint, so at most one matches
            if let Some(&(_, _, ring_v)) = rings
                .iter()
                .find(|(inner_sq, outer_sq, _)| dist_sq > *inner_sq && dist_sq <= *outer_sq)
            {
                v = ring_v;
            }

            field.set(col, row, v.clamp(0.0, 1.0));
        }
    }

    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(size: f64, layer: usize, fade: f64) -> RippleParams {
        RippleParams { size, layer, center: (50.0, 50.0), fade }
    }

    #[test]
    fn field_stays_within_unit_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for &size in &[5.0, 12.5, 25.0] {
            for layer in [1, 5, 25] {
                for &fade in &[0.0, 0.3, 1.0] {
                    let f = ripple_field(&params(size, layer, fade), 100, &mut rng);
                    assert!(f.values().iter().all(|v| (0.0..=1.0).contains(v)));
                }
            }
        }
    }

    #[test]
    fn zero_fade_leaves_only_noise() {
        let mut rng = StdRng::seed_from_u64(2);
        let f = ripple_field(&params(17.5, 3, 0.0), 100, &mut rng);
        // Rings are exactly zero; the core is clipped noise of a few std at most
        assert!(f.peak() < 0.2);
        assert_eq!(f.get(50, 50 + 17 + 6), 0.0);
    }

    #[test]
    fn core_peaks_near_centre() {
        let mut rng = StdRng::seed_from_u64(3);
        let f = ripple_field(&params(17.5, 1, 1.0), 100, &mut rng);
        let centre = f.get(50, 50);
        assert!((centre - 0.7).abs() < 0.1, "centre = {centre}");
        // Outside the blob and between blob edge and first ring: empty
        assert_eq!(f.get(50 + 12, 50), 0.0);
    }

    #[test]
    fn rings_overwrite_with_modulated_intensity() {
        let mut rng = StdRng::seed_from_u64(4);
        let size = 10.0;
        let f = ripple_field(&params(size, 1, 1.0), 100, &mut rng);
        // Ring 1 covers (10, 12]: distance 11 along the x axis
        assert!((f.get(61, 50) - ring_intensity(1, 1.0)).abs() < 1e-12);
        // Ring 3 covers (14, 16]
        assert!((f.get(50, 66) - ring_intensity(3, 1.0)).abs() < 1e-12);
        // Beyond the third ring nothing is stamped
        assert_eq!(f.get(50 + 18, 50), 0.0);
    }

    #[test]
    fn core_and_rings_are_separate_bands() {
        let mut rng = StdRng::seed_from_u64(5);
        // Core radius 2, ring 1 covers (4, 6]
        let f = ripple_field(&params(4.0, 1, 1.0), 100, &mut rng);
        assert!(f.get(50, 50) > 0.5);
        assert_eq!(f.get(53, 50), 0.0);
        assert!((f.get(55, 50) - ring_intensity(1, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn successive_rings_do_not_overlap() {
        for &size in &[5.0, 17.5, 25.0] {
            for r in 1..40 {
                let outer_r = ring_outer_radius(size, r);
                let inner_next = ring_outer_radius(size, r + 1) - 2.0;
                assert!(outer_r <= inner_next);
            }
        }
    }

    #[test]
    fn resolution_is_configurable() {
        let mut rng = StdRng::seed_from_u64(6);
        let f = ripple_field(&params(10.0, 1, 1.0), 50, &mut rng);
        assert_eq!(f.resolution(), 50);
        assert_eq!(f.values().len(), 2500);
        assert!((f.sample(50.0, 50.0) - f.get(25, 25)).abs() < 1e-12);
    }

    #[test]
    fn sample_clamps_outside_the_grid() {
        let f = Field::zeros(10);
        assert_eq!(f.sample(-5.0, 120.0), 0.0);
    }
}
