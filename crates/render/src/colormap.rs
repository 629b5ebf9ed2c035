use image::Rgb;
use std::f64::consts::PI;
use std::sync::OnceLock;

/// Number of palette entries; depth is binned to whole units.
pub const BINS: usize = 100;

/// Depth-to-color lookup using the reversed gnuplot "rainbow" palette.
///
/// Bin `round(z)` (ties to even) indexes a 100-entry table. Entry 0 is red
/// and entry 99 is violet. Depths below 0 take entry 0, depths of 99.5 and
/// above take entry 99, and NaN takes entry 0. The palette clamps at both
/// ends instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthColorMap {
    table: [Rgb<u8>; BINS],
}

impl DepthColorMap {
    pub fn new() -> Self {
        let mut table = [Rgb([0, 0, 0]); BINS];
        for (i, entry) in table.iter_mut().enumerate() {
            // reversed: entry i samples the forward palette at 1 - i / (BINS - 1)
            let t = 1.0 - i as f64 / (BINS - 1) as f64;
            *entry = Rgb(rainbow(t).map(to_channel));
        }
        Self { table }
    }

    /// Process-wide table, built on first use.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<DepthColorMap> = OnceLock::new();
        SHARED.get_or_init(Self::new)
    }

    pub fn bin(z: f32) -> usize {
        let rounded = z.round_ties_even();
        if rounded.is_nan() || rounded <= 0.0 {
            0
        } else if rounded >= (BINS - 1) as f32 {
            BINS - 1
        } else {
            rounded as usize
        }
    }

    pub fn color(&self, z: f32) -> Rgb<u8> {
        self.table[Self::bin(z)]
    }
}

impl Default for DepthColorMap {
    fn default() -> Self {
        Self::new()
    }
}

fn rainbow(t: f64) -> [f64; 3] {
    [
        (2.0 * t - 0.5).abs(),
        (PI * t).sin(),
        (PI * t / 2.0).cos(),
    ]
    .map(|c| c.clamp(0.0, 1.0))
}

fn to_channel(c: f64) -> u8 {
    (255.0 * c).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn palette_endpoints() {
        let cmap = DepthColorMap::new();
        assert_eq!(cmap.color(0.0), Rgb([255, 0, 0]));
        assert_eq!(cmap.color(99.0), Rgb([128, 0, 255]));
    }

    #[test]
    fn middle_entry_matches_palette_formula() {
        let cmap = DepthColorMap::new();
        let t = 1.0 - 50.0 / 99.0;
        let expected = rainbow(t);
        let got = cmap.color(50.0);
        for ch in 0..3 {
            assert_relative_eq!(got[ch] as f64, 255.0 * expected[ch], epsilon = 0.5);
        }
    }

    #[test]
    fn out_of_range_depth_clamps() {
        let cmap = DepthColorMap::new();
        assert_eq!(cmap.color(-12.0), cmap.color(0.0));
        assert_eq!(cmap.color(f32::NAN), cmap.color(0.0));
        assert_eq!(cmap.color(250.0), cmap.color(99.0));
        assert_eq!(cmap.color(f32::INFINITY), cmap.color(99.0));
    }

    #[test]
    fn rounding_ties_to_even() {
        assert_eq!(DepthColorMap::bin(2.5), 2);
        assert_eq!(DepthColorMap::bin(3.5), 4);
        assert_eq!(DepthColorMap::bin(2.49), 2);
        assert_eq!(DepthColorMap::bin(-0.4), 0);
    }

    #[test]
    fn shared_matches_fresh_table() {
        assert_eq!(DepthColorMap::shared(), &DepthColorMap::new());
    }

    proptest! {
        #[test]
        fn same_bin_same_color(z in -20.0f32..150.0f32, jitter in -0.49f32..0.49f32) {
            let cmap = DepthColorMap::shared();
            let center = z.round_ties_even();
            prop_assert_eq!(cmap.color(center), cmap.color(center + jitter));
        }
    }
}
