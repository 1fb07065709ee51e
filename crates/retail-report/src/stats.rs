//! Descriptive statistics used by the aggregate views and the density chart.
use itertools_num::linspace;
use statrs::distribution::{Continuous, Normal};
use statrs::statistics::Statistics;

/// Default number of grid points used when evaluating a density estimate.
pub const DEFAULT_KDE_GRID_POINTS: usize = 200;

/// A density curve evaluated on an evenly spaced grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Density {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Density {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().mean())
}

/// Standard error of the mean using the sample (n - 1) standard deviation.
///
/// Returns `None` when there are fewer than two values.
pub fn standard_error(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let std = values.iter().std_dev();
    std.is_finite().then(|| std / (values.len() as f64).sqrt())
}

/// Kernel bandwidth from Scott's rule: `sample_std * n^(-1/5)`.
///
/// Returns `None` when the bandwidth would be zero or undefined, i.e. fewer
/// than two values or no spread at all.
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let std = values.iter().std_dev();
    if !std.is_finite() || std <= 0.0 {
        return None;
    }
    Some(std * (values.len() as f64).powf(-0.2))
}

/// Gaussian kernel density estimate evaluated on `grid_points` evenly spaced
/// points spanning exactly `[min, max]` of the data.
///
/// The grid is cut at the data range, so no density is evaluated outside the
/// observed values. Returns `None` when the bandwidth is undefined
/// (see [`scott_bandwidth`]) or `grid_points` is zero.
pub fn gaussian_kde(values: &[f64], grid_points: usize) -> Option<Density> {
    if grid_points == 0 {
        return None;
    }
    let bandwidth = scott_bandwidth(values)?;
    let kernel = Normal::new(0.0, 1.0).ok()?;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let n = values.len() as f64;

    let x: Vec<f64> = linspace(min, max, grid_points).collect();
    let y = x
        .iter()
        .map(|&xi| {
            let sum: f64 = values
                .iter()
                .map(|&v| kernel.pdf((xi - v) / bandwidth))
                .sum();
            (sum / (n * bandwidth)).max(0.0)
        })
        .collect();

    Some(Density { x, y })
}

/// Round to a fixed number of decimal places, ties to even.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_standard_error() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));

        assert_eq!(standard_error(&[5.0]), None);
        // std of [1, 3] is sqrt(2), se = sqrt(2) / sqrt(2) = 1
        let se = standard_error(&[1.0, 3.0]).unwrap();
        assert!((se - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scott_bandwidth_degenerate_inputs() {
        assert_eq!(scott_bandwidth(&[]), None);
        assert_eq!(scott_bandwidth(&[10.0]), None);
        assert_eq!(scott_bandwidth(&[7.0, 7.0, 7.0]), None);
        assert!(scott_bandwidth(&[1.0, 2.0, 3.0]).unwrap() > 0.0);
    }

    #[test]
    fn test_kde_grid_is_cut_to_data_range() {
        let values = vec![25.0, 50.0, 100.0, 300.0, 500.0, 1000.0, 1500.0, 2000.0];
        let density = gaussian_kde(&values, 50).unwrap();
        assert_eq!(density.len(), 50);
        assert_eq!(density.x.first().copied(), Some(25.0));
        assert!((density.x.last().copied().unwrap() - 2000.0).abs() < 1e-9);
        assert!(density.y.iter().all(|&y| y >= 0.0 && y.is_finite()));
    }

    #[test]
    fn test_kde_integrates_below_one() {
        let values: Vec<f64> = (0..100).map(|i| (i % 10) as f64 * 10.0).collect();
        let density = gaussian_kde(&values, 400).unwrap();
        let step = density.x[1] - density.x[0];
        let area: f64 = density.y.windows(2).map(|w| (w[0] + w[1]) * 0.5 * step).sum();
        // cut at the data range, so some mass falls outside the grid
        assert!(area > 0.5 && area <= 1.0, "area = {}", area);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.333333, 2), 33.33);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(3.125, 2), 3.12);
        assert_eq!(round_to(3.375, 2), 3.38);
        assert_eq!(round_to(40.0, 2), 40.0);
    }
}
