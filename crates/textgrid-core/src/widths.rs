//! Column width hints for presentation.
//!
//! Widths are derived from inter-cluster spacing so that a spreadsheet
//! writer can size columns roughly in proportion to the layout they came
//! from. These are presentation policy, not a structural invariant.

use crate::cluster::Cluster;

/// Options for column width estimation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidthOptions {
    /// Minimum spacing basis between adjacent clusters.
    pub min_spacing: f64,
    /// Spacing basis used for the last column (no next cluster exists).
    pub trailing_spacing: f64,
    /// Linear factor converting a spacing basis to an output width.
    pub scale: f64,
    /// Lower clamp on the output width.
    pub min_width: f64,
    /// Upper clamp on the output width.
    pub max_width: f64,
}

impl Default for WidthOptions {
    fn default() -> Self {
        Self {
            min_spacing: 2.0,
            trailing_spacing: 10.0,
            scale: 1.6,
            min_width: 10.0,
            max_width: 60.0,
        }
    }
}

/// Derive one width hint per column from inter-cluster spacing.
///
/// For column i the basis is the distance to the next cluster's mean,
/// floored at `min_spacing`; the last column uses `trailing_spacing`. The
/// basis is scaled, rounded, and clamped to `[min_width, max_width]`.
pub fn estimate_column_widths(clusters: &[Cluster], options: &WidthOptions) -> Vec<f64> {
    clusters
        .iter()
        .enumerate()
        .map(|(i, cluster)| {
            let basis = match clusters.get(i + 1) {
                Some(next) => (next.mean - cluster.mean).max(options.min_spacing),
                None => options.trailing_spacing,
            };
            (basis * options.scale)
                .round()
                .clamp(options.min_width, options.max_width)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster_positions;

    fn clusters_at(means: &[f64]) -> Vec<Cluster> {
        // Well-separated values with a small tolerance: one cluster each
        cluster_positions(means, 0.01)
    }

    #[test]
    fn test_widths_empty() {
        assert!(estimate_column_widths(&[], &WidthOptions::default()).is_empty());
    }

    #[test]
    fn test_widths_single_column_uses_trailing() {
        let widths = estimate_column_widths(&clusters_at(&[5.0]), &WidthOptions::default());
        // trailing 10.0 * 1.6 = 16
        assert_eq!(widths, vec![16.0]);
    }

    #[test]
    fn test_widths_evenly_spaced_equal_except_last() {
        let widths = estimate_column_widths(&clusters_at(&[0.0, 100.0, 200.0]), &WidthOptions::default());
        assert_eq!(widths.len(), 3);
        // 100 * 1.6 = 160, clamped to 60
        assert_eq!(widths[0], widths[1]);
        assert_eq!(widths[0], 60.0);
        assert_eq!(widths[2], 16.0);
    }

    #[test]
    fn test_widths_spacing_floor() {
        // Clusters 0.5 apart: basis floors at min_spacing 2.0 -> 3.2 -> 3,
        // then the min_width clamp lifts it to 10
        let widths = estimate_column_widths(&clusters_at(&[0.0, 0.5]), &WidthOptions::default());
        assert_eq!(widths[0], 10.0);
    }

    #[test]
    fn test_widths_clamped_to_range() {
        let widths = estimate_column_widths(&clusters_at(&[0.0, 1000.0]), &WidthOptions::default());
        assert_eq!(widths[0], 60.0);
    }

    #[test]
    fn test_widths_moderate_spacing_unclamped() {
        // 20 apart: 20 * 1.6 = 32, inside the clamp range
        let widths = estimate_column_widths(&clusters_at(&[0.0, 20.0]), &WidthOptions::default());
        assert_eq!(widths[0], 32.0);
    }

    #[test]
    fn test_widths_custom_options() {
        let options = WidthOptions {
            min_spacing: 1.0,
            trailing_spacing: 4.0,
            scale: 2.0,
            min_width: 1.0,
            max_width: 100.0,
        };
        let widths = estimate_column_widths(&clusters_at(&[0.0, 30.0]), &options);
        assert_eq!(widths, vec![60.0, 8.0]);
    }
}
