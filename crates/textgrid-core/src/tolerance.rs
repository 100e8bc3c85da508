//! Adaptive tolerance estimation.
//!
//! Clustering thresholds are derived from the statistical spread of the
//! page's own coordinates rather than fixed point values, so the algorithm
//! behaves the same regardless of the extractor's coordinate units.

/// Options for tolerance estimation.
///
/// The scale factors deliberately undershoot the median spacing so that
/// genuinely distinct rows/columns that happen to sit moderately close are
/// not merged. The floors guard pathological pages (a single fragment, or
/// all-identical coordinates) where the median delta is zero or undefined.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToleranceOptions {
    /// Fraction of the median vertical delta used as the row tolerance.
    pub y_scale: f64,
    /// Fraction of the median horizontal delta used as the column tolerance.
    pub x_scale: f64,
    /// Minimum row tolerance, in page coordinate units.
    pub y_floor: f64,
    /// Minimum column tolerance, in page coordinate units.
    pub x_floor: f64,
}

impl Default for ToleranceOptions {
    fn default() -> Self {
        Self {
            y_scale: 0.6,
            x_scale: 0.5,
            y_floor: 0.5,
            x_floor: 0.35,
        }
    }
}

/// Median of the successive differences between adjacent sorted values.
///
/// Returns `None` when fewer than 2 values are given (no deltas exist).
/// For an even number of deltas, the two middle deltas are averaged.
pub fn median_delta(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut deltas: Vec<f64> = sorted.windows(2).map(|pair| pair[1] - pair[0]).collect();
    deltas.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 0 {
        Some((deltas[mid - 1] + deltas[mid]) / 2.0)
    } else {
        Some(deltas[mid])
    }
}

/// Estimate the row (vertical) tolerance from a page's y coordinates.
pub fn row_tolerance(ys: &[f64], options: &ToleranceOptions) -> f64 {
    scaled_tolerance(ys, options.y_scale, options.y_floor)
}

/// Estimate the column (horizontal) tolerance from a page's x coordinates.
pub fn column_tolerance(xs: &[f64], options: &ToleranceOptions) -> f64 {
    scaled_tolerance(xs, options.x_scale, options.x_floor)
}

/// Scale the median delta and clamp below by the floor.
///
/// A zero or non-finite scaled value falls back to the floor, so the
/// returned tolerance is always positive and at least `floor`.
fn scaled_tolerance(values: &[f64], scale: f64, floor: f64) -> f64 {
    match median_delta(values) {
        Some(median) => {
            let scaled = median * scale;
            if scaled.is_finite() && scaled > 0.0 {
                scaled.max(floor)
            } else {
                floor
            }
        }
        None => floor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- median_delta ---

    #[test]
    fn test_median_delta_too_few_values() {
        assert_eq!(median_delta(&[]), None);
        assert_eq!(median_delta(&[5.0]), None);
    }

    #[test]
    fn test_median_delta_two_values() {
        assert_eq!(median_delta(&[1.0, 4.0]), Some(3.0));
    }

    #[test]
    fn test_median_delta_unsorted_input() {
        // Deltas are taken between adjacent *sorted* values
        assert_eq!(median_delta(&[10.0, 0.0, 5.0]), Some(5.0));
    }

    #[test]
    fn test_median_delta_even_count_averages_middles() {
        // Sorted: 0, 1, 3, 6, 10 -> deltas 1, 2, 3, 4 -> median (2+3)/2
        assert_eq!(median_delta(&[0.0, 1.0, 3.0, 6.0, 10.0]), Some(2.5));
    }

    #[test]
    fn test_median_delta_identical_values() {
        assert_eq!(median_delta(&[7.0, 7.0, 7.0]), Some(0.0));
    }

    // --- row/column tolerance ---

    #[test]
    fn test_row_tolerance_scales_median() {
        let options = ToleranceOptions::default();
        // Evenly spaced rows 10 apart -> median delta 10 -> 10 * 0.6
        let t = row_tolerance(&[0.0, 10.0, 20.0, 30.0], &options);
        assert_eq!(t, 6.0);
    }

    #[test]
    fn test_column_tolerance_scales_median() {
        let options = ToleranceOptions::default();
        let t = column_tolerance(&[0.0, 100.0, 200.0], &options);
        assert_eq!(t, 50.0);
    }

    #[test]
    fn test_tolerance_floor_single_value() {
        let options = ToleranceOptions::default();
        assert_eq!(row_tolerance(&[42.0], &options), 0.5);
        assert_eq!(column_tolerance(&[42.0], &options), 0.35);
    }

    #[test]
    fn test_tolerance_floor_identical_values() {
        // Median delta is 0 -> fall back to the floor
        let options = ToleranceOptions::default();
        assert_eq!(row_tolerance(&[3.0, 3.0, 3.0], &options), 0.5);
        assert_eq!(column_tolerance(&[3.0, 3.0, 3.0], &options), 0.35);
    }

    #[test]
    fn test_tolerance_floor_empty() {
        let options = ToleranceOptions::default();
        assert_eq!(row_tolerance(&[], &options), 0.5);
        assert_eq!(column_tolerance(&[], &options), 0.35);
    }

    #[test]
    fn test_tolerance_never_below_floor() {
        // Tight spacing: median delta 0.1 -> scaled 0.06 < floor
        let options = ToleranceOptions::default();
        let t = row_tolerance(&[0.0, 0.1, 0.2], &options);
        assert_eq!(t, 0.5);
    }

    #[test]
    fn test_tolerance_custom_options() {
        let options = ToleranceOptions {
            y_scale: 1.0,
            x_scale: 1.0,
            y_floor: 2.0,
            x_floor: 2.0,
        };
        assert_eq!(row_tolerance(&[0.0, 8.0], &options), 8.0);
        assert_eq!(row_tolerance(&[0.0, 1.0], &options), 2.0);
    }
}
