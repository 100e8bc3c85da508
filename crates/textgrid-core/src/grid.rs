//! Page grid assembly: the full per-page reconstruction pipeline.
//!
//! Composes fragment intake, tolerance estimation, column clustering, row
//! assembly, nearest-column cell mapping, and width estimation into one
//! pass. Each page is processed independently from scratch; no state
//! survives between pages.

use crate::cluster::{Cluster, cluster_positions, nearest_cluster_index};
use crate::error::{GridResult, GridWarning, GridWarningCode};
use crate::fragment::{Fragment, UnicodeNorm, sanitize_fragments};
use crate::rows::group_into_rows;
use crate::tolerance::{ToleranceOptions, column_tolerance, row_tolerance};
use crate::widths::{WidthOptions, estimate_column_widths};

/// Options for page grid reconstruction.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridOptions {
    /// Tolerance estimation settings.
    pub tolerance: ToleranceOptions,
    /// Column width hint settings.
    pub widths: WidthOptions,
    /// Unicode normalization applied to fragment text on intake.
    pub normalization: UnicodeNorm,
}

/// The reconstructed 2-D table for one page, ready for spreadsheet export.
///
/// Every row has exactly [`column_count`](PageGrid::column_count) cells; a
/// `None` cell means no fragment mapped to that column in that row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGrid {
    /// Rows top-to-bottom, each a sparse sequence of cells left-to-right.
    pub rows: Vec<Vec<Option<String>>>,
    /// Column clusters, sorted ascending by mean. One per output column.
    pub columns: Vec<Cluster>,
    /// Per-column width hints, parallel to `columns`.
    pub widths: Vec<f64>,
}

impl PageGrid {
    /// An empty grid (no rows, no columns).
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            columns: Vec::new(),
            widths: Vec::new(),
        }
    }

    /// Returns true if the grid holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns shared by every row.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Reconstruct the grid for one page of fragments.
///
/// Pipeline: sanitize fragments (blank text dropped, non-finite coordinates
/// dropped with a warning), estimate per-axis tolerances from the page's own
/// coordinate spread, cluster x positions into columns, sweep fragments into
/// rows, map each fragment to its nearest column, and derive width hints.
///
/// A page with zero usable fragments produces an empty grid plus an
/// [`EmptyPage`](GridWarningCode::EmptyPage) warning; callers decide how to
/// represent such a page (e.g., a placeholder row). This function never
/// fails — page anomalies only degrade the result.
pub fn build_page_grid(fragments: &[Fragment], options: &GridOptions) -> GridResult<PageGrid> {
    let sanitized = sanitize_fragments(fragments, options.normalization);
    let mut warnings = sanitized.warnings;
    let usable = sanitized.value;

    if usable.is_empty() {
        warnings.push(GridWarning::with_code(
            GridWarningCode::EmptyPage,
            "page yielded no usable fragments",
        ));
        return GridResult::with_warnings(PageGrid::empty(), warnings);
    }

    let ys: Vec<f64> = usable.iter().map(|f| f.y).collect();
    let xs: Vec<f64> = usable.iter().map(|f| f.x).collect();
    let row_tol = row_tolerance(&ys, &options.tolerance);
    let col_tol = column_tolerance(&xs, &options.tolerance);

    let columns = cluster_positions(&xs, col_tol);
    let row_groups = group_into_rows(&usable, row_tol);

    let rows: Vec<Vec<Option<String>>> = row_groups
        .iter()
        .map(|row| map_row_to_cells(row, &columns))
        .collect();

    let widths = estimate_column_widths(&columns, &options.widths);

    GridResult::with_warnings(
        PageGrid {
            rows,
            columns,
            widths,
        },
        warnings,
    )
}

/// Map one row of x-sorted fragments onto the page's column clusters.
///
/// Each fragment lands in the cell of its nearest cluster. When two
/// fragments collide on a cell, the later text is appended after a single
/// space and the result trimmed.
fn map_row_to_cells(row: &[Fragment], columns: &[Cluster]) -> Vec<Option<String>> {
    let mut cells: Vec<Option<String>> = vec![None; columns.len()];

    for fragment in row {
        let index = nearest_cluster_index(columns, fragment.x);
        if let Some(existing) = &mut cells[index] {
            let joined = format!("{existing} {}", fragment.text);
            *existing = joined.trim().to_string();
        } else {
            cells[index] = Some(fragment.text.clone());
        }
    }

    cells
}
