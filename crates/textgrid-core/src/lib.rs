//! textgrid-core: Extractor-independent data types and algorithms.
//!
//! This crate reconstructs tabular structure from positioned text fragments:
//! adaptive tolerance estimation, greedy 1-D positional clustering, row
//! assembly, nearest-column cell mapping, and column width hints. It is a
//! pure function of page data — no I/O, no cross-page state — so pages can
//! be processed independently (and in parallel by callers).

pub mod cluster;
pub mod error;
pub mod fragment;
pub mod grid;
pub mod rows;
pub mod tolerance;
pub mod widths;

pub use cluster::{Cluster, cluster_positions, nearest_cluster_index};
pub use error::{GridResult, GridWarning, GridWarningCode};
pub use fragment::{Fragment, UnicodeNorm, sanitize_fragments};
pub use grid::{GridOptions, PageGrid, build_page_grid};
pub use rows::group_into_rows;
pub use tolerance::{ToleranceOptions, column_tolerance, median_delta, row_tolerance};
pub use widths::{WidthOptions, estimate_column_widths};
