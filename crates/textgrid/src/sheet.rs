//! Sheet type: one page's grid shaped for a spreadsheet writer.

use textgrid_core::{GridOptions, GridResult, GridWarning};

use crate::page::Page;

/// Informational row substituted for a page with no usable text.
pub const EMPTY_PAGE_PLACEHOLDER: &str = "No text detected on this page.";

/// The output contract handed to a spreadsheet/grid writer for one page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    /// Sheet title, "Page N" (1-indexed).
    pub title: String,
    /// Rows top-to-bottom, each a sparse sequence of nullable cells.
    pub rows: Vec<Vec<Option<String>>>,
    /// Per-column width hints.
    pub widths: Vec<f64>,
}

impl Sheet {
    /// Build the sheet for one page.
    ///
    /// An empty grid is replaced by a single informational row
    /// ([`EMPTY_PAGE_PLACEHOLDER`]) so every page produces a visible sheet.
    pub fn from_page(page: &Page, options: &GridOptions) -> GridResult<Sheet> {
        page.grid(options).map(|grid| {
            let rows = if grid.is_empty() {
                vec![vec![Some(EMPTY_PAGE_PLACEHOLDER.to_string())]]
            } else {
                grid.rows
            };
            Sheet {
                title: format!("Page {}", page.page_number() + 1),
                rows,
                widths: grid.widths,
            }
        })
    }
}

/// Build one sheet per page, aggregating warnings across the document.
///
/// Pages are independent, so a page's anomalies never abort the document;
/// its warnings are collected and its sheet degrades to the placeholder row.
pub fn sheets_from_pages(pages: &[Page], options: &GridOptions) -> GridResult<Vec<Sheet>> {
    let results = page_results(pages, options);

    let mut sheets = Vec::with_capacity(results.len());
    let mut warnings: Vec<GridWarning> = Vec::new();
    for result in results {
        sheets.push(result.value);
        warnings.extend(result.warnings);
    }
    GridResult::with_warnings(sheets, warnings)
}

#[cfg(not(feature = "parallel"))]
fn page_results(pages: &[Page], options: &GridOptions) -> Vec<GridResult<Sheet>> {
    pages
        .iter()
        .map(|page| Sheet::from_page(page, options))
        .collect()
}

/// Pages share no state, so the fan-out needs no coordination.
#[cfg(feature = "parallel")]
fn page_results(pages: &[Page], options: &GridOptions) -> Vec<GridResult<Sheet>> {
    use rayon::prelude::*;

    pages
        .par_iter()
        .map(|page| Sheet::from_page(page, options))
        .collect()
}
