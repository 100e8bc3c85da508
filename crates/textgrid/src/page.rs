//! Page type: one page of extractor output.

use textgrid_core::{Fragment, GridOptions, GridResult, PageGrid, build_page_grid};

/// A single page of positioned text fragments.
///
/// Holds the fragments reported by an external text-position extractor for
/// one page. Construction order of the fragments is irrelevant; the grid
/// pipeline establishes its own ordering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    /// Page index (0-based).
    page_number: usize,
    /// Fragments extracted from this page.
    fragments: Vec<Fragment>,
}

impl Page {
    /// Create a new page with the given index and fragments.
    pub fn new(page_number: usize, fragments: Vec<Fragment>) -> Self {
        Self {
            page_number,
            fragments,
        }
    }

    /// Returns the page index (0-based).
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// Returns the fragments on this page.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Reconstruct this page's grid.
    ///
    /// Warnings are tagged with this page's index.
    pub fn grid(&self, options: &GridOptions) -> GridResult<PageGrid> {
        let result = build_page_grid(&self.fragments, options);
        let warnings = result
            .warnings
            .into_iter()
            .map(|w| w.on_page(self.page_number))
            .collect();
        GridResult::with_warnings(result.value, warnings)
    }
}
