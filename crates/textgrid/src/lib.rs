//! textgrid: Reconstruct spreadsheet-ready grids from positioned text.
//!
//! This is the public API facade crate for textgrid-rs. It re-exports the
//! algorithm types from textgrid-core and adds the document-level models:
//! [`Page`] for extractor input and [`Sheet`] for spreadsheet-writer output.
//!
//! # Architecture
//!
//! - **textgrid-core**: Extractor-independent data types and algorithms
//! - **textgrid** (this crate): Page/Sheet models and the per-document
//!   pipeline, including placeholder handling for empty pages
//!
//! The external text-position extractor and the spreadsheet writer are
//! collaborators: this crate consumes fragments and produces titled rows
//! plus column width hints, nothing more.

mod page;
mod sheet;

pub use page::Page;
pub use sheet::{EMPTY_PAGE_PLACEHOLDER, Sheet, sheets_from_pages};
pub use textgrid_core::*;
