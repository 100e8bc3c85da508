//! Warning types for grid reconstruction.
//!
//! Grid reconstruction never fails outright: a page's anomalies degrade to
//! warnings and a best-effort (possibly empty) grid. This module provides
//! [`GridWarning`] for those non-fatal issues and [`GridResult`] for pairing
//! a value with the warnings collected while producing it.

use std::fmt;

/// Machine-readable warning code for categorizing reconstruction issues.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum GridWarningCode {
    /// A fragment had a non-finite x or y coordinate and was dropped.
    MalformedFragment,
    /// A page yielded zero usable fragments after filtering.
    EmptyPage,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl GridWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            GridWarningCode::MalformedFragment => "MALFORMED_FRAGMENT",
            GridWarningCode::EmptyPage => "EMPTY_PAGE",
            GridWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for GridWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue encountered while reconstructing a grid.
///
/// Warnings carry a structured [`code`](GridWarning::code), a human-readable
/// description, and optional context: the page index and a short excerpt of
/// the offending fragment's text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWarning {
    /// Machine-readable warning code.
    pub code: GridWarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// Page index where the warning occurred (0-indexed), if known.
    pub page: Option<usize>,
    /// Text of the fragment that triggered the warning, if applicable.
    pub fragment: Option<String>,
}

impl GridWarning {
    /// Create a warning with just a description.
    ///
    /// Uses [`GridWarningCode::Other`] as the default code.
    pub fn new(description: impl Into<String>) -> Self {
        let desc = description.into();
        Self {
            code: GridWarningCode::Other(desc.clone()),
            description: desc,
            page: None,
            fragment: None,
        }
    }

    /// Create a warning with a specific code and description.
    pub fn with_code(code: GridWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            page: None,
            fragment: None,
        }
    }

    /// Create a warning with fragment context.
    pub fn for_fragment(
        code: GridWarningCode,
        description: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            code,
            description: description.into(),
            page: None,
            fragment: Some(fragment.into()),
        }
    }

    /// Attach a page index, returning the modified warning (builder pattern).
    pub fn on_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }
}

impl fmt::Display for GridWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(page) = self.page {
            write!(f, " (page {page})")?;
        }
        if let Some(ref fragment) = self.fragment {
            write!(f, " [fragment {fragment:?}]")?;
        }
        Ok(())
    }
}

/// Result wrapper that pairs a value with collected warnings.
///
/// Used when reconstruction partially succeeds with non-fatal issues.
#[derive(Debug, Clone)]
pub struct GridResult<T> {
    /// The reconstructed value.
    pub value: T,
    /// Warnings collected during reconstruction.
    pub warnings: Vec<GridWarning>,
}

impl<T> GridResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<GridWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GridResult<U> {
        GridResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
