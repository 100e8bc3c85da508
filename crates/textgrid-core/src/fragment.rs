//! Text fragments: the input unit of grid reconstruction.
//!
//! A fragment is one positioned text run as reported by an external
//! text-position extractor. Fragments carry no row/column grouping of their
//! own; the ordering among them is established by the algorithms in this
//! crate, never assumed from the source.

use unicode_normalization::UnicodeNormalization;

use crate::error::{GridResult, GridWarning, GridWarningCode};

/// A single text run plus its page position.
///
/// Coordinates are in the page's own units; origin and scale are irrelevant
/// to reconstruction because tolerances are derived from the page's own
/// coordinate spread. Multiple fragments may share identical or
/// near-identical coordinates (e.g., adjacent glyph runs).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    /// Horizontal position on the page.
    pub x: f64,
    /// Vertical position on the page.
    pub y: f64,
    /// The text content of this fragment.
    pub text: String,
}

impl Fragment {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }

    /// Returns true if both coordinates are finite.
    pub fn has_finite_position(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns true if the text is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Unicode normalization form applied to fragment text on intake.
///
/// Different extractors may report different Unicode representations for the
/// same visual text (e.g., composed vs. decomposed accented characters).
/// Normalizing keeps cell content consistent regardless of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnicodeNorm {
    /// No normalization (default).
    #[default]
    None,
    /// Canonical Decomposition, followed by Canonical Composition (NFC).
    Nfc,
    /// Canonical Decomposition (NFD).
    Nfd,
    /// Compatibility Decomposition, followed by Canonical Composition (NFKC).
    Nfkc,
    /// Compatibility Decomposition (NFKD).
    Nfkd,
}

impl UnicodeNorm {
    /// Apply this normalization form to the given string.
    ///
    /// Returns the input unchanged if normalization is `None`.
    pub fn normalize(&self, text: &str) -> String {
        match self {
            UnicodeNorm::None => text.to_string(),
            UnicodeNorm::Nfc => text.nfc().collect(),
            UnicodeNorm::Nfd => text.nfd().collect(),
            UnicodeNorm::Nfkc => text.nfkc().collect(),
            UnicodeNorm::Nfkd => text.nfkd().collect(),
        }
    }
}

/// Filter a page's fragments down to the usable set.
///
/// Blank fragments (empty or whitespace-only text) are dropped silently —
/// they carry no cell content. Fragments with a non-finite coordinate are
/// dropped with a [`MalformedFragment`](GridWarningCode::MalformedFragment)
/// warning; the rest of the page continues to be processed. Surviving
/// fragments have `norm` applied to their text.
pub fn sanitize_fragments(fragments: &[Fragment], norm: UnicodeNorm) -> GridResult<Vec<Fragment>> {
    let mut usable = Vec::with_capacity(fragments.len());
    let mut warnings = Vec::new();

    for fragment in fragments {
        if fragment.is_blank() {
            continue;
        }
        if !fragment.has_finite_position() {
            warnings.push(GridWarning::for_fragment(
                GridWarningCode::MalformedFragment,
                format!(
                    "fragment has non-finite position ({}, {})",
                    fragment.x, fragment.y
                ),
                fragment.text.clone(),
            ));
            continue;
        }
        let text = norm.normalize(&fragment.text);
        usable.push(Fragment {
            x: fragment.x,
            y: fragment.y,
            text,
        });
    }

    GridResult::with_warnings(usable, warnings)
}
