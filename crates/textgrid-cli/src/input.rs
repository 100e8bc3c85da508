//! Fragment document loading and extractor-specific text decoding.

use std::fs;
use std::path::Path;

use textgrid::{Fragment, Page};

/// Load a fragment document with user-friendly error messages.
///
/// The file holds the serialized extractor contract: a JSON array of pages,
/// each an array of `{"x", "y", "text"}` fragments. Returns `Err(1)` with a
/// message printed to stderr if the file is missing or does not parse.
pub fn read_pages(file: &Path, percent_decode_text: bool) -> Result<Vec<Page>, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let data = fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })?;

    let pages: Vec<Vec<Fragment>> = serde_json::from_str(&data).map_err(|e| {
        eprintln!("Error: failed to parse fragment JSON: {e}");
        1
    })?;

    Ok(pages
        .into_iter()
        .enumerate()
        .map(|(index, mut fragments)| {
            if percent_decode_text {
                for fragment in &mut fragments {
                    fragment.text = percent_decode(&fragment.text);
                }
            }
            Page::new(index, fragments)
        })
        .collect())
}

/// Resolve an optional 1-indexed page selector into 0-indexed page indices.
///
/// If `page` is `None`, returns all pages (0..page_count).
pub fn resolve_pages(page: Option<usize>, page_count: usize) -> Result<Vec<usize>, i32> {
    match page {
        Some(n) => {
            if n == 0 || n > page_count {
                eprintln!("Error: page {n} out of range (document has {page_count} pages)");
                return Err(1);
            }
            Ok(vec![n - 1])
        }
        None => Ok((0..page_count).collect()),
    }
}

/// Decode percent-encoded text the way pdf2json dumps encode it.
///
/// Tries a strict decode first; malformed input falls back to replacing
/// the handful of escapes that dominate real documents, leaving the rest
/// untouched.
pub fn percent_decode(raw: &str) -> String {
    match strict_percent_decode(raw) {
        Some(decoded) => decoded,
        None => fallback_decode(raw),
    }
}

fn strict_percent_decode(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len() {
                return None;
            }
            let hi = (bytes[i + 1] as char).to_digit(16)?;
            let lo = (bytes[i + 2] as char).to_digit(16)?;
            out.push((hi * 16 + lo) as u8);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(out).ok()
}

fn fallback_decode(raw: &str) -> String {
    raw.replace("%20", " ")
        .replace("%2C", ",")
        .replace("%2c", ",")
        .replace("%2E", ".")
        .replace("%2e", ".")
        .replace("%2F", "/")
        .replace("%2f", "/")
        .replace("%3A", ":")
        .replace("%3a", ":")
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
