//! Integration tests for the page-to-sheet pipeline.
//!
//! These tests exercise the full reconstruction path — fragment intake,
//! tolerance estimation, clustering, row assembly, cell mapping, width
//! hints, and sheet shaping — simulating the output of a real
//! text-position extractor.

use textgrid::{
    EMPTY_PAGE_PLACEHOLDER, Fragment, GridOptions, Page, Sheet, sheets_from_pages,
};

/// Helper: create a Fragment.
fn frag(x: f64, y: f64, text: &str) -> Fragment {
    Fragment::new(x, y, text)
}

/// Helper: unwrap a sheet row into plain strings, empty for missing cells.
fn row_strings(row: &[Option<String>]) -> Vec<String> {
    row.iter()
        .map(|cell| cell.clone().unwrap_or_default())
        .collect()
}

#[test]
fn test_two_by_two_grid_reconstruction() {
    let page = Page::new(
        0,
        vec![
            frag(0.0, 0.0, "A"),
            frag(5.0, 0.0, "B"),
            frag(0.0, 10.0, "C"),
            frag(5.0, 10.0, "D"),
        ],
    );
    let sheet = Sheet::from_page(&page, &GridOptions::default()).value;

    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(row_strings(&sheet.rows[0]), vec!["A", "B"]);
    assert_eq!(row_strings(&sheet.rows[1]), vec!["C", "D"]);
}

#[test]
fn test_near_coincident_fragments_share_a_cell() {
    let page = Page::new(0, vec![frag(0.0, 0.0, "Hello"), frag(0.1, 0.0, "World")]);
    let sheet = Sheet::from_page(&page, &GridOptions::default()).value;

    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.rows[0].len(), 1);
    assert_eq!(sheet.rows[0][0].as_deref(), Some("Hello World"));
}

#[test]
fn test_unordered_extractor_output_reads_naturally() {
    // Fragments arrive in no particular order; the grid restores
    // top-to-bottom, left-to-right reading order.
    let page = Page::new(
        0,
        vec![
            frag(80.0, 30.0, "1.25"),
            frag(0.0, 0.0, "Item"),
            frag(0.0, 30.0, "Apples"),
            frag(80.0, 0.0, "Price"),
            frag(0.0, 60.0, "Oranges"),
            frag(80.0, 60.0, "2.10"),
        ],
    );
    let sheet = Sheet::from_page(&page, &GridOptions::default()).value;

    assert_eq!(sheet.rows.len(), 3);
    assert_eq!(row_strings(&sheet.rows[0]), vec!["Item", "Price"]);
    assert_eq!(row_strings(&sheet.rows[1]), vec!["Apples", "1.25"]);
    assert_eq!(row_strings(&sheet.rows[2]), vec!["Oranges", "2.10"]);
}

#[test]
fn test_sparse_rows_keep_page_column_count() {
    // A footer that only occupies the first column still gets cell slots
    // for every page column.
    let page = Page::new(
        0,
        vec![
            frag(0.0, 0.0, "Name"),
            frag(60.0, 0.0, "Qty"),
            frag(120.0, 0.0, "Total"),
            frag(0.0, 20.0, "Widget"),
            frag(60.0, 20.0, "3"),
            frag(120.0, 20.0, "30.00"),
            frag(0.0, 40.0, "End of report"),
        ],
    );
    let sheet = Sheet::from_page(&page, &GridOptions::default()).value;

    assert_eq!(sheet.rows.len(), 3);
    for row in &sheet.rows {
        assert_eq!(row.len(), 3);
    }
    assert_eq!(sheet.rows[2][0].as_deref(), Some("End of report"));
    assert_eq!(sheet.rows[2][1], None);
    assert_eq!(sheet.rows[2][2], None);
}

#[test]
fn test_evenly_spaced_columns_get_equal_widths_except_last() {
    let page = Page::new(
        0,
        vec![frag(0.0, 0.0, "a"), frag(100.0, 0.0, "b"), frag(200.0, 0.0, "c")],
    );
    let sheet = Sheet::from_page(&page, &GridOptions::default()).value;

    assert_eq!(sheet.widths.len(), 3);
    assert_eq!(sheet.widths[0], sheet.widths[1]);
    assert_ne!(sheet.widths[1], sheet.widths[2]);
}

#[test]
fn test_document_pipeline_mixed_pages() {
    let pages = vec![
        Page::new(
            0,
            vec![frag(0.0, 0.0, "Header"), frag(50.0, 0.0, "Value")],
        ),
        Page::new(1, Vec::new()),
        Page::new(2, vec![frag(0.0, 0.0, "Tail")]),
    ];
    let result = sheets_from_pages(&pages, &GridOptions::default());

    let sheets = result.value;
    assert_eq!(sheets.len(), 3);
    assert_eq!(sheets[0].title, "Page 1");
    assert_eq!(sheets[1].title, "Page 2");
    assert_eq!(sheets[2].title, "Page 3");
    assert_eq!(sheets[1].rows[0][0].as_deref(), Some(EMPTY_PAGE_PLACEHOLDER));
    assert_eq!(sheets[2].rows[0][0].as_deref(), Some("Tail"));
}

#[test]
fn test_pipeline_is_deterministic() {
    let fragments = vec![
        frag(12.0, 3.0, "alpha"),
        frag(0.5, 3.1, "beta"),
        frag(24.0, 9.0, "gamma"),
        frag(12.2, 9.1, "delta"),
        frag(0.4, 15.0, "epsilon"),
    ];
    let page = Page::new(0, fragments);

    let a = Sheet::from_page(&page, &GridOptions::default()).value;
    let b = Sheet::from_page(&page, &GridOptions::default()).value;
    assert_eq!(a, b);
}

#[test]
fn test_every_fragment_lands_in_exactly_one_cell() {
    let fragments = vec![
        frag(0.0, 0.0, "r0c0"),
        frag(70.0, 0.2, "r0c1"),
        frag(140.0, 0.1, "r0c2"),
        frag(0.1, 25.0, "r1c0"),
        frag(140.2, 25.1, "r1c2"),
        frag(70.1, 50.0, "r2c1"),
    ];
    let page = Page::new(0, fragments.clone());
    let sheet = Sheet::from_page(&page, &GridOptions::default()).value;

    let occupied: Vec<String> = sheet
        .rows
        .iter()
        .flatten()
        .filter_map(|cell| cell.clone())
        .collect();
    assert_eq!(occupied.len(), fragments.len());
    for f in &fragments {
        assert!(occupied.contains(&f.text), "missing {}", f.text);
    }
}
