//! Row assembly: grouping fragments into top-to-bottom row bands.

use crate::fragment::Fragment;

/// Group fragments into rows by y-proximity.
///
/// Fragments are sorted by y, then x (stable, deterministic), and swept
/// top-to-bottom. A fragment joins the current row while its y lies strictly
/// within `row_tolerance` of the row's *anchor* — the y of the first
/// fragment admitted to that row. The anchor is fixed at row start, not
/// recentered, so a row's effective band can drift slightly when fragments
/// are nearly monotonic; that is accepted behavior. Fragments within each
/// finished row are sorted left-to-right.
pub fn group_into_rows(fragments: &[Fragment], row_tolerance: f64) -> Vec<Vec<Fragment>> {
    if fragments.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&Fragment> = fragments.iter().collect();
    sorted.sort_by(|a, b| {
        a.y.partial_cmp(&b.y)
            .unwrap()
            .then(a.x.partial_cmp(&b.x).unwrap())
    });

    let mut rows: Vec<Vec<Fragment>> = Vec::new();
    let mut current: Vec<Fragment> = Vec::new();
    let mut anchor_y: Option<f64> = None;

    for fragment in sorted {
        match anchor_y {
            Some(anchor) if (fragment.y - anchor).abs() >= row_tolerance => {
                rows.push(current);
                current = vec![fragment.clone()];
                anchor_y = Some(fragment.y);
            }
            Some(_) => current.push(fragment.clone()),
            None => {
                current.push(fragment.clone());
                anchor_y = Some(fragment.y);
            }
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }

    // Sort fragments within each row left-to-right
    for row in &mut rows {
        row.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
    }

    rows
}
