use std::path::Path;

use textgrid::{GridOptions, Sheet, sheets_from_pages};

use crate::cli::OutputFormat;
use crate::input::{csv_escape, read_pages, resolve_pages};

pub fn run(
    file: &Path,
    page: Option<usize>,
    format: &OutputFormat,
    percent_decode: bool,
) -> Result<(), i32> {
    let pages = read_pages(file, percent_decode)?;
    let indices = resolve_pages(page, pages.len())?;
    let selected: Vec<_> = indices.iter().map(|&i| pages[i].clone()).collect();

    let result = sheets_from_pages(&selected, &GridOptions::default());
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    match format {
        OutputFormat::Text => write_text(&result.value),
        OutputFormat::Json => write_json(&result.value)?,
        OutputFormat::Csv => write_csv(&result.value),
    }
    Ok(())
}

fn write_text(sheets: &[Sheet]) {
    for (i, sheet) in sheets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("== {} ==", sheet.title);
        for row in &sheet.rows {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| cell.as_deref().unwrap_or(""))
                .collect();
            println!("{}", line.join("\t"));
        }
    }
}

fn write_json(sheets: &[Sheet]) -> Result<(), i32> {
    let json = serde_json::to_string_pretty(sheets).map_err(|e| {
        eprintln!("Error: failed to serialize sheets: {e}");
        1
    })?;
    println!("{json}");
    Ok(())
}

fn write_csv(sheets: &[Sheet]) {
    for sheet in sheets {
        for row in &sheet.rows {
            let mut fields = vec![csv_escape(&sheet.title)];
            fields.extend(
                row.iter()
                    .map(|cell| csv_escape(cell.as_deref().unwrap_or(""))),
            );
            println!("{}", fields.join(","));
        }
    }
}
