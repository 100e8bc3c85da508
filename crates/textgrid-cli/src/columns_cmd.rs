use std::path::Path;

use textgrid::{GridOptions, Page};

use crate::cli::OutputFormat;
use crate::input::{read_pages, resolve_pages};

pub fn run(
    file: &Path,
    page: Option<usize>,
    format: &OutputFormat,
    percent_decode: bool,
) -> Result<(), i32> {
    let pages = read_pages(file, percent_decode)?;
    let indices = resolve_pages(page, pages.len())?;
    let options = GridOptions::default();

    if *format == OutputFormat::Json {
        return write_json(&pages, &indices, &options);
    }

    if *format == OutputFormat::Csv {
        println!("page,column,mean,width");
    } else {
        println!("page\tcolumn\tmean\twidth");
    }

    for &index in &indices {
        let result = pages[index].grid(&options);
        for warning in &result.warnings {
            eprintln!("warning: {warning}");
        }

        let grid = result.value;
        for (column, cluster) in grid.columns.iter().enumerate() {
            let width = grid.widths[column];
            match format {
                OutputFormat::Csv => {
                    println!("{},{column},{:.2},{width}", index + 1, cluster.mean);
                }
                _ => println!("{}\t{column}\t{:.2}\t{width}", index + 1, cluster.mean),
            }
        }
    }
    Ok(())
}

fn write_json(pages: &[Page], indices: &[usize], options: &GridOptions) -> Result<(), i32> {
    let mut output = Vec::new();
    for &index in indices {
        let result = pages[index].grid(options);
        for warning in &result.warnings {
            eprintln!("warning: {warning}");
        }

        let grid = result.value;
        let columns: Vec<serde_json::Value> = grid
            .columns
            .iter()
            .zip(&grid.widths)
            .enumerate()
            .map(|(column, (cluster, width))| {
                serde_json::json!({
                    "column": column,
                    "mean": cluster.mean,
                    "members": cluster.members.len(),
                    "width": width,
                })
            })
            .collect();
        output.push(serde_json::json!({
            "page": index + 1,
            "columns": columns,
        }));
    }

    let json = serde_json::to_string_pretty(&output).map_err(|e| {
        eprintln!("Error: failed to serialize columns: {e}");
        1
    })?;
    println!("{json}");
    Ok(())
}
