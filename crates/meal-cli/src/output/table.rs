//! Plain-text column layout for `--format table`.

/// Narrowest a column may be squeezed to.
const MIN_COLUMN: usize = 4;

/// Render `rows` under `headers` as space-separated, aligned columns.
///
/// Numeric cells are right-aligned. When `max_cell` is set, longer cells are
/// cut and end with `…`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], max_cell: Option<usize>) -> String {
    let limit = max_cell.map(|m| m.max(MIN_COLUMN));
    let clip = |text: &str| match limit {
        Some(limit) => clip_text(text, limit),
        None => text.to_string(),
    };

    let header_cells: Vec<String> = headers.iter().map(|&h| clip(h)).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            (0..headers.len())
                .map(|idx| row.get(idx).map_or_else(|| "-".to_string(), |cell| clip(cell.as_str())))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|idx| {
            body.iter()
                .map(|row| row[idx].chars().count())
                .chain(std::iter::once(header_cells[idx].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line = join_cells(&header_cells, &widths, |_| false);
    let mut lines = vec![header_line.clone(), "-".repeat(header_line.chars().count())];
    for row in &body {
        lines.push(join_cells(row, &widths, is_numeric));
    }
    lines.join("\n")
}

fn join_cells(cells: &[String], widths: &[usize], right_align: impl Fn(&str) -> bool) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            if right_align(cell.as_str()) {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn clip_text(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit - 1).collect();
    out.push('…');
    out
}

fn is_numeric(cell: &str) -> bool {
    !cell.is_empty() && cell.parse::<f64>().is_ok()
}
