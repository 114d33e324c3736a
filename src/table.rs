use std::fmt::Write as _;

/// Lays out `rows` under `header` as a pipe-delimited markdown table with
/// every column padded to its widest cell. Cell content is emitted verbatim;
/// pipes or newlines inside a cell are not escaped.
pub(crate) fn render(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, header.iter().copied());
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &widths, dashes.iter().map(String::as_str));
    for row in rows {
        push_row(&mut out, &widths, row.iter().map(String::as_str));
    }
    out
}

fn push_row<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    let mut cells = cells.fuse();
    out.push('|');
    for &width in widths {
        let cell = cells.next().unwrap_or("");
        let _ = write!(out, " {cell:<width$} |");
    }
    out.push('\n');
}
