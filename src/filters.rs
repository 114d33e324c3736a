//! Post-processing applied to substituted blocks before they reach the
//! template.

const TAB_WIDTH: usize = 4;

pub(crate) fn tabs_to_spaces(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Collapses runs of consecutive empty lines into a single empty line.
pub(crate) fn compact_empty_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_empty = false;
    for line in text.split_inclusive('\n') {
        let empty = line.trim_end_matches(['\r', '\n']).is_empty();
        if empty && prev_empty {
            continue;
        }
        prev_empty = empty;
        out.push_str(line);
    }
    out
}
