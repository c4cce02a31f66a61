use crate::cell::Cell;
use regex::Regex;

/// Parses the row-based text format: exactly `rows` lines split on `'\n'`,
/// each exactly `cols` characters drawn from `{'0', '1'}`.
///
/// The whole source is validated before anything is returned, so a caller
/// can guarantee no mutation happened on a rejected source. Note that a
/// trailing newline produces an extra empty line and is therefore a
/// line-count violation; `render` never emits one.
pub(crate) fn parse(contents: &str, rows: usize, cols: usize) -> Option<Vec<bool>> {
    let lines: Vec<&str> = contents.split('\n').collect();

    if lines.len() != rows {
        return None;
    }

    let alphabet = Regex::new(r"^[01]+$").unwrap();
    let mut states = Vec::with_capacity(rows * cols);

    for line in lines {
        if line.len() != cols || !alphabet.is_match(line) {
            return None;
        }

        states.extend(line.chars().map(|value| value == '1'));
    }

    Some(states)
}

/// Renders the current state of a row-major cell store in the same format:
/// `'1'` for alive, `'0'` for dead, rows joined with `'\n'`, no trailing
/// newline.
pub(crate) fn render(cells: &[Cell], cols: usize) -> String {
    cells
        .chunks(cols)
        .map(|row| {
            row.iter()
                .map(|cell| if cell.is_alive() { '1' } else { '0' })
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n")
}
