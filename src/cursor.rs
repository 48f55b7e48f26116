// Cursor positioning over a single line. Columns are byte offsets; no
// state is kept between calls.

use crate::classify;

// Column of the first instruction character: past any label and its colon,
// past whitespace, or the end of the line if nothing follows.
pub fn instruction_column(line: &str) -> usize {
    let start = match classify::label_match(line) {
        Some((_, end)) => end,
        None => 0,
    };
    match line[start..].find(|c: char| c != ' ' && c != '\t') {
        Some(offset) => start + offset,
        None => line.len(),
    }
}

pub fn first_nonblank_column(line: &str) -> usize {
    match line.find(|c: char| c != ' ' && c != '\t') {
        Some(column) => column,
        None => line.len(),
    }
}

// Two-state toggle: from anywhere, go to the instruction column; from the
// instruction column itself, go to the first non-blank column instead.
pub fn smart_home(line: &str, cursor_col: usize) -> usize {
    let instr = instruction_column(line);
    if cursor_col == instr {
        first_nonblank_column(line)
    } else {
        instr
    }
}
