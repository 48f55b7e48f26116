// Canonical indentation for a single line. Pure text transformation with
// no multi-line context.

use crate::classify;

// Column where the operation/operand portion of a line should begin
pub const DEFAULT_INSTRUCTION_COLUMN: usize = 8;

pub fn indent_line(line: &str, target_column: usize) -> String {
    // Section comments sit at the left margin
    let stripped = line.trim_start();
    if stripped.starts_with(";;;") {
        return stripped.to_string();
    }

    // A label moves to column 0; everything after it is the instruction
    let (head, rest) = match classify::label_match(line) {
        Some((start, end)) => (&line[start..end], &line[end..]),
        None => ("", line),
    };

    let body = rest.trim_start();
    if body.is_empty() {
        // Label-only lines end after the colon; blank lines become empty
        return head.to_string();
    }

    // The instruction goes at the target column, unless the label runs past
    // it, in which case a single space separates the two.
    let column = if head.is_empty() {
        target_column
    } else {
        target_column.max(head.len() + 1)
    };

    let mut out = String::with_capacity(column + body.len());
    out.push_str(head);
    while out.len() < column {
        out.push(' ');
    }
    out.push_str(body);
    return out;
}
