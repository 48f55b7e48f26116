use indoc::indoc;

use c8edit::config::{IType, Mode, OType};
use c8edit::{
    first_nonblank_column, indent_line, instruction_column, smart_home, Config,
    DEFAULT_INSTRUCTION_COLUMN,
};

#[test]
fn label_and_instruction() {
    assert_eq!(indent_line("loop: JP loop", 8), "loop:   JP loop");
}

#[test]
fn canonical_text_is_a_fixed_point() {
    let line = "loop:   JP loop";
    assert_eq!(indent_line(line, 8), line);
}

#[test]
fn idempotent_on_messy_input() {
    let once = indent_line("   loop:JP loop", 8);
    assert_eq!(indent_line(&once, 8), once);
}

#[test]
fn long_label_gets_one_space() {
    assert_eq!(
        indent_line("verylonglabel:ADD V0, V1", 8),
        "verylonglabel: ADD V0, V1"
    );
    assert_eq!(
        indent_line("verylonglabel:     ADD V0, V1", 8),
        "verylonglabel: ADD V0, V1"
    );
}

#[test]
fn instruction_without_label() {
    assert_eq!(indent_line("    CLS", 8), "        CLS");
}

#[test]
fn section_comment_moves_to_margin() {
    assert_eq!(indent_line("   ;;; header", 8), ";;; header");
}

#[test]
fn plain_comment_goes_to_instruction_column() {
    assert_eq!(indent_line("; note", 8), "        ; note");
}

#[test]
fn label_only_line() {
    assert_eq!(indent_line("  start:", 8), "start:");
}

#[test]
fn blank_line_normalizes_to_empty() {
    assert_eq!(indent_line("   ", 8), "");
    assert_eq!(indent_line("", 8), "");
}

#[test]
fn instruction_column_past_label() {
    assert_eq!(instruction_column("loop:   JP loop"), 8);
}

#[test]
fn instruction_column_without_label() {
    assert_eq!(instruction_column("        CLS"), 8);
    assert_eq!(instruction_column("CLS"), 0);
}

#[test]
fn instruction_column_of_label_only_line() {
    assert_eq!(instruction_column("done:"), 5);
}

#[test]
fn smart_home_toggles() {
    let line = "loop:   JP loop";
    assert_eq!(smart_home(line, 3), 8);
    assert_eq!(smart_home(line, 8), 0);
    assert_eq!(smart_home(line, 0), 8);
}

#[test]
fn smart_home_idempotent_when_columns_coincide() {
    // No label and the instruction already leftmost
    assert_eq!(smart_home("CLS", 0), 0);

    let line = "        JP next";
    assert_eq!(instruction_column(line), first_nonblank_column(line));
    assert_eq!(smart_home(line, 8), 8);
}

#[test]
fn reindent_whole_program() {
    let source = indoc! {"
        ;;; counts down from ten
           start: LD V0, #0A
        loop:
        SE V0, 0
            JP loop
    "};
    let expected = indoc! {"
        ;;; counts down from ten
        start:  LD V0, #0A
        loop:
                SE V0, 0
                JP loop
    "};

    let config = Config::build_string_test(source);
    assert_eq!(c8edit::run(&config), Ok(expected.to_string()));
}

#[test]
fn token_listing_mode() {
    let config = Config {
        itype: IType::String("loop: JP loop".to_string()),
        otype: OType::None,
        mode: Mode::Tokens,
        column: DEFAULT_INSTRUCTION_COLUMN,
    };
    let expected = "0:0-4 label loop\n0:6-8 operation JP\n0:9-13 identifier loop\n";
    assert_eq!(c8edit::run(&config), Ok(expected.to_string()));
}
