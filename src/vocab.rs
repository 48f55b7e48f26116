// Fixed keyword vocabularies for the Chip-8 assembly dialect.
// All lookups are case-insensitive.

use std::collections::HashSet;
use std::sync::LazyLock;

pub fn is_operation(word: &str) -> bool {
    OPERATIONS.contains(word.to_ascii_uppercase().as_str())
}

pub fn is_pseudo_op(word: &str) -> bool {
    PSEUDO_OPS.contains(word.to_ascii_uppercase().as_str())
}

pub fn is_register(word: &str) -> bool {
    REGISTERS.contains(word.to_ascii_uppercase().as_str())
}

// Chip-8 and Super-Chip instruction mnemonics
static OPERATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "ADD", "AND", "CALL", "CLS", "DRW", "EXIT", "HIGH", "JP", "LD", "LOW",
        "OR", "RET", "RND", "SCD", "SCL", "SCR", "SE", "SHL", "SHR", "SKNP",
        "SKP", "SNE", "SUB", "SUBN", "SYS",
    ])
});

// Assembler directives that do not name machine instructions
static PSEUDO_OPS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "ALIGN", "DB", "DS", "DW", "ELSE", "END", "ENDIF", "EQU", "IFDEF",
        "IFUND", "INCLUDE", "OPTION", "ORG",
    ])
});

// V0-VF plus the timer, index, and font operands
static REGISTERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "V0", "V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8", "V9", "VA",
        "VB", "VC", "VD", "VE", "VF", "DT", "ST", "I", "F", "HF",
    ])
});
