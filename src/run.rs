// Whole-input driver: read the source, transform it line by line, and
// write the result as the configuration asks.

use std::fmt::Write as _;
use std::fs;
use std::io::Read;

use crate::classify;
use crate::config::{Config, IType, Mode, OType};
use crate::indent;

pub fn run(config: &Config) -> Result<String, String> {
    let source = read_source(&config.itype)?;

    let output = match config.mode {
        Mode::Indent => reindent(&source, config.column),
        Mode::Tokens => list_tokens(&source),
    };

    write_output(&config.otype, &output)?;
    return Ok(output);
}

fn reindent(source: &str, column: usize) -> String {
    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        out.push_str(&indent::indent_line(line, column));
        out.push('\n');
    }
    out
}

// One token per line: LINE:START-END CATEGORY TEXT
fn list_tokens(source: &str) -> String {
    let mut out = String::new();
    for (num, line) in source.lines().enumerate() {
        for t in classify::tokenize(line) {
            let _ = writeln!(out, "{}:{}-{} {} {}", num, t.start, t.end, t.category, t.text(line));
        }
    }
    out
}

fn read_source(itype: &IType) -> Result<String, String> {
    match itype {
        IType::Stdin => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| format!("stdin: {err}"))?;
            Ok(source)
        }
        IType::String(source) => Ok(source.clone()),
        IType::File(path) => fs::read_to_string(path).map_err(|err| format!("{path}: {err}")),
    }
}

fn write_output(otype: &OType, output: &str) -> Result<(), String> {
    match otype {
        OType::Stdout => {
            print!("{output}");
            Ok(())
        }
        OType::File(path) => fs::write(path, output).map_err(|err| format!("{path}: {err}")),
        OType::None => Ok(()),
    }
}
