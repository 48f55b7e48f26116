use indoc::indoc;

use crate::indent::DEFAULT_INSTRUCTION_COLUMN;

pub enum IType {
    Stdin,
    String(String),
    File(String),
}

pub enum OType {
    Stdout,
    File(String),
    None,
}

#[derive(Clone, Copy)]
pub enum Mode {
    // Rewrite every line with canonical indentation
    Indent,

    // List classified tokens, one per line
    Tokens,
}

impl Mode {
    // Attempt to create a variant from a string.
    // Since first letters are currently all unique, just rely on them for now.
    pub fn new(mode: &str) -> Result<Self, String> {
        match mode.to_ascii_lowercase().chars().next() {
            Some('i') => Ok(Mode::Indent),
            Some('t') => Ok(Mode::Tokens),
            _ => Err(format!("Unrecognized mode: {mode}")),
        }
    }
}

pub struct Config {
    pub itype: IType,
    pub otype: OType,
    pub mode: Mode,
    pub column: usize,
}

pub fn help() -> &'static str {
    return indoc! {"
        Flags (all are optional):
        -h: This help message
        -i: Input  file (STDIN  is default)
        -o: Output file (STDOUT is default)
        -c: Instruction column (8 is default)
        -m: Mode:
            indent: Rewrite each line with canonical indentation (default)
            tokens: List classified tokens, one per line
    "};
}

impl Config {
    pub fn build(args: &[String]) -> Result<Config, String> {
        // Flags to keep track of state while parsing the command line.
        enum CLFlag {
            Ifile,
            Ofile,
            Column,
            Mode,
            None,
        }

        // Config with default values
        let mut config = Config {
            itype: IType::Stdin,
            otype: OType::Stdout,
            mode: Mode::Indent,
            column: DEFAULT_INSTRUCTION_COLUMN,
        };

        // Simple but strict argument parser. All flags are optional.
        let mut current_flag = CLFlag::None;
        let mut args_iter = args.iter();
        _ = args_iter.next();
        for a in args_iter {
            // Process flags
            if a.starts_with('-') {
                if let CLFlag::None = current_flag {
                    match a.as_str() {
                        "-h" => return Err(help().to_string()),
                        "-i" => current_flag = CLFlag::Ifile,
                        "-o" => current_flag = CLFlag::Ofile,
                        "-c" => current_flag = CLFlag::Column,
                        "-m" => current_flag = CLFlag::Mode,
                        _ => return Err(format!("Invalid flag: {a}")),
                    }
                } else {
                    return Err(format!("Flag {a} cannot follow another flag"));
                }

            // Process arguments
            } else {
                match current_flag {
                    CLFlag::Ifile => config.itype = IType::File(a.to_string()),
                    CLFlag::Ofile => config.otype = OType::File(a.to_string()),
                    CLFlag::Column => {
                        config.column = a
                            .parse()
                            .map_err(|_| format!("Instruction column must be a number: {a}"))?
                    }
                    CLFlag::Mode => config.mode = Mode::new(a)?,
                    CLFlag::None => {
                        return Err(format!("Argument {a} must immediately follow a flag"))
                    }
                }

                current_flag = CLFlag::None;
            }
        }

        return Ok(config);
    }

    pub fn build_string_test(input_string: &str) -> Config {
        Config {
            itype: IType::String(input_string.to_string()),
            otype: OType::None,
            mode: Mode::Indent,
            column: DEFAULT_INSTRUCTION_COLUMN,
        }
    }
}
