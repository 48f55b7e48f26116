// Top-level public modules
pub mod classify;
pub mod config;
pub mod cursor;
pub mod indent;
pub mod token;

// Internal modules
mod run;
mod vocab;

// Simplify the interface for users
pub use classify::tokenize;
pub use config::{help, Config};
pub use cursor::{first_nonblank_column, instruction_column, smart_home};
pub use indent::{indent_line, DEFAULT_INSTRUCTION_COLUMN};
pub use run::run;
pub use token::{Category, Token};
