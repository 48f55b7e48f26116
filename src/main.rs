use std::env;
use std::process;

use c8edit::Config;

fn main() {
    let args: Vec<String> = env::args().collect();

    let config = Config::build(&args).unwrap_or_else(|err| {
        println!("{err}");
        process::exit(1);
    });

    if let Err(s) = c8edit::run(&config) {
        eprintln!("{s}");
        process::exit(1);
    }
}
