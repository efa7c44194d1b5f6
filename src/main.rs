use std::process::ExitCode;

use rusty_phonebook::config::load_env_file;
use rusty_phonebook::prelude::run_app;

fn main() -> ExitCode {
    load_env_file();

    match run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
