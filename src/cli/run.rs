use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::debug;

use crate::{
    config::StoreConfig,
    logging::{Verbosity, init_logging},
    prelude::{
        AppError,
        command::{Cli, Commands},
        contact::Contact,
        store::{ContactStore, TxtStore},
    },
    validation::{validate_name, validate_phone},
};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));
    debug!(path = %cli.path.display(), "using contact file");

    let config = StoreConfig::new(cli.path);
    let separator = config.separator;
    let mut storage = TxtStore::new(config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    execute(cli.command, &mut storage, separator, &mut input, &mut output)
}

/// Validates the command's fields, runs it against `storage` and reports
/// the outcome on `output`. Failures are returned for the caller to print.
pub fn execute<S, R, W>(
    command: Commands,
    storage: &mut S,
    separator: char,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError>
where
    S: ContactStore + ?Sized,
    R: BufRead,
    W: Write,
{
    match command {
        Commands::Add { name, phone } => {
            let name = validate_name(&name, separator)?;
            let phone = validate_phone(&phone, separator)?;

            storage.create(&name, &phone)?;

            writeln!(output, "Contact added successfully")?;
            Ok(())
        }

        Commands::Find { name } => {
            let name = validate_name(&name, separator)?;

            let contact = storage.find(&name)?;

            writeln!(output, "{}", display_contact(&contact))?;
            Ok(())
        }

        Commands::Update { name, phone } => {
            let name = validate_name(&name, separator)?;
            let phone = validate_phone(&phone, separator)?;

            storage.update(&name, &phone)?;

            writeln!(output, "Contact updated successfully")?;
            Ok(())
        }

        Commands::Delete { name, yes } => {
            let name = validate_name(&name, separator)?;

            if !yes && !confirm_action(&format!("delete contact '{name}'"), input, output)? {
                writeln!(output, "Deletion cancelled")?;
                return Ok(());
            }

            storage.delete(&name)?;

            writeln!(output, "Contact deleted successfully")?;
            Ok(())
        }
    }
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Phone: {}",
        contact.name, contact.phone
    )
}

/// Asks a y/n question; anything but `y`/`yes` declines.
pub fn confirm_action<R: BufRead, W: Write>(
    action: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    write!(output, "Are you sure you want to {action}? (y/n)\n> ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
