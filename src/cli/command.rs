use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::{DEFAULT_STORAGE_PATH, STORAGE_PATH_VAR};

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "Simple flat-file phone book")]
pub struct Cli {
    /// Contact file (one `name!phone` record per line)
    #[arg(long, env = STORAGE_PATH_VAR, default_value = DEFAULT_STORAGE_PATH)]
    pub path: PathBuf,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,
    },
    /// Show the contact stored under a name
    Find {
        /// Contact name
        #[arg(long)]
        name: String,
    },
    /// Change the phone number of an existing contact
    Update {
        /// Contact name
        #[arg(long)]
        name: String,

        /// New phone number
        #[arg(long)]
        phone: String,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
