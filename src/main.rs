//! # Command Line Interface
//!
//! The command tree is built in `cli.rs`.
//! The subcommands are run from the `commands` module.

use env_logger;
#[cfg(windows)]
use colored;
use log::error;
use ptkit::commands;
use ptkit::commands::CommandError;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);

    let main_cmd = ptkit::cli::build_cli();
    let matches = main_cmd.clone().get_matches();

    // Decode a tape

    if let Some(cmd) = matches.subcommand_matches("decode") {
        return commands::decode::decode(cmd);
    }

    // Character set

    if let Some(cmd) = matches.subcommand_matches("charset") {
        return commands::charset::charset(cmd);
    }

    // Completions

    if let Some(cmd) = matches.subcommand_matches("completions") {
        return commands::completions::generate(main_cmd,cmd);
    }

    error!("No subcommand was found, try `ptkit --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
