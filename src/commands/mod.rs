//! # CLI Subcommands
//! 
//! Contains modules that run the subcommands.

pub mod decode;
pub mod charset;
pub mod completions;

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("One of the parameters was out of range")]
    OutOfRange,
    #[error("No input, give a file or pipe the tape in")]
    NoInput,
    #[error("File not found")]
    FileNotFound
}
