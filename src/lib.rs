//! # `ptkit` main library
//!
//! This library decodes captures of punched paper tape, with emphasis on the
//! Monrobot family.  A capture is a plain file of bytes, one byte per tape row,
//! with no header; this is what a tape reader attached to a serial port produces.
//!
//! ## Architecture
//!
//! Decoding proceeds one row at a time:
//! * `row` finds the holes and the parity of a row
//! * `monrobot` reduces the row to a machine code and names it in sextal and in the Monrobot character set
//! * `format` lays out the fields chosen by the user on one line
//! * `monrobot::ut1` assembles addressed words from a UT-1 program tape
//! * `decode` drives all of the above over an input stream, sending results to a `DecodeSink`
//!
//! Nothing in the decoding path can fail on account of the tape contents.
//! Odd rows are flagged in the output and decoding continues.

pub mod row;
pub mod monrobot;
pub mod format;
pub mod decode;
pub mod commands;
pub mod cli;

use std::io::Read;
use log::{debug,error};
use commands::CommandError;

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// Open a tape capture for reading, either the file at `maybe_path`, or stdin.
/// Reading a tape from the console makes no sense, so stdin must be redirected.
pub fn open_tape(maybe_path: Option<&String>) -> Result<Box<dyn Read>,DYNERR> {
    match maybe_path {
        Some(path) => match std::fs::File::open(path) {
            Ok(f) => {
                debug!("opened tape {}",path);
                Ok(Box::new(f))
            },
            Err(e) if e.kind()==std::io::ErrorKind::NotFound => {
                error!("tape {} was not found",path);
                Err(Box::new(CommandError::FileNotFound))
            },
            Err(e) => Err(Box::new(e))
        },
        None => {
            if atty::is(atty::Stream::Stdin) {
                error!("line entry is not supported, please pipe a tape in or give a file");
                return Err(Box::new(CommandError::NoInput));
            }
            Ok(Box::new(std::io::stdin()))
        }
    }
}

#[test]
fn test_open_missing_tape() {
    let path = "no/such/tape.bin".to_string();
    match open_tape(Some(&path)) {
        Err(e) => assert_eq!(e.to_string(),CommandError::FileNotFound.to_string()),
        Ok(_) => panic!("missing file was opened")
    }
}
