use clap;
use log::error;
use crate::monrobot::{from_sextal,mach_to_sextal};
use crate::monrobot::charset::{to_character_symbol,CHARSET,CR_CODE};
use crate::STDRESULT;
use super::CommandError;

/// Print the whole table, or the symbol for one code.
pub fn charset(cmd: &clap::ArgMatches) -> STDRESULT {
    if let Some(code) = cmd.get_one::<String>("code") {
        let mach = from_sextal(code)?;
        if mach > 0xff {
            error!("machine codes are at most 8 bits");
            return Err(Box::new(CommandError::OutOfRange));
        }
        println!("{} {}",mach_to_sextal(mach as u8),to_character_symbol(mach as u8));
        return Ok(());
    }
    for mach in 0..CHARSET.len() {
        println!("{} {}",mach_to_sextal(mach as u8),CHARSET[mach]);
    }
    println!("{} {}",mach_to_sextal(CR_CODE),to_character_symbol(CR_CODE));
    Ok(())
}
