//! ## Monrobot character set
//!
//! The printer codes are 6 bits.  Control functions print as two letter
//! mnemonics: `bs` backspace, `tb` tab, `lc` lower case shift, `uc` upper case
//! shift, `cr` carriage return.  Unassigned codes print as `~`.

/// glyph for any code that is not in the table
pub const UNKNOWN: &str = "~";
/// machine code 0x80 stands alone as a carriage return
pub const CR_CODE: u8 = 0x80;
pub const CR: &str = "CR";

/// glyphs for the 2 bit flag at the end of a word
pub const FLAGS: [&str;4] = [" ","|","}"," "];

pub const CHARSET: [&str;64] = [
    " ","1","2","3","4","5","6","7","8","9","~","#","@",":",">","~",
    "0","/","S","T","U","V","W","X","Y","Z","+",",","%","bs","tb","\"",
    "-","J","K","L","M","N","O","P","Q","R","!","$","*",")",";","~",
    "&","A","B","C","D","E","F","G","H","I","lc",".","uc","(","<","cr"
];

/// Look up the glyph for a machine code, never fails.
pub fn to_character_symbol(mach: u8) -> &'static str {
    match CHARSET.get(mach as usize) {
        Some(glyph) => *glyph,
        None if mach==CR_CODE => CR,
        None => UNKNOWN
    }
}

#[test]
fn test_symbols() {
    assert_eq!(to_character_symbol(0)," ");
    assert_eq!(to_character_symbol(0x10),"0");
    assert_eq!(to_character_symbol(0x1d),"bs");
    assert_eq!(to_character_symbol(0x1f),"\"");
    assert_eq!(to_character_symbol(0x31),"A");
    assert_eq!(to_character_symbol(0x3f),"cr");
    assert_eq!(to_character_symbol(CR_CODE),"CR");
    assert_eq!(to_character_symbol(0x40),UNKNOWN);
    assert_eq!(to_character_symbol(0x7f),UNKNOWN);
    assert_eq!(to_character_symbol(0x81),UNKNOWN);
    assert_eq!(to_character_symbol(0xbf),UNKNOWN);
    assert_eq!(to_character_symbol(0xff),UNKNOWN);
}
