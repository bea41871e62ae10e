//! # Monrobot module
//!
//! Code translation for tapes punched for the Monrobot family.
//! A tape row is reduced to a machine code by dropping the parity channel and
//! folding channels 5 and 6 down by one.  Machine codes are written in sextal
//! notation, which is hexadecimal with the letters `STUVWX` standing in for `ABCDEF`.
//!
//! * `charset` has the 64 character table
//! * `ut1` assembles words from a UT-1 program tape

pub mod charset;
pub mod ut1;
#[cfg(test)]
mod ut1_test;

use std::fmt;
use thiserror::Error;
use charset::{to_character_symbol,FLAGS};

const HEX_DIGITS: &str = "abcdefABCDEF";
const SEX_DIGITS: &str = "STUVWXSTUVWX";

#[derive(Error,Debug,PartialEq)]
pub enum Error {
    #[error("sextal string is empty")]
    Empty,
    #[error("invalid sextal digit `{0}`")]
    InvalidDigit(char),
    #[error("sextal value does not fit in 64 bits")]
    Overflow
}

/// Reduce a raw tape row to a machine code.
/// The parity channel is zeroed and channels 5,6 are moved down to 4,5.
/// Channel 7 is kept, so the result is not confined to 7 bits.
pub fn to_machine_code(raw: u8) -> u8 {
    (raw & 0x8f) | ((raw & 0x60) >> 1)
}

/// Fixed width sextal text.  The value is zero padded to `width` digits,
/// larger values are written out in full.
pub fn to_sextal(val: u64,width: usize) -> String {
    let hex = format!("{:0width$X}",val,width=width);
    hex.chars().map(|c| match HEX_DIGITS.find(c) {
        Some(idx) => SEX_DIGITS.as_bytes()[idx] as char,
        None => c
    }).collect()
}

/// two digit sextal for a machine code
pub fn mach_to_sextal(mach: u8) -> String {
    to_sextal(mach as u64,2)
}

/// three digit sextal for an address
pub fn addr_to_sextal(addr: u32) -> String {
    to_sextal(addr as u64,3)
}

/// four digit sextal for a half word
pub fn hword_to_sextal(hword: u16) -> String {
    to_sextal(hword as u64,4)
}

/// eight digit sextal for a word
pub fn word_to_sextal(word: u64) -> String {
    to_sextal(word,8)
}

/// Parse sextal text.  Ordinary hex letters are also accepted, in either case.
pub fn from_sextal(s: &str) -> Result<u64,Error> {
    if s.len()==0 {
        return Err(Error::Empty);
    }
    let mut ans: u64 = 0;
    for c in s.chars() {
        let digit = match c {
            '0'..='9' => c as u64 - '0' as u64,
            'S'..='X' => c as u64 - 'S' as u64 + 10,
            's'..='x' => c as u64 - 's' as u64 + 10,
            'A'..='F' => c as u64 - 'A' as u64 + 10,
            'a'..='f' => c as u64 - 'a' as u64 + 10,
            _ => return Err(Error::InvalidDigit(c))
        };
        ans = match ans.checked_mul(16) {
            Some(x) => x + digit,
            None => return Err(Error::Overflow)
        };
    }
    Ok(ans)
}

/// The printable form of a word: five characters and a flag.
/// Some characters print as two letter mnemonics, so the width of the
/// string is not fixed, but the number of glyphs always is.
#[derive(Clone,Debug,PartialEq)]
pub struct DisplayWord {
    pub chars: [&'static str;5],
    pub flag: &'static str
}

impl DisplayWord {
    /// All six glyphs, flag last.
    pub fn glyphs(&self) -> [&'static str;6] {
        [self.chars[0],self.chars[1],self.chars[2],self.chars[3],self.chars[4],self.flag]
    }
}

impl fmt::Display for DisplayWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in self.glyphs() {
            write!(f,"{}",glyph)?;
        }
        Ok(())
    }
}

/// Unpack a word as characters at bits 26,20,14,8,2 and a 2 bit flag at bit 0.
/// Bits above 31 are ignored.
pub fn word_to_display(word: u64) -> DisplayWord {
    let mut chars = [""; 5];
    for (i,shift) in [26,20,14,8,2].into_iter().enumerate() {
        chars[i] = to_character_symbol(((word >> shift) & 0x3f) as u8);
    }
    DisplayWord {
        chars,
        flag: FLAGS[(word & 0x3) as usize]
    }
}

#[test]
fn test_machine_code() {
    assert_eq!(to_machine_code(0x00),0x00);
    assert_eq!(to_machine_code(0xff),0xbf);
    assert_eq!(to_machine_code(0x10),0x00);
    assert_eq!(to_machine_code(0x20),0x10);
    assert_eq!(to_machine_code(0x40),0x20);
    assert_eq!(to_machine_code(0x0f),0x0f);
    assert_eq!(to_machine_code(0x80),0x80);
    assert_eq!(to_machine_code(0xef),0xbf);
    for raw in 0..=255u8 {
        let mach = to_machine_code(raw);
        assert_eq!(mach & 0x40,0,"bit 6 set for {:02X}",raw);
        assert_eq!(mach,to_machine_code(raw));
    }
}

#[test]
fn test_sextal() {
    assert_eq!(mach_to_sextal(0xbf),"TX");
    assert_eq!(mach_to_sextal(0xa1),"S1");
    assert_eq!(mach_to_sextal(0x05),"05");
    assert_eq!(addr_to_sextal(0x000),"000");
    assert_eq!(addr_to_sextal(0x42),"042");
    assert_eq!(addr_to_sextal(0xabc),"STU");
    assert_eq!(addr_to_sextal(0x10000),"10000");
    assert_eq!(hword_to_sextal(0xdef0),"VWX0");
    assert_eq!(word_to_sextal(0x0123abcd),"0123STUV");
    assert_eq!(word_to_sextal(0x1_0000_0000),"100000000");
}

#[test]
fn test_from_sextal() {
    assert_eq!(from_sextal("TX"),Ok(0xbf));
    assert_eq!(from_sextal("042"),Ok(0x42));
    assert_eq!(from_sextal("stu"),Ok(0xabc));
    assert_eq!(from_sextal("bf"),Ok(0xbf));
    assert_eq!(from_sextal(""),Err(Error::Empty));
    assert_eq!(from_sextal("1G"),Err(Error::InvalidDigit('G')));
    assert_eq!(from_sextal("11112222333344445"),Err(Error::Overflow));
    assert_eq!(from_sextal(&word_to_sextal(0x89abcdef)),Ok(0x89abcdef));
}

#[test]
fn test_display_word() {
    assert_eq!(word_to_display(0).to_string(),"      ");
    // "HELLO" with flag 1
    let word: u64 = (0x38 << 26) | (0x35 << 20) | (0x23 << 14) | (0x23 << 8) | (0x26 << 2) | 1;
    assert_eq!(word_to_display(word).to_string(),"HELLO|");
    assert_eq!(word_to_display(word ^ 3).flag,"}");
    assert_eq!(word_to_display(word | 3).flag," ");
    for word in [0u64,1,0xffffffff,0x12345678,0xdeadbeef,0x3fffffffff] {
        let glyphs = word_to_display(word).glyphs();
        for (i,shift) in [26,20,14,8,2].into_iter().enumerate() {
            let code = ((word >> shift) & 0x3f) as usize;
            assert_eq!(glyphs[i],charset::CHARSET[code],"glyph {} of {:X}",i,word);
        }
        assert!(FLAGS.contains(&glyphs[5]));
        assert_eq!(glyphs[5],FLAGS[(word & 3) as usize]);
        assert_eq!(glyphs.concat(),word_to_display(word).to_string());
    }
    // bits above 31 do not show
    assert_eq!(word_to_display(0x3f_0000_0000 | 0x12345678),word_to_display(0x12345678));
    assert_eq!(word_to_display(0xffffffff).to_string(),"crcrcrcrcr ");
}
