//! # Row Formatting
//!
//! Turns a decoded row into the line that is printed for it.  Which fields
//! appear is controlled by `DecodeOptions`; the order is always holes, ASCII,
//! sextal, symbol, parity flag.

use crate::row::{Row,Parity};
use crate::monrobot::{to_machine_code,mach_to_sextal};
use crate::monrobot::charset::to_character_symbol;

/// names of the ASCII control codes
pub const CONTROL_NAMES: [&str;32] = [
    "NUL","SOH","STX","ETX","EOT","ENQ","ACK","BEL",
    "BS","HT","LF","VT","FF","CR","SO","SI",
    "DLE","DC1","DC2","DC3","DC4","NAK","SYN","ETB",
    "CAN","EM","SUB","ESC","FS","GS","RS","US"
];

/// What to show for each row, and whether to assemble UT-1 words.
#[derive(Clone,Debug,PartialEq)]
pub struct DecodeOptions {
    pub show_holes: bool,
    pub show_ascii: bool,
    /// machine code in sextal, this is the `monrobot` decode
    pub show_sextal: bool,
    /// character symbol, only has effect along with `show_sextal`, this is the `bcd` decode
    pub show_symbol: bool,
    pub ut1: bool,
    pub parity: Parity
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self {
            show_holes: false,
            show_ascii: false,
            show_sextal: false,
            show_symbol: false,
            ut1: false,
            parity: Parity::None
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A row with all of its interpretations worked out.
#[derive(Clone,Debug,PartialEq)]
pub struct DecodedRow {
    pub row: Row,
    pub mach: u8,
    pub sextal: String,
    pub symbol: &'static str
}

impl DecodedRow {
    pub fn new(raw: u8) -> Self {
        let mach = to_machine_code(raw);
        Self {
            row: Row::new(raw),
            mach,
            sextal: mach_to_sextal(mach),
            symbol: to_character_symbol(mach)
        }
    }
    /// 7-bit ASCII reading of the row, control codes by name
    pub fn ascii(&self) -> String {
        match self.row.raw & 0x7f {
            x if x < 0x20 => CONTROL_NAMES[x as usize].to_string(),
            x if x < 0x7f => (x as char).to_string(),
            _ => "DEL".to_string()
        }
    }
    /// The fields selected by `opt`, in print order.
    /// The parity flag only rides along with some other field.
    pub fn fields(&self,opt: &DecodeOptions) -> Vec<String> {
        let mut ans = Vec::new();
        if opt.show_holes {
            ans.push(self.row.hole_pattern());
        }
        if opt.show_ascii {
            ans.push(self.ascii());
        }
        if opt.show_sextal || opt.show_symbol {
            ans.push(format!("{:>2}",self.sextal));
        }
        if opt.show_symbol {
            ans.push(format!("{:>2}",self.symbol));
        }
        if ans.len() == 0 {
            return ans;
        }
        if let Some(flag) = self.row.parity_flag(opt.parity) {
            ans.push(flag.to_string());
        }
        ans
    }
    /// The printed line, or None if there is nothing to print for this row.
    pub fn format(&self,opt: &DecodeOptions) -> Option<String> {
        let fields = self.fields(opt);
        match fields.len() {
            0 => None,
            _ => Some(fields.join(" "))
        }
    }
}

#[cfg(test)]
fn opts(holes: bool,ascii: bool,sextal: bool,symbol: bool,parity: Parity) -> DecodeOptions {
    DecodeOptions {
        show_holes: holes,
        show_ascii: ascii,
        show_sextal: sextal,
        show_symbol: symbol,
        ut1: false,
        parity
    }
}

#[test]
fn test_ascii() {
    assert_eq!(DecodedRow::new(0x00).ascii(),"NUL");
    assert_eq!(DecodedRow::new(0x0d).ascii(),"CR");
    assert_eq!(DecodedRow::new(0x1f).ascii(),"US");
    assert_eq!(DecodedRow::new(0x20).ascii()," ");
    assert_eq!(DecodedRow::new(0x41).ascii(),"A");
    assert_eq!(DecodedRow::new(0xc1).ascii(),"A");
    assert_eq!(DecodedRow::new(0x7e).ascii(),"~");
    assert_eq!(DecodedRow::new(0x7f).ascii(),"DEL");
    assert_eq!(DecodedRow::new(0xff).ascii(),"DEL");
    assert_eq!(DecodedRow::new(0x8a).ascii(),"LF");
}

#[test]
fn test_fields() {
    let row = DecodedRow::new(0xff);
    assert_eq!(row.mach,0xbf);
    assert_eq!(row.sextal,"TX");
    assert_eq!(row.symbol,"~");
    assert_eq!(row.format(&opts(true,false,false,false,Parity::None)),Some("|ooooo.ooo|".to_string()));
    assert_eq!(row.format(&opts(false,false,true,false,Parity::None)),Some("TX".to_string()));
    assert_eq!(row.format(&opts(false,false,true,true,Parity::None)),Some("TX  ~".to_string()));
    assert_eq!(row.format(&opts(true,false,true,true,Parity::CheckOdd)),Some("|ooooo.ooo| TX  ~ EVEN PARITY".to_string()));
    assert_eq!(row.format(&opts(false,true,false,false,Parity::CheckEven)),Some("DEL".to_string()));
    let row = DecodedRow::new(0x01);
    assert_eq!(row.format(&opts(false,false,true,true,Parity::None)),Some("01  1".to_string()));
    assert_eq!(row.format(&opts(false,true,false,false,Parity::CheckEven)),Some("SOH ODD PARITY".to_string()));
    let row = DecodedRow::new(0x2d);
    assert_eq!(row.format(&opts(false,false,true,true,Parity::None)),Some("1V bs".to_string()));
}

#[test]
fn test_nothing_to_print() {
    let nothing = DecodeOptions::new();
    for raw in 0..=255u8 {
        let row = DecodedRow::new(raw);
        assert_eq!(row.format(&nothing),None);
    }
    let mut parity_only = DecodeOptions::new();
    for parity in [Parity::CheckOdd,Parity::CheckEven] {
        parity_only.parity = parity;
        for raw in 0..=255u8 {
            assert_eq!(DecodedRow::new(raw).format(&parity_only),None);
        }
    }
}

#[test]
fn test_repeatable() {
    let opt = opts(true,false,true,true,Parity::CheckEven);
    for raw in 0..=255u8 {
        let row = DecodedRow::new(raw);
        assert_eq!(row.format(&opt),row.format(&opt));
    }
}
