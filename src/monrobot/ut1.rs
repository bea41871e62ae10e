//! ## UT-1 program tapes
//!
//! A UT-1 tape carries a start code `TX`, a two row starting address, and then
//! words of six rows each, with the bits split 6:6:4:6:6:4.  The first row of a
//! word can instead be an end code, `S1` or `S0`, which ends the data.
//! Rows before the start code are leader and are ignored, as is everything
//! after the end code.
//!
//! The assembler is an explicit accumulator threaded through `step`, which
//! is called once per row and returns whatever events the row completes.

use std::fmt;
use super::{addr_to_sextal,mach_to_sextal,word_to_sextal,word_to_display};

pub const START_CODE: &str = "TX";
pub const END_CODES: [&str;2] = ["S1","S0"];
/// bit widths of the six fields of a word, most significant first
pub const FIELD_BITS: [usize;6] = [6,6,4,6,6,4];

#[derive(PartialEq,Eq,Clone,Copy,Debug)]
pub enum State {
    WaitStart,
    ReadAddrHi,
    ReadAddrLo,
    ReadWord1,
    ReadWord2,
    ReadWord3,
    ReadWord4,
    ReadWord5,
    ReadWord6,
    Done
}

/// Things worth reporting while assembling.  The `Display` trait gives the
/// line that is printed for each.
#[derive(PartialEq,Clone,Debug)]
pub enum Event {
    StartCode { row: usize },
    StartAddress { addr: u32 },
    EndOfData { row: usize },
    /// some field had more bits than its width allows, the word is still assembled
    ExtraBits { row: usize, fields: [u8;6] },
    Word { addr: u32, value: u64 }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartCode { row } => write!(f,"# Found Start Code at {}",row),
            Self::StartAddress { addr } => write!(f,"# Start Address {}",addr_to_sextal(*addr)),
            Self::EndOfData { row } => write!(f,"# Found End of Data at {}",row),
            Self::ExtraBits { row, fields } => {
                let sex: Vec<String> = fields.iter().map(|m| mach_to_sextal(*m)).collect();
                write!(f,"# Extra bits {}: {}",row,sex.join(" "))
            },
            Self::Word { addr, value } => write!(f,"{}: {} {}",
                addr_to_sextal(*addr),
                word_to_sextal(*value),
                word_to_display(*value))
        }
    }
}

impl Event {
    /// Structured form of the event, values are in sextal.
    pub fn to_json(&self) -> json::JsonValue {
        match self {
            Self::StartCode { row } => json::object! {
                event: "start_code",
                row: *row
            },
            Self::StartAddress { addr } => json::object! {
                event: "start_address",
                addr: addr_to_sextal(*addr)
            },
            Self::EndOfData { row } => json::object! {
                event: "end_of_data",
                row: *row
            },
            Self::ExtraBits { row, fields } => json::object! {
                event: "extra_bits",
                row: *row,
                fields: json::JsonValue::Array(fields.iter().map(|m| mach_to_sextal(*m).into()).collect())
            },
            Self::Word { addr, value } => json::object! {
                event: "word",
                addr: addr_to_sextal(*addr),
                value: word_to_sextal(*value),
                display: word_to_display(*value).to_string()
            }
        }
    }
}

/// Everything the assembler remembers between rows.
#[derive(PartialEq,Clone,Debug)]
pub struct Accumulator {
    pub state: State,
    /// address of the word being assembled, allowed to run past 12 bits
    pub addr: u32,
    addr_hi: u8,
    fields: [u8;6]
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            state: State::WaitStart,
            addr: 0,
            addr_hi: 0,
            fields: [0;6]
        }
    }
    /// The accumulator as it would be after `row` is handled, along with the events.
    /// `sextal` must be the sextal form of `mach`.
    pub fn step(self,row: usize,mach: u8,sextal: &str) -> (Self,Vec<Event>) {
        step(self,row,mach,sextal)
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pack six fields into a word.  Fields are not masked, so extra bits spill
/// into the neighboring field, or above bit 31.
pub fn pack_word(fields: &[u8;6]) -> u64 {
    let mut ans: u64 = 0;
    for i in 0..6 {
        ans = (ans << FIELD_BITS[i]) | fields[i] as u64;
    }
    ans
}

/// true if any field is wider than it should be
pub fn has_extra_bits(fields: &[u8;6]) -> bool {
    fields.iter().zip(FIELD_BITS.iter()).any(|(f,bits)| (*f as u64) >> bits != 0)
}

/// Handle one row.  `row` is the 1-based row count, used only for reporting.
pub fn step(mut acc: Accumulator,row: usize,mach: u8,sextal: &str) -> (Accumulator,Vec<Event>) {
    let mut events = Vec::new();
    acc.state = match acc.state {
        State::WaitStart => {
            if sextal==START_CODE {
                events.push(Event::StartCode { row });
                State::ReadAddrHi
            } else {
                State::WaitStart
            }
        },
        State::ReadAddrHi => {
            acc.addr_hi = mach;
            State::ReadAddrLo
        },
        State::ReadAddrLo => {
            acc.addr = (acc.addr_hi as u32) << 6 | mach as u32;
            events.push(Event::StartAddress { addr: acc.addr });
            State::ReadWord1
        },
        State::ReadWord1 => {
            acc.fields[0] = mach;
            if END_CODES.contains(&sextal) {
                events.push(Event::EndOfData { row });
                State::Done
            } else {
                State::ReadWord2
            }
        },
        State::ReadWord2 => {
            acc.fields[1] = mach;
            State::ReadWord3
        },
        State::ReadWord3 => {
            acc.fields[2] = mach;
            State::ReadWord4
        },
        State::ReadWord4 => {
            acc.fields[3] = mach;
            State::ReadWord5
        },
        State::ReadWord5 => {
            acc.fields[4] = mach;
            State::ReadWord6
        },
        State::ReadWord6 => {
            acc.fields[5] = mach;
            if has_extra_bits(&acc.fields) {
                events.push(Event::ExtraBits { row, fields: acc.fields });
            }
            events.push(Event::Word { addr: acc.addr, value: pack_word(&acc.fields) });
            acc.addr = acc.addr.wrapping_add(1);
            State::ReadWord1
        },
        State::Done => State::Done
    };
    (acc,events)
}
