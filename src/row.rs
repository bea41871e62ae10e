//! # Tape Rows
//!
//! A row is one byte of captured tape, i.e., one line of holes across the width
//! of the tape.  This module reduces a row to the things that can be read off
//! the tape without knowing anything about the encoding: which channels are
//! punched, and the parity of the row.

use bit_vec::BitVec;

/// mark for a punched channel
pub const HOLE: char = 'o';
/// mark for an unpunched channel
pub const NO_HOLE: char = ' ';
/// mark for the feed hole, which sits between channels 3 and 4 counting from 1, i.e., bits 2 and 3
pub const SPROCKET: char = '.';
/// mark for the edges of the tape
pub const EDGE: char = '|';

/// Expected parity of every row on the tape, if it is to be checked at all.
#[derive(PartialEq,Eq,Clone,Copy,Debug)]
pub enum Parity {
    None,
    CheckEven,
    CheckOdd
}

/// One row of tape as it was read, with the encoding-independent facts about it.
#[derive(Clone,Debug,PartialEq)]
pub struct Row {
    pub raw: u8,
    /// channels 7 down to 0, `true` if punched
    pub holes: [bool;8],
    /// XOR of all the channels
    pub parity: u8
}

impl Row {
    pub fn new(raw: u8) -> Self {
        let bits = BitVec::from_bytes(&[raw]);
        let mut holes = [false;8];
        let mut parity = 0;
        for (i,punched) in bits.iter().enumerate() {
            holes[i] = punched;
            if punched {
                parity ^= 1;
            }
        }
        Self {
            raw,
            holes,
            parity
        }
    }
    /// Draw the row as a strip of tape, e.g., `|o o  .o o|`
    pub fn hole_pattern(&self) -> String {
        let mut ans = String::new();
        ans.push(EDGE);
        for i in 0..8 {
            ans.push(match self.holes[i] { true => HOLE, false => NO_HOLE });
            // index 4 is bit 3
            if i==4 {
                ans.push(SPROCKET);
            }
        }
        ans.push(EDGE);
        ans
    }
    /// Returns the mismatch flag for this row, if parity checking is on and the row fails it.
    pub fn parity_flag(&self,expected: Parity) -> Option<&'static str> {
        match (expected,self.parity) {
            (Parity::CheckOdd,0) => Some("EVEN PARITY"),
            (Parity::CheckEven,1) => Some("ODD PARITY"),
            _ => None
        }
    }
}

#[test]
fn test_hole_pattern() {
    assert_eq!(Row::new(0x00).hole_pattern(),"|     .   |");
    assert_eq!(Row::new(0xff).hole_pattern(),"|ooooo.ooo|");
    assert_eq!(Row::new(0x80).hole_pattern(),"|o    .   |");
    assert_eq!(Row::new(0x08).hole_pattern(),"|    o.   |");
    assert_eq!(Row::new(0x04).hole_pattern(),"|     .o  |");
    assert_eq!(Row::new(0x01).hole_pattern(),"|     .  o|");
}

#[test]
fn test_parity_matches_bit_count() {
    for raw in 0..=255u8 {
        let row = Row::new(raw);
        assert!(row.parity==0 || row.parity==1);
        assert_eq!(row.parity as u32,raw.count_ones() % 2,"parity of {:02X}",raw);
    }
}

#[test]
fn test_parity_flag() {
    let even = Row::new(0x03);
    let odd = Row::new(0x07);
    assert_eq!(even.parity_flag(Parity::CheckOdd),Some("EVEN PARITY"));
    assert_eq!(even.parity_flag(Parity::CheckEven),None);
    assert_eq!(odd.parity_flag(Parity::CheckEven),Some("ODD PARITY"));
    assert_eq!(odd.parity_flag(Parity::CheckOdd),None);
    assert_eq!(odd.parity_flag(Parity::None),None);
    assert_eq!(even.parity_flag(Parity::None),None);
}
