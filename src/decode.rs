//! # Stream Decoding
//!
//! One pass over a tape.  Every row is decoded and handed to a `DecodeSink`;
//! if UT-1 assembly is on, the row's machine code also goes through the
//! assembler and any events it produces go to the same sink, right after the row.
//!
//! Two sinks are provided:
//! * `TextSink` prints lines as it goes
//! * `JsonSink` collects everything into one JSON document, each row with
//!   its raw value, holes, parity, machine code, sextal, symbol and ASCII

use std::io::{BufReader,Read,Write};
use colored::*;
use log::{trace,debug,info,warn};
use crate::format::{DecodeOptions,DecodedRow};
use crate::monrobot::ut1::{Accumulator,Event,State};
use crate::STDRESULT;

/// Receives the results of decoding, in tape order.
pub trait DecodeSink {
    /// `index` counts rows from 1
    fn row(&mut self,index: usize,row: &DecodedRow,opt: &DecodeOptions) -> STDRESULT;
    fn event(&mut self,evt: &Event) -> STDRESULT;
    /// called once after the last row
    fn finish(&mut self) -> STDRESULT;
}

/// Tallies from one pass.
#[derive(Clone,Debug,Default,PartialEq)]
pub struct Summary {
    pub rows: usize,
    pub words: usize,
    pub extra_bits: usize,
    pub parity_errors: usize,
    /// where the assembler was when the tape ran out
    pub final_state: Option<State>
}

/// Decode every row of `input`, sending results to `sink`.
pub fn decode_stream<R: Read>(input: R,opt: &DecodeOptions,sink: &mut dyn DecodeSink) -> Result<Summary,crate::DYNERR> {
    let mut summary = Summary::default();
    let mut acc = Accumulator::new();
    for maybe_byte in BufReader::new(input).bytes() {
        let raw = maybe_byte?;
        summary.rows += 1;
        let row = DecodedRow::new(raw);
        trace!("row {}: raw {:02X} mach {}",summary.rows,raw,row.sextal);
        if row.row.parity_flag(opt.parity).is_some() {
            summary.parity_errors += 1;
        }
        sink.row(summary.rows,&row,opt)?;
        if !opt.ut1 {
            continue;
        }
        let prev = acc.state;
        let (next,events) = acc.step(summary.rows,row.mach,&row.sextal);
        acc = next;
        if acc.state!=prev {
            debug!("UT-1 {:?} -> {:?}",prev,acc.state);
        }
        for evt in &events {
            match evt {
                Event::StartCode { row } => info!("start code at row {}",row),
                Event::EndOfData { row } => info!("end of data at row {}",row),
                Event::ExtraBits { row, .. } => {
                    warn!("extra bits in word ending at row {}",row);
                    summary.extra_bits += 1;
                },
                Event::Word { .. } => summary.words += 1,
                Event::StartAddress { .. } => {}
            }
            sink.event(evt)?;
        }
    }
    if opt.ut1 {
        match acc.state {
            State::WaitStart => warn!("no UT-1 start code was found"),
            State::Done => {},
            s => warn!("tape ended without an end code, assembler was in {:?}",s)
        }
        summary.final_state = Some(acc.state);
    }
    info!("decoded {} rows",summary.rows);
    sink.finish()?;
    Ok(summary)
}

/// Prints rows and events as lines of text.
pub struct TextSink<W: Write> {
    out: W,
    color: bool
}

impl<W: Write> TextSink<W> {
    /// If `color` is true, parity flags and extra bit warnings are highlighted.
    pub fn new(out: W,color: bool) -> Self {
        Self {
            out,
            color
        }
    }
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DecodeSink for TextSink<W> {
    fn row(&mut self,_index: usize,row: &DecodedRow,opt: &DecodeOptions) -> STDRESULT {
        let mut fields = row.fields(opt);
        if fields.len()==0 {
            return Ok(());
        }
        if self.color && row.row.parity_flag(opt.parity).is_some() {
            if let Some(flag) = fields.last_mut() {
                *flag = flag.red().to_string();
            }
        }
        writeln!(self.out,"{}",fields.join(" "))?;
        Ok(())
    }
    fn event(&mut self,evt: &Event) -> STDRESULT {
        match (self.color,evt) {
            (true,Event::ExtraBits { .. }) => writeln!(self.out,"{}",evt.to_string().yellow())?,
            _ => writeln!(self.out,"{}",evt)?
        }
        Ok(())
    }
    fn finish(&mut self) -> STDRESULT {
        self.out.flush()?;
        Ok(())
    }
}

/// Collects rows and events into a JSON document with keys `rows` and `ut1`.
/// Every row is included with all of its readings, whatever fields are selected
/// for text output.  A row that fails the parity check also gets `parity_error`.
pub struct JsonSink {
    rows: json::JsonValue,
    events: json::JsonValue
}

impl JsonSink {
    pub fn new() -> Self {
        Self {
            rows: json::JsonValue::new_array(),
            events: json::JsonValue::new_array()
        }
    }
    pub fn to_json(&self,indent: Option<u16>) -> String {
        let ans = json::object! {
            rows: self.rows.clone(),
            ut1: self.events.clone()
        };
        match indent {
            Some(spaces) => json::stringify_pretty(ans,spaces),
            None => json::stringify(ans)
        }
    }
}

impl DecodeSink for JsonSink {
    fn row(&mut self,index: usize,row: &DecodedRow,opt: &DecodeOptions) -> STDRESULT {
        let mut obj = json::object! {
            row: index,
            raw: hex::encode_upper([row.row.raw]),
            holes: row.row.hole_pattern(),
            parity: row.row.parity,
            mach: row.mach,
            sextal: row.sextal.clone(),
            symbol: row.symbol,
            ascii: row.ascii()
        };
        if let Some(flag) = row.row.parity_flag(opt.parity) {
            obj["parity_error"] = flag.into();
        }
        self.rows.push(obj)?;
        Ok(())
    }
    fn event(&mut self,evt: &Event) -> STDRESULT {
        self.events.push(evt.to_json())?;
        Ok(())
    }
    fn finish(&mut self) -> STDRESULT {
        Ok(())
    }
}

#[cfg(test)]
fn decode_to_string(tape: &[u8],opt: &DecodeOptions) -> (String,Summary) {
    let mut sink = TextSink::new(Vec::new(),false);
    let summary = decode_stream(tape,opt,&mut sink).expect("decode failed");
    (String::from_utf8(sink.into_inner()).expect("output was not UTF8"),summary)
}

#[cfg(test)]
fn ut1_only() -> DecodeOptions {
    let mut opt = DecodeOptions::new();
    opt.ut1 = true;
    opt
}

#[test]
fn test_rows_in_order() {
    let mut opt = DecodeOptions::new();
    opt.show_sextal = true;
    opt.show_symbol = true;
    let tape = hex::decode("0001ff").expect("hex error");
    let (out,summary) = decode_to_string(&tape,&opt);
    assert_eq!(out,"00   \n01  1\nTX  ~\n");
    assert_eq!(summary.rows,3);
    assert_eq!(summary.final_state,None);
}

#[test]
fn test_nothing_selected() {
    let mut opt = DecodeOptions::new();
    opt.parity = crate::row::Parity::CheckOdd;
    let tape = hex::decode("000103").expect("hex error");
    let (out,summary) = decode_to_string(&tape,&opt);
    assert_eq!(out,"");
    assert_eq!(summary.rows,3);
    assert_eq!(summary.parity_errors,2);
}

#[test]
fn test_ut1_program() {
    // raw rows: leader, TX, address 0x42, one word 1..6, S1
    let tape = hex::decode("0000ff0102010203040506c1").expect("hex error");
    let (out,summary) = decode_to_string(&tape,&ut1_only());
    let expected = "# Found Start Code at 3
# Start Address 042
042: 04231056 12@0V}
# Found End of Data at 12
";
    assert_eq!(out,expected);
    assert_eq!(summary.words,1);
    assert_eq!(summary.final_state,Some(State::Done));
}

#[test]
fn test_ut1_interleaved_with_rows() {
    let mut opt = ut1_only();
    opt.show_sextal = true;
    let tape = hex::decode("ff000001020304050e").expect("hex error");
    let (out,summary) = decode_to_string(&tape,&opt);
    let expected = "TX
# Found Start Code at 1
00
00
# Start Address 000
01
02
03
04
05
0W
000: 0423105W 12@0X}
";
    assert_eq!(out,expected);
    assert_eq!(summary.final_state,Some(State::ReadWord1));
}

#[test]
fn test_json() {
    let mut opt = ut1_only();
    opt.show_holes = true;
    let tape = hex::decode("ff0000").expect("hex error");
    let mut sink = JsonSink::new();
    decode_stream(&tape[..],&opt,&mut sink).expect("decode failed");
    let obj = json::parse(&sink.to_json(None)).expect("bad JSON");
    assert_eq!(obj["rows"].len(),3);
    assert_eq!(obj["rows"][0]["raw"],"FF");
    assert_eq!(obj["rows"][0]["holes"],"|ooooo.ooo|");
    assert_eq!(obj["rows"][1]["row"],2);
    assert_eq!(obj["ut1"][0]["event"],"start_code");
    assert_eq!(obj["ut1"][1]["event"],"start_address");
    assert_eq!(obj["ut1"][1]["addr"],"000");
}

#[test]
fn test_json_row_keys() {
    let mut opt = DecodeOptions::new();
    opt.parity = crate::row::Parity::CheckEven;
    let tape = hex::decode("032d").expect("hex error");
    let mut sink = JsonSink::new();
    decode_stream(&tape[..],&opt,&mut sink).expect("decode failed");
    let obj = json::parse(&sink.to_json(Some(2))).expect("bad JSON");
    assert_eq!(obj["rows"].len(),2);
    for row in obj["rows"].members() {
        for key in ["row","raw","holes","parity","mach","sextal","symbol","ascii"] {
            assert!(row.has_key(key),"missing {}",key);
        }
    }
    let first = &obj["rows"][0];
    assert_eq!(first["raw"],"03");
    assert_eq!(first["holes"],"|     . oo|");
    assert_eq!(first["parity"],0);
    assert_eq!(first["mach"],3);
    assert_eq!(first["sextal"],"03");
    assert_eq!(first["symbol"],"3");
    assert_eq!(first["ascii"],"ETX");
    assert!(!first.has_key("parity_error"));
    let second = &obj["rows"][1];
    assert_eq!(second["parity"],0);
    assert_eq!(second["mach"],0x1d);
    assert_eq!(second["sextal"],"1V");
    assert_eq!(second["symbol"],"bs");
    assert_eq!(second["ascii"],"-");
    let tape = hex::decode("07").expect("hex error");
    let mut sink = JsonSink::new();
    decode_stream(&tape[..],&opt,&mut sink).expect("decode failed");
    let obj = json::parse(&sink.to_json(None)).expect("bad JSON");
    assert_eq!(obj["rows"][0]["parity"],1);
    assert_eq!(obj["rows"][0]["parity_error"],"ODD PARITY");
}
