use clap;
use log::info;
use crate::format::DecodeOptions;
use crate::row::Parity;
use crate::decode::{decode_stream,TextSink,JsonSink};
use crate::STDRESULT;

/// Work out the decode options from the command line.
pub fn options(cmd: &clap::ArgMatches) -> DecodeOptions {
    DecodeOptions {
        show_holes: cmd.get_flag("tape"),
        show_ascii: cmd.get_flag("ascii"),
        show_sextal: cmd.get_flag("monrobot") || cmd.get_flag("bcd"),
        show_symbol: cmd.get_flag("bcd"),
        ut1: cmd.get_flag("ut1"),
        parity: match (cmd.get_flag("even"),cmd.get_flag("odd")) {
            (true,_) => Parity::CheckEven,
            (_,true) => Parity::CheckOdd,
            _ => Parity::None
        }
    }
}

pub fn decode(cmd: &clap::ArgMatches) -> STDRESULT {
    let opt = options(cmd);
    let tape = crate::open_tape(cmd.get_one::<String>("file"))?;
    let summary = if cmd.get_flag("json") {
        let mut sink = JsonSink::new();
        let summary = decode_stream(tape,&opt,&mut sink)?;
        println!("{}",sink.to_json(cmd.get_one::<u16>("indent").copied()));
        summary
    } else {
        let console = cmd.get_flag("console");
        if console {
            colored::control::set_override(true);
        }
        let color = console || atty::is(atty::Stream::Stdout);
        let mut sink = TextSink::new(std::io::stdout().lock(),color);
        decode_stream(tape,&opt,&mut sink)?
    };
    if summary.parity_errors > 0 {
        info!("{} rows failed the parity check",summary.parity_errors);
    }
    if opt.ut1 {
        info!("assembled {} words, {} with extra bits",summary.words,summary.extra_bits);
    }
    Ok(())
}
