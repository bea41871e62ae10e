use super::ut1::{Accumulator,Event,State,pack_word};
use super::mach_to_sextal;

/// Run machine codes through a fresh assembler, rows counted from 1.
fn run(codes: &[u8]) -> (Accumulator,Vec<Event>) {
    let mut acc = Accumulator::new();
    let mut events = Vec::new();
    for (i,mach) in codes.iter().enumerate() {
        let (next,mut evts) = acc.step(i+1,*mach,&mach_to_sextal(*mach));
        acc = next;
        events.append(&mut evts);
    }
    (acc,events)
}

fn lines(events: &[Event]) -> Vec<String> {
    events.iter().map(|e| e.to_string()).collect()
}

mod start_and_address {
    use super::*;
	#[test]
	fn leader_is_ignored() {
		let (acc,events) = run(&[0x00,0x00,0x3f,0x80,0xa1]);
		assert_eq!(acc.state,State::WaitStart);
		assert!(events.is_empty());
	}
	#[test]
	fn start_code() {
		let (acc,events) = run(&[0x00,0x00,0xbf]);
		assert_eq!(acc.state,State::ReadAddrHi);
		assert_eq!(events,vec![Event::StartCode { row: 3 }]);
		assert_eq!(lines(&events),vec!["# Found Start Code at 3"]);
	}
	#[test]
	fn start_address() {
		let (acc,events) = run(&[0xbf,0x01,0x02]);
		assert_eq!(acc.state,State::ReadWord1);
		assert_eq!(acc.addr,0x42);
		assert_eq!(events[1],Event::StartAddress { addr: 0x42 });
		assert_eq!(events[1].to_string(),"# Start Address 042");
	}
	#[test]
	fn address_in_sextal() {
		let (acc,events) = run(&[0xbf,0x2f,0x3c]);
		assert_eq!(acc.addr,0xbfc);
		assert_eq!(events[1].to_string(),"# Start Address TXU");
	}
	#[test]
	fn address_runs_past_16_bits() {
		let mut acc = Accumulator::new();
		acc.state = State::ReadWord1;
		acc.addr = 0xffff;
		let mut events = Vec::new();
		for (i,mach) in [0,0,0,0,0,1,0,0,0,0,0,2].iter().enumerate() {
			let (next,mut evts) = acc.step(i+1,*mach,&mach_to_sextal(*mach));
			acc = next;
			events.append(&mut evts);
		}
		assert_eq!(events,vec![
			Event::Word { addr: 0xffff, value: 1 },
			Event::Word { addr: 0x10000, value: 2 }
		]);
		assert_eq!(lines(&events),vec!["XXXX: 00000001      |","10000: 00000002      }"]);
		assert_eq!(acc.addr,0x10001);
	}
}

mod words {
    use super::*;
	#[test]
	fn one_word() {
		let (acc,events) = run(&[0xbf,0x01,0x02,0x01,0x02,0x03,0x04,0x05,0x06]);
		let expected: u64 = ((((0x01 << 6 | 0x02) << 4 | 0x03) << 6 | 0x04) << 6 | 0x05) << 4 | 0x06;
		assert_eq!(events.len(),3);
		assert_eq!(events[2],Event::Word { addr: 0x42, value: expected });
		assert_eq!(expected,0x04231056);
		assert_eq!(events[2].to_string(),"042: 04231056 12@0V}");
		assert_eq!(acc.addr,0x43);
		assert_eq!(acc.state,State::ReadWord1);
	}
	#[test]
	fn consecutive_words() {
		let (acc,events) = run(&[0xbf,0x00,0x10,
			0x00,0x00,0x00,0x00,0x00,0x00,
			0x3f,0x3f,0x0f,0x3f,0x3f,0x0f]);
		assert_eq!(lines(&events),vec![
			"# Found Start Code at 1",
			"# Start Address 010",
			"010: 00000000       ",
			"011: XXXXXXXX crcrcrcrcr "
		]);
		assert_eq!(acc.addr,0x12);
	}
	#[test]
	fn partial_word_is_not_emitted() {
		let (acc,events) = run(&[0xbf,0x00,0x00,0x01,0x02,0x03]);
		assert_eq!(events.len(),2);
		assert_eq!(acc.state,State::ReadWord4);
	}
	#[test]
	fn pack() {
		assert_eq!(pack_word(&[0,0,0,0,0,0]),0);
		assert_eq!(pack_word(&[0x3f,0x3f,0xf,0x3f,0x3f,0xf]),0xffffffff);
		assert_eq!(pack_word(&[0,0,0,0,0,1]),1);
		assert_eq!(pack_word(&[1,0,0,0,0,0]),1 << 26);
	}
}

mod end_of_data {
    use super::*;
	#[test]
	fn end_code_s1() {
		let (acc,events) = run(&[0xbf,0x01,0x02,0xa1]);
		assert_eq!(acc.state,State::Done);
		assert_eq!(events[2],Event::EndOfData { row: 4 });
		assert_eq!(events[2].to_string(),"# Found End of Data at 4");
	}
	#[test]
	fn end_code_s0_after_word() {
		let (acc,events) = run(&[0xbf,0x01,0x02,0x01,0x02,0x03,0x04,0x05,0x06,0xa0]);
		assert_eq!(acc.state,State::Done);
		assert_eq!(events.len(),4);
		assert_eq!(events[3],Event::EndOfData { row: 10 });
	}
	#[test]
	fn trailer_is_ignored() {
		let (acc,events) = run(&[0xbf,0x01,0x02,0xa1,0xbf,0x01,0x02,0x03,0x04,0x05,0x06,0xa1]);
		assert_eq!(acc.state,State::Done);
		assert_eq!(events.len(),3);
		let (after,more) = acc.clone().step(13,0xbf,"TX");
		assert_eq!(after,acc);
		assert!(more.is_empty());
	}
	#[test]
	fn end_code_inside_word_is_data() {
		let (acc,events) = run(&[0xbf,0x00,0x00,0x01,0xa1,0x03,0x04,0x05,0x06]);
		assert_eq!(acc.state,State::ReadWord1);
		assert_eq!(events.len(),4);
		assert!(matches!(events[2],Event::ExtraBits { row: 9, .. }));
		assert!(matches!(events[3],Event::Word { addr: 0, .. }));
	}
}

mod extra_bits {
    use super::*;
	#[test]
	fn oversized_short_field() {
		let (_acc,events) = run(&[0xbf,0x01,0x02,0x01,0x02,0x17,0x04,0x05,0x06]);
		let expected: u64 = ((((0x01 << 6 | 0x02) << 4 | 0x17) << 6 | 0x04) << 6 | 0x05) << 4 | 0x06;
		assert_eq!(events.len(),4);
		assert_eq!(events[2],Event::ExtraBits { row: 9, fields: [0x01,0x02,0x17,0x04,0x05,0x06] });
		assert_eq!(events[2].to_string(),"# Extra bits 9: 01 02 17 04 05 06");
		assert_eq!(events[3],Event::Word { addr: 0x42, value: expected });
	}
	#[test]
	fn oversized_last_field() {
		let (_acc,events) = run(&[0xbf,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x10]);
		assert_eq!(events[2].to_string(),"# Extra bits 9: 00 00 00 00 00 10");
		assert_eq!(events[3],Event::Word { addr: 0, value: 0x10 });
	}
	#[test]
	fn high_bit_goes_past_32() {
		let (_acc,events) = run(&[0xbf,0x00,0x00,0x80,0x00,0x00,0x00,0x00,0x00]);
		assert_eq!(events[3],Event::Word { addr: 0, value: 0x80 << 26 });
		assert_eq!(events[3].to_string(),"000: 200000000       ");
	}
	#[test]
	fn fields_at_limit_are_fine() {
		let (_acc,events) = run(&[0xbf,0x00,0x00,0x3f,0x3f,0x0f,0x3f,0x3f,0x0f]);
		assert_eq!(events.len(),3);
	}
}
