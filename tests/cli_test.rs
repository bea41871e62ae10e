use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::Command; // Run programs
use std::io::Write;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

/// leader, start code, address 042, two words, end code, trailer
const PROGRAM: [u8;22] = [
    0x00,0x00,0xff,0x01,0x02,
    0x01,0x02,0x03,0x04,0x05,0x06,
    0x68,0x65,0x08,0x68,0x69,0x09,
    0xc1,0x00,0x00,0xff,0x01
];

fn tape_file(rows: &[u8]) -> Result<tempfile::NamedTempFile,std::io::Error> {
    let mut f = tempfile::NamedTempFile::new()?;
    f.write_all(rows)?;
    f.flush()?;
    Ok(f)
}

#[test]
fn ut1_listing() -> STDRESULT {
    let tape = tape_file(&PROGRAM)?;
    let mut cmd = Command::cargo_bin("ptkit")?;
    let expected =
r#"# Found Start Code at 3
# Start Address 042
042: 04231056 12@0V}
043: W358W399 HELLO|
# Found End of Data at 18
"#;
    cmd.arg("decode").arg("-u")
        .arg(tape.path())
        .assert()
        .success()
        .stdout(expected);
    Ok(())
}

#[test]
fn ut1_from_stdin() -> STDRESULT {
    let mut cmd = assert_cmd::Command::cargo_bin("ptkit")?;
    cmd.arg("decode").arg("-u")
        .write_stdin(PROGRAM.to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("043: W358W399 HELLO|"));
    Ok(())
}

#[test]
fn holes_and_bcd() -> STDRESULT {
    let tape = tape_file(&[0x00,0xff,0x2d])?;
    let mut cmd = Command::cargo_bin("ptkit")?;
    let expected =
"|     .   | 00   \n|ooooo.ooo| TX  ~\n|  o o.o o| 1V bs\n";
    cmd.arg("decode").arg("-t").arg("-b")
        .arg(tape.path())
        .assert()
        .success()
        .stdout(expected);
    Ok(())
}

#[test]
fn ascii_with_parity() -> STDRESULT {
    let tape = tape_file(&[0xc1,0x41,0x0d,0x7f])?;
    let mut cmd = Command::cargo_bin("ptkit")?;
    let expected = "A ODD PARITY\nA\nCR ODD PARITY\nDEL ODD PARITY\n";
    cmd.arg("decode").arg("--ascii").arg("--even")
        .arg(tape.path())
        .assert()
        .success()
        .stdout(expected);
    Ok(())
}

#[test]
fn rows_and_ut1_together() -> STDRESULT {
    let tape = tape_file(&PROGRAM[0..5])?;
    let mut cmd = Command::cargo_bin("ptkit")?;
    let expected = "00\n00\nTX\n# Found Start Code at 3\n01\n02\n# Start Address 042\n";
    cmd.arg("decode").arg("-m").arg("-u")
        .arg(tape.path())
        .assert()
        .success()
        .stdout(expected);
    Ok(())
}

#[test]
fn parity_alone_prints_nothing() -> STDRESULT {
    let tape = tape_file(&[0x00,0x03,0x07])?;
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("decode").arg("-o")
        .arg(tape.path())
        .assert()
        .success()
        .stdout("");
    Ok(())
}

#[test]
fn conflicting_decodes() -> STDRESULT {
    let tape = tape_file(&[0x00])?;
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("decode").arg("-a").arg("-b")
        .arg(tape.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("decode").arg("-e").arg("-o")
        .arg(tape.path())
        .assert()
        .failure();
    Ok(())
}

#[test]
fn missing_tape() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("decode").arg("-t")
        .arg("no_such_tape.bin")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
    Ok(())
}

#[test]
fn json_document() -> STDRESULT {
    let tape = tape_file(&PROGRAM)?;
    let mut cmd = Command::cargo_bin("ptkit")?;
    let output = cmd.arg("decode").arg("-u").arg("--json")
        .arg(tape.path())
        .output()?;
    assert!(output.status.success());
    let obj = json::parse(&String::from_utf8(output.stdout)?)?;
    assert_eq!(obj["rows"].len(),22);
    assert_eq!(obj["rows"][2]["raw"],"FF");
    assert_eq!(obj["rows"][2]["holes"],"|ooooo.ooo|");
    assert_eq!(obj["rows"][2]["parity"],0);
    assert_eq!(obj["rows"][2]["mach"],0xbf);
    assert_eq!(obj["rows"][2]["sextal"],"TX");
    assert_eq!(obj["rows"][2]["symbol"],"~");
    assert_eq!(obj["rows"][2]["ascii"],"DEL");
    assert_eq!(obj["ut1"].len(),5);
    assert_eq!(obj["ut1"][2]["event"],"word");
    assert_eq!(obj["ut1"][2]["addr"],"042");
    assert_eq!(obj["ut1"][2]["value"],"04231056");
    assert_eq!(obj["ut1"][3]["display"],"HELLO|");
    assert_eq!(obj["ut1"][4]["event"],"end_of_data");
    assert_eq!(obj["ut1"][4]["row"],18);
    Ok(())
}

#[test]
fn console_forces_color() -> STDRESULT {
    let tape = tape_file(&[0xc1,0x41])?;
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("decode").arg("-a").arg("-e").arg("--console")
        .arg(tape.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[31mODD PARITY"))
        .stdout(predicate::str::ends_with("A\n"));
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("decode").arg("-a").arg("-e")
        .arg(tape.path())
        .assert()
        .success()
        .stdout("A ODD PARITY\nA\n");
    Ok(())
}

#[test]
fn shell_completions() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("completions").arg("--shell").arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("ptkit"))
        .stdout(predicate::str::contains("decode"));
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("completions").arg("-s").arg("tcsh")
        .assert()
        .failure();
    Ok(())
}

#[test]
fn indent_needs_json() -> STDRESULT {
    let tape = tape_file(&PROGRAM)?;
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("decode").arg("-u").arg("--indent").arg("2")
        .arg(tape.path())
        .assert()
        .failure();
    Ok(())
}

#[test]
fn charset_table() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("charset")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("00  \n01 1\n"))
        .stdout(predicate::str::contains("1V bs\n"))
        .stdout(predicate::str::ends_with("3X cr\n80 CR\n"));
    Ok(())
}

#[test]
fn charset_lookup() -> STDRESULT {
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("charset").arg("38")
        .assert()
        .success()
        .stdout("38 H\n");
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("charset").arg("tx")
        .assert()
        .success()
        .stdout("TX ~\n");
    let mut cmd = Command::cargo_bin("ptkit")?;
    cmd.arg("charset").arg("100")
        .assert()
        .failure();
    Ok(())
}
