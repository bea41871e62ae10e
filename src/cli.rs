use clap::{value_parser, crate_version, Arg, ArgAction, ArgGroup, Command, ValueHint};

const IN_HELP: &str = "if the tape is piped, omit the file argument";
const DECODE_LONG_HELP: &str = "At most one of --ascii, --monrobot, --bcd may be given.
Holes, UT-1 assembly, and parity checking can be combined with any of them.
The parity flag is only printed along with some other row field.";
const UT1_LONG_HELP: &str = "Assemble words from a Monrobot UT-1 program tape.
Rows before the start code TX are skipped, the next two rows give the starting address,
then every six rows make a word, until the end code S1 or S0 appears in place of a word.";

fn tape_arg() -> Arg {
    Arg::new("file").value_name("FILE").help("tape capture, or stdin if omitted")
        .value_hint(ValueHint::FilePath)
        .required(false)
}

fn console_arg() -> Arg {
    Arg::new("console").long("console").help("format for console unconditionally")
        .required(false)
        .action(ArgAction::SetTrue)
        .long_help("even if the output context is a file or pipe, format it for the console")
}

fn indent_arg() -> Arg {
    Arg::new("indent").long("indent").help("JSON indentation, omit to minify")
        .value_name("SPACES")
        .value_parser(value_parser!(u16).range(0..16))
        .requires("json")
        .required(false)
}

fn flag_arg(name: &'static str,short: char,help: &'static str) -> Arg {
    Arg::new(name).long(name).short(short).help(help).action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    let long_help = "ptkit is always invoked with exactly one of several subcommands.
Tape captures are raw bytes, one per row, as produced by a paper tape reader on a serial port.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
show holes:            `ptkit decode -t tape.bin`
Monrobot characters:   `ptkit decode -t -b tape.bin`
UT-1 program listing:  `ptkit decode -u tape.bin`
check parity:          `ptkit decode -a -e tape.bin`
as JSON:               `cat tape.bin | ptkit decode -b -u --json --indent 2`";

    let mut main_cmd = Command::new("ptkit")
        .about("Decodes punched paper tape captures with emphasis on Monrobot.")
        .after_long_help(long_help)
        .version(crate_version!());

    main_cmd = main_cmd.subcommand(
        Command::new("decode")
            .arg(tape_arg())
            .arg(flag_arg("tape",'t',"show the holes in each row"))
            .arg(flag_arg("ascii",'a',"decode as 7-bit ASCII"))
            .arg(flag_arg("bcd",'b',"decode as Monrobot code and character"))
            .arg(flag_arg("monrobot",'m',"decode as Monrobot code only"))
            .arg(flag_arg("ut1",'u',"decode as Monrobot UT-1 program tape").long_help(UT1_LONG_HELP))
            .arg(flag_arg("even",'e',"check for even parity"))
            .arg(flag_arg("odd",'o',"check for odd parity"))
            .arg(Arg::new("json").long("json").help("write a JSON document instead of lines").action(ArgAction::SetTrue))
            .arg(indent_arg())
            .arg(console_arg())
            .group(
                ArgGroup::new("decoding")
                    .required(false)
                    .multiple(false)
                    .args(["ascii", "bcd", "monrobot"])
            )
            .group(
                ArgGroup::new("parity")
                    .required(false)
                    .multiple(false)
                    .args(["even", "odd"])
            )
            .visible_alias("dec")
            .about("read a tape capture, write decoded rows to stdout")
            .after_help([DECODE_LONG_HELP,"\n\n",IN_HELP].concat())
    );
    main_cmd = main_cmd.subcommand(
        Command::new("charset")
            .arg(Arg::new("code").value_name("SEXTAL").help("machine code to look up, omit for the whole table")
                .required(false))
            .about("write the Monrobot character set to stdout")
            .after_help("codes are written in sextal, where STUVWX stand for the hex digits ABCDEF")
    );
    main_cmd = main_cmd.subcommand(
        Command::new("completions")
            .arg(
                Arg::new("shell").short('s').long("shell").help("shell target").value_name("NAME")
                    .required(true)
                    .value_parser(["bash","elv","fish","ps1","zsh"])
            )
            .about("write completions script to stdout for the specified shell")
    );
    return main_cmd;
}
