//! rdp-scancodes command line.
//!
//! Reads a hexdump of a decrypted RDP session, prints the recovered
//! keystrokes to stdout, and reports unknown scan codes on stderr.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use rdp_scancodes::{input, render, ControlStyle, Decoder, ScanCode};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "rdp-scancodes",
    version,
    disable_version_flag = true,
    about = "Translate key scan codes in hexdumps of decrypted RDP traffic to readable text"
)]
struct Args {
    /// Wireshark TCP stream hexdump to parse
    file: PathBuf,

    /// Show Backspace, Delete and Escape as BKSP, DEL and ESC
    #[arg(short = 'n', long)]
    control_names: bool,

    /// Do not print a line for each unknown scan code
    #[arg(short, long)]
    quiet: bool,
}

/// `-v/--version` in place of clap's default `-V`.
fn cli() -> clap::Command {
    Args::command().arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .action(ArgAction::Version)
            .help("Print version"),
    )
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_tty())
        .init();
}

fn report_unknown(code: ScanCode) {
    let line = format!("Unknown character found:  {code}");
    if io::stderr().is_tty() {
        eprintln!("{}", line.yellow());
    } else {
        eprintln!("{line}");
    }
}

fn write_transcript(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{text}")?;
    out.flush()
}

fn main() -> ExitCode {
    let args = match Args::from_arg_matches(&cli().get_matches()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    init_logging();

    let mut decoder = Decoder::new();
    if !args.quiet {
        decoder = decoder.on_unknown(report_unknown);
    }

    if let Err(e) = input::decode_file(&args.file, &mut decoder) {
        eprintln!("rdp-scancodes: {e}");
        return ExitCode::FAILURE;
    }

    let style = if args.control_names {
        ControlStyle::Names
    } else {
        ControlStyle::Raw
    };
    let text = render(&decoder.finish(), style);

    if let Err(e) = write_transcript(&mut io::stdout().lock(), &text) {
        eprintln!("rdp-scancodes: cannot write output: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
