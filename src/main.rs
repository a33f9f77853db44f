use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use nfasim::builtin::{AUTOMATON, DEMO_INPUTS};

/// Run strings through the built-in eight state NFA over {a, b}
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// strings to simulate; the demo list is used when none are given
    pub inputs: Vec<String>,

    /// read one input per line from stdin
    #[arg(long, conflicts_with = "inputs")]
    pub stdin: bool,

    /// print only accept/reject, one per line
    #[arg(long)]
    pub plain: bool,

    /// print the transition table first
    #[arg(long)]
    pub dump: bool,
}

fn report<W: Write>(out: &mut W, input: &str, plain: bool) -> io::Result<()> {
    let verdict = AUTOMATON.simulate(input);
    if plain {
        writeln!(out, "{}", verdict)
    } else {
        writeln!(out, "Input: '{}' -> Result: {}", input, verdict)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.dump {
        write!(out, "{}", *AUTOMATON).context("writing transition table")?;
    }

    if args.stdin {
        info!("reading inputs from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("reading input line")?;
            report(&mut out, &line, args.plain)?;
        }
    } else if args.inputs.is_empty() {
        info!("no inputs given, running {} demo inputs", DEMO_INPUTS.len());
        for input in DEMO_INPUTS.iter() {
            report(&mut out, input, args.plain)?;
        }
    } else {
        for input in &args.inputs {
            report(&mut out, input, args.plain)?;
        }
    }

    out.flush().context("flushing output")?;
    Ok(())
}
