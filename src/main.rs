use clap::{CommandFactory, Parser};
use seqcheck::{generate_file, replay_file, Candidate, Error, ReplayOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

mod cli;
use cli::report::{print_generation_summary, print_replay_summary, TerminalSink};
use cli::{Cli, Commands};

fn main() {
    // Usage errors (argument count, numbers, unknown candidate) exit here via clap.
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { ops, seed, output } => run_generate(ops, seed, &output),
        Commands::Test {
            candidate,
            input,
            trace,
            json,
            max_len,
            max_mismatches,
        } => run_test(
            candidate,
            &input,
            ReplayOptions { trace, max_len },
            json,
            max_mismatches,
        ),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        if matches!(e, Error::Io { .. }) {
            eprintln!("{}", Cli::command().render_usage());
        }
        std::process::exit(1);
    }
}

fn run_generate(ops: u32, seed: u64, output: &Path) -> Result<(), Error> {
    let summary = generate_file(output, ops, seed)?;
    print_generation_summary(output, seed, &summary);
    Ok(())
}

fn run_test(
    candidate: Candidate,
    input: &Path,
    options: ReplayOptions,
    json: bool,
    max_mismatches: Option<usize>,
) -> Result<(), Error> {
    let start = Instant::now();
    let stdout = io::stdout();
    // JSON output carries every mismatch itself, so nothing is printed inline.
    let limit = if json { Some(0) } else { max_mismatches };
    let mut sink = TerminalSink::new(BufWriter::new(stdout.lock()), limit);

    // Diagnostics already printed stay visible even when a later line is malformed.
    let outcome = replay_file(input, candidate, options, &mut sink);
    let suppressed = sink.suppressed();
    drop(sink);
    let report = outcome?;

    if json {
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out).map_err(Error::Output)?;
    } else {
        print_replay_summary(&report, suppressed, start.elapsed());
    }
    Ok(())
}
