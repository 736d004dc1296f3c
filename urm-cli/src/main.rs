use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use urm_cli::{driver, report, InterpretError};
use urm_runtime::{HaltReason, VmConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Unlimited register machine interpreter")]
struct Cli {
    /// Source file: optional `R n = v` lines, then Z/S/T/J instructions
    file: PathBuf,

    /// Stop after this many executed instructions
    #[arg(long)]
    max_steps: Option<u64>,

    /// Do not print the instruction listing before running
    #[arg(long)]
    no_listing: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match interpret_file(&cli) {
        Ok(code) => code,
        Err(err) => {
            println!("{:#}. Process stopped.", err);
            ExitCode::FAILURE
        }
    }
}

fn interpret_file(cli: &Cli) -> Result<ExitCode> {
    let file = File::open(&cli.file)
        .with_context(|| format!("Can't open file \"{}\"", cli.file.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let assembly = match driver::load(BufReader::new(file)) {
        Ok(assembly) => assembly,
        Err(InterpretError::InvalidSource(err)) => {
            for diagnostic in &err.errors {
                report::write_diagnostic(&mut out, diagnostic)?;
            }
            report::write_invalid_source(&mut out, &cli.file)?;
            return Ok(ExitCode::FAILURE);
        }
        Err(InterpretError::NoInstructions { registers }) => {
            if !registers.is_empty() {
                report::write_initial_registers(&mut out, &registers)?;
            }
            report::write_no_instructions(&mut out)?;
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    if !assembly.registers.is_empty() {
        report::write_initial_registers(&mut out, &assembly.registers)?;
    }
    if !cli.no_listing {
        report::write_listing(&mut out, &assembly.program)?;
    }
    // The run may not terminate
    out.flush()?;

    let config = VmConfig {
        max_steps: cli.max_steps,
    };

    match driver::run(assembly, &config) {
        Ok(result) => {
            report::write_result(&mut out, &result)?;
            match result.halt_reason {
                HaltReason::StepLimit { .. } => Ok(ExitCode::FAILURE),
                HaltReason::Completed | HaltReason::JumpBeforeStart => Ok(ExitCode::SUCCESS),
            }
        }
        Err(InterpretError::Runtime(err)) => {
            report::write_fault(&mut out, &err)?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
