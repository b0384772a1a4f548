//! NACHA Payroll CLI
//!
//! Reads a bank configuration (JSON) and payroll entries (CSV) and writes a
//! NACHA PPD file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- config.json entries.csv --mode prod --batch 3 --end-date 20240331 > payroll.ach
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use nacha_payroll::{build_nacha_ppd, load_entries, Mode, NachaConfig, NachaError, PayrollRun, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

/// Parsed command line.
struct Args {
    config_path: String,
    entries_path: String,
    mode: Mode,
    batch_number: u32,
    end_date: Option<String>,
    output: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;

    let config = NachaConfig::from_json_reader(BufReader::new(File::open(&args.config_path)?))?;
    let entries = load_entries(BufReader::new(File::open(&args.entries_path)?))?;

    let mut payroll_run = PayrollRun::new(args.batch_number);
    if let Some(end_date) = args.end_date {
        payroll_run = payroll_run.with_end_date(end_date);
    }

    let file = build_nacha_ppd(&payroll_run, &entries, &config, args.mode)?;

    match args.output {
        Some(path) => file.write_to(File::create(path)?)?,
        None => {
            let stdout = io::stdout();
            file.write_to(stdout.lock())?;
        }
    }

    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut raw: I) -> Result<Args> {
    let mut positional = Vec::new();
    let mut mode = Mode::Test;
    let mut batch_number = 1;
    let mut end_date = None;
    let mut output = None;

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--mode" => mode = flag_value(&mut raw, "--mode")?.parse()?,
            "--batch" => {
                let value = flag_value(&mut raw, "--batch")?;
                batch_number = value
                    .parse()
                    .ok()
                    .filter(|n: &u32| *n > 0)
                    .ok_or_else(|| NachaError::InvalidArgument(format!("--batch {}", value)))?;
            }
            "--end-date" => end_date = Some(flag_value(&mut raw, "--end-date")?),
            "--output" => output = Some(flag_value(&mut raw, "--output")?),
            flag if flag.starts_with("--") => {
                return Err(NachaError::InvalidArgument(format!("unknown flag {}", flag)));
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    match (positional.next(), positional.next()) {
        (Some(config_path), Some(entries_path)) => Ok(Args {
            config_path,
            entries_path,
            mode,
            batch_number,
            end_date,
            output,
        }),
        _ => Err(NachaError::MissingArgument),
    }
}

fn flag_value<I: Iterator<Item = String>>(raw: &mut I, flag: &str) -> Result<String> {
    raw.next()
        .ok_or_else(|| NachaError::InvalidArgument(format!("{} requires a value", flag)))
}
