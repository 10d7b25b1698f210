use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use epim_vivado_dump::timing;
use simple_error::SimpleError;

#[derive(Debug, Parser)]
#[command(
    name = "parse_vivado_timing",
    about = "Extract per-epim data path delays from Vivado timing reports."
)]
struct Args {
    report: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let file = File::open(&args.report)
        .map_err(|e| SimpleError::new(format!("cannot open {}: {e}", args.report.display())))?;
    let mut out = io::stdout().lock();
    timing::extract(BufReader::new(file), &mut out)?;
    Ok(())
}
