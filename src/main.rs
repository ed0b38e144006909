//! Login Name Generation CLI
//!
//! Combines personnel record files into one file, assigning each person a
//! unique login name.

use anyhow::{bail, Result};
use clap::Parser;
use login_gen::writer::render_records;
use login_gen::{Config, Processor};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "login-gen")]
#[command(version)]
#[command(about = "Generate user login names from one or more input files", long_about = None)]
struct Args {
	/// Path to the output file where generated records will be saved
	#[arg(short, long, value_name = "OUTPUT")]
	output: PathBuf,

	/// One or more input files containing user records
	#[arg(value_name = "INPUT_FILES", required = true, num_args = 1..)]
	input_files: Vec<PathBuf>,

	/// Print the records to stdout instead of writing the output file
	#[arg(short = 'n', long)]
	dry_run: bool,

	/// Log every skipped line
	#[arg(short, long)]
	verbose: bool,

	/// Exit with an error if any input file could not be read
	#[arg(long)]
	strict: bool,
}

fn init_logging(verbose: bool) {
	let default_directive = if verbose {
		"login_gen=debug"
	} else {
		"login_gen=info"
	};

	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false),
		)
		.init();
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.verbose);

	let config = Config {
		input_files: args.input_files,
		output: args.output,
		dry_run: args.dry_run,
	};
	let output = config.output.clone();

	let start_time = Instant::now();
	let mut processor = Processor::new(config);
	let stats = processor.run()?;
	let time_str = format!("{:.2}s", start_time.elapsed().as_secs_f64());

	if args.dry_run {
		print!("{}", render_records(processor.records()));
	} else {
		println!(
			"Wrote {} records from {} files ({} failed, {} lines skipped) to {} in {}",
			stats.records,
			stats.total_files(),
			stats.files_failed,
			stats.lines_skipped(),
			output.display(),
			time_str
		);
	}

	if args.strict && stats.files_failed > 0 {
		bail!(
			"{} of {} input files could not be read",
			stats.files_failed,
			stats.total_files()
		);
	}

	Ok(())
}
