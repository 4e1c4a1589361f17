use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use convert_long::{convert360, read_file, write_file};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about = "Convert polygons in the input file from the longitude range [-180, 180] to [0, 360]; write the result to the output path.",
	long_about = None
)]
struct Cli {
	/// path of the input file (*.geojson or *.json)
	input: PathBuf,

	/// path to write the converted collection to (*.geojson or *.json)
	output: PathBuf,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	if !cli.input.exists() {
		eprintln!("ERROR: file '{}' does not exist", cli.input.display());
		return Ok(());
	}

	let collection = read_file(&cli.input)?;
	info!("read {} features from '{}'", collection.len(), cli.input.display());

	let converted = convert360(collection)?;
	write_file(&cli.output, &converted)?;

	println!("Output polygons on range [0, 360] to file: '{}'", cli.output.display());
	Ok(())
}
