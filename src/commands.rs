use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use ncl_colormap::colortables::{DATA_DIR_ENV, DEFAULT_DATA_DIR};

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");
const DATA_DIR_HELP: &str = formatcp!("The directory containing the color tables. Defaults to \"{DEFAULT_DATA_DIR}\".");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Reads NCL color tables and their boundary files")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(short = 'd', long, global = true, env = DATA_DIR_ENV, help = DATA_DIR_HELP)]
	pub data_dir: Option<PathBuf>,

	#[arg(long, global = true, help = "Enables debug logging.")]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ShowArgs {
	#[arg(help = "The color table name. Append _r to reverse it.")]
	pub name: String,

	#[arg(short, long, help = "Also prints the value range of every color using the boundary file.")]
	pub bounds: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct BinArgs {
	#[arg(help = "The color table name. Append _r to reverse it.")]
	pub name: String,

	#[arg(required = true, allow_negative_numbers = true, help = "The values to map onto the color table.")]
	pub values: Vec<f64>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExportArgs {
	#[arg(help = "The color table name. Append _r to reverse it.")]
	pub name: String,
	#[arg(short, long, help = "The output JSON file.")]
	pub output: PathBuf,

	#[arg(short, long, help = "Includes the boundaries from the boundary file.")]
	pub bounds: bool,
	#[arg(long, help = "Writes indented JSON.")]
	pub pretty: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Prints the colors of a color table")]
	Show(ShowArgs),

	#[command(about = "Lists the color tables in the data directory")]
	List,

	#[command(about = "Maps values to colors using the boundary file")]
	Bin(BinArgs),

	#[command(about = "Writes a color table to a JSON file")]
	Export(ExportArgs),
}
