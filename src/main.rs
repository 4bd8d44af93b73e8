use std::fs;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;
use log::LevelFilter;

use crate::cmd_bin::cmap_bin;
use crate::cmd_export::cmap_export;
use crate::cmd_list::cmap_list;
use crate::cmd_show::cmap_show;
use crate::commands::{Cli, Commands};

mod cmd_bin;
mod cmd_export;
mod cmd_list;
mod cmd_show;
mod commands;
mod common;

fn main() -> ExitCode {
	let cli = Cli::parse();

	let default_level = if cli.debug { LevelFilter::Debug } else { LevelFilter::Warn };
	env_logger::Builder::new()
		.filter_level(default_level)
		.parse_default_env()
		.init();

	let data_dir = common::data_dir(&cli);

	let result = match &cli.command {
		Some(Commands::Show(args)) => cmap_show(args, &data_dir),
		Some(Commands::List) => cmap_list(&data_dir),
		Some(Commands::Bin(args)) => cmap_bin(args, &data_dir),
		Some(Commands::Export(args)) => {
			return match cmap_export(args, &data_dir) {
				Ok(_) => {
					match fs::metadata(&args.output) {
						Ok(m) => {
							let size = humansize::format_size(m.len(), DECIMAL);
							println!("Output file size: {size}");
						}
						Err(err) => {
							eprintln!("Can't determine output file size: {err}");
						}
					}
					ExitCode::SUCCESS
				}
				Err(e) => {
					eprintln!("execution failed: {e}");
					ExitCode::FAILURE
				}
			};
		}
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}
