//! zotrank - rank new arXiv papers against a Zotero library

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use zotrank::cli::{Cli, Command};
use zotrank::commands;
use zotrank::commands::rank::RankOptions;
use zotrank::ui::{self, Log};

fn main() {
	let cli = Cli::parse();
	Log::set_verbose(cli.verbose);

	if let Err(e) = run(cli.command) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(command: Command) -> Result<()> {
	match command {
		Command::Rank {
			library,
			candidates,
			min_score,
			tags,
			ignore,
			send_empty,
			dim,
			nu,
			export,
		} => {
			if export.is_none() {
				print_header();
			}
			commands::rank::run(&RankOptions {
				library,
				candidates,
				min_score,
				tags,
				ignore,
				send_empty,
				dim,
				nu,
				export,
			})
		}
		Command::Groups { library, ignore } => {
			print_header();
			commands::groups::run(&library, ignore.as_deref())
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			match subcommand {
				Some(sub) => match cmd.find_subcommand_mut(&sub) {
					Some(sub_cmd) => sub_cmd.print_help()?,
					None => {
						ui::error(&format!("Unknown subcommand: {}", sub));
						cmd.print_help()?;
					}
				},
				None => cmd.print_help()?,
			}
			Ok(())
		}
	}
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── zotrank v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
