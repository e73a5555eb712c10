use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::DEFAULT_NU;

fn parse_threshold(s: &str) -> Result<f64, String> {
	let val: f64 = s.trim().parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if val.is_finite() {
		Ok(val)
	} else {
		Err(format!("threshold must be finite, got {}", val))
	}
}

fn parse_nu(s: &str) -> Result<f64, String> {
	let val: f64 = s.trim().parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if val > 0.0 && val <= 1.0 {
		Ok(val)
	} else {
		Err(format!("nu must be in (0, 1], got {}", val))
	}
}

fn parse_dim(s: &str) -> Result<usize, String> {
	let val: usize = s.trim().parse().map_err(|_| format!("'{}' is not a valid dimension", s))?;
	if val > 0 {
		Ok(val)
	} else {
		Err("dimension must be at least 1".to_string())
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "zotrank",
	author,
	version,
	about = "Rank new arXiv papers against your Zotero library",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {rank}    {rank_args}        {rank_desc}
  {bin} {rank}    {tags_args}   {tags_desc}
  {bin} {groups}  {groups_args}                              {groups_desc}
  {bin} {help}    {help_args}                                   {help_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "zotrank".bright_blue(),
		rank = "rank".yellow(),
		rank_args = "-l library.json -c today.json -s -0.1",
		rank_desc = "Rank against the whole library".dimmed(),
		tags_args = "-l library.json -c today.json -s 0 -t nlp,cv",
		tags_desc = "One section per tag".dimmed(),
		groups = "groups".yellow(),
		groups_args = "-l library.json",
		groups_desc = "List library tags".dimmed(),
		help = "help".yellow(),
		help_args = "rank",
		help_desc = "Show help for rank".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Score candidate papers against the library and print the digest
	Rank {
		/// Library embeddings (.json or .msgpack)
		#[arg(short = 'l', long = "library", value_name = "PATH")]
		library: PathBuf,

		/// Candidate embeddings (.json or .msgpack)
		#[arg(short = 'c', long = "candidates", value_name = "PATH")]
		candidates: PathBuf,

		/// Minimum score for a paper to be recommended
		#[arg(
			short = 's',
			long = "min-score",
			env = "MIN_SCORE",
			allow_negative_numbers = true,
			value_parser = parse_threshold
		)]
		min_score: f64,

		/// Tags to rank separately (comma-separated); the whole library is always ranked too
		#[arg(short = 't', long = "tags", env = "ZOTERO_TAGS", value_delimiter = ',')]
		tags: Vec<String>,

		/// Collections to ignore, gitignore-style (one pattern per line)
		#[arg(long = "ignore", env = "ZOTERO_IGNORE", value_name = "PATTERNS")]
		ignore: Option<String>,

		/// Emit the digest even when nothing passes the threshold
		#[arg(
			long = "send-empty",
			env = "SEND_EMPTY",
			action = ArgAction::SetTrue,
			value_parser = FalseyValueParser::new()
		)]
		send_empty: bool,

		/// Expected embedding dimension (default: taken from the library)
		#[arg(long = "dim", env = "EMBEDDING_DIM", value_parser = parse_dim)]
		dim: Option<usize>,

		/// One-class SVM nu: upper bound on the fraction of library papers treated as outliers
		#[arg(long = "nu", env = "NU", default_value_t = DEFAULT_NU, value_parser = parse_nu)]
		nu: f64,

		/// Write the digest as JSON to this path ("-" for stdout)
		#[arg(short = 'e', long = "export", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// List library tags and how many papers carry each
	Groups {
		/// Library embeddings (.json or .msgpack)
		#[arg(short = 'l', long = "library", value_name = "PATH")]
		library: PathBuf,

		/// Collections to ignore, gitignore-style
		#[arg(long = "ignore", env = "ZOTERO_IGNORE", value_name = "PATTERNS")]
		ignore: Option<String>,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
