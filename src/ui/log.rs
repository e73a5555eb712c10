//! Unified logging system
//!
//! Log lines go to stderr so an exported digest on stdout stays clean.

use chrono::Local;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

fn emit(icon: ColoredString, msg: &str) {
	let time = Local::now().format("%H:%M:%S").to_string().dimmed();
	eprintln!("[{}] {} {}", time, icon, msg);
}

pub fn info(msg: &str) {
	emit("ℹ".bright_blue().bold(), &msg.bright_white().to_string());
}

pub fn success(msg: &str) {
	emit("✓".bright_green().bold(), &msg.bright_white().to_string());
}

pub fn warn(msg: &str) {
	emit("⚠".bright_yellow().bold(), &msg.bright_white().to_string());
}

pub fn error(msg: &str) {
	emit("✗".bright_red().bold(), &msg.bright_white().to_string());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		emit("⚙".bright_black().bold(), &msg.dimmed().to_string());
	}
}

pub fn header(text: &str) {
	println!("\n{}", format!("─── {} ───", text).bright_blue().bold());
}

/// Clickable link (OSC 8 terminal hyperlink)
pub fn hyperlink(text: &str, url: &str) -> String {
	format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, text)
}

/// Score colored by how far it clears the threshold
pub fn score_colored(score: f64, threshold: f64, max: f64) -> ColoredString {
	let text = format!("{:+.3}", score);
	let span = max - threshold;
	if span <= f64::EPSILON {
		return text.bright_green();
	}
	let ratio = ((score - threshold) / span).clamp(0.0, 1.0);
	if ratio > 0.66 {
		text.bright_green().bold()
	} else if ratio > 0.33 {
		text.green()
	} else {
		text.yellow()
	}
}
