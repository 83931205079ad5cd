//! Hirelist CLI
//!
//! Renders the candidates page from a dataset file, with the same
//! components the browser mounts.
//!
//! ## Usage
//!
//! ```bash
//! hirelist render --data demos/candidates.json --role "UX Designer" --output page.html
//! hirelist summary --data demos/candidates.json --sort name --page 2
//! ```

mod render;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use render::PageArgs;

#[derive(Parser)]
#[command(name = "hirelist")]
#[command(about = "Candidate-tracking table renderer", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Render the page as a standalone HTML document
	Render {
		#[command(flatten)]
		page: PageArgs,

		/// Write to this file instead of stdout
		#[arg(short, long, value_name = "FILE")]
		output: Option<PathBuf>,
	},

	/// Print the summary line and the page links
	Summary {
		#[command(flatten)]
		page: PageArgs,
	},
}

fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "info",
		1 => "debug",
		_ => "trace",
	};
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
		)
		.with_writer(std::io::stderr)
		.init();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command {
		Commands::Render { page, output } => {
			let html = render::document(&render::build_page(&page)?);
			match output {
				Some(path) => {
					fs::write(&path, html)
						.with_context(|| format!("writing {}", path.display()))?;
					tracing::info!(path = %path.display(), "page written");
				}
				None => std::io::stdout()
					.write_all(html.as_bytes())
					.context("writing to stdout")?,
			}
		}
		Commands::Summary { page } => {
			println!("{}", render::summary(&render::build_page(&page)?));
		}
	}
	Ok(())
}
