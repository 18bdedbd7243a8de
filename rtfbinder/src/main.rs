use clap::Parser;
use rtfbinder::deserialization::{project_dir, DeserializableProject};
use std::error::Error;
use std::path::PathBuf;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Write an OpenManuscript project out as an rtf manuscript
#[derive(Parser, Debug)]
#[command(name = "rtfbinder")]
#[command(version)]
struct Cli {
	/// Path to the project file (json)
	project: PathBuf,

	/// Where to write the document, instead of the project's output file
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Directory holding the scene files, instead of the project's
	#[arg(long)]
	scenes: Option<PathBuf>,

	/// Only include chapters with this tag; may be repeated
	#[arg(long = "tag")]
	tags: Vec<String>,

	/// Underline rather than embolden and italicise
	#[arg(long)]
	underline: bool,

	/// Leave footnotes out
	#[arg(long)]
	no_footnotes: bool,

	/// Don't write a document with missing scenes
	#[arg(long)]
	strict: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	let mut src = DeserializableProject::from_file(&cli.project)?;

	let settings = &mut src.settings;
	if let Some(scenes) = cli.scenes {
		settings.scenes = Some(std::env::current_dir()?.join(scenes));
	}
	if !cli.tags.is_empty() {
		settings.tags = cli.tags;
	}
	settings.underline |= cli.underline;
	settings.strict |= cli.strict;
	if cli.no_footnotes {
		settings.footnotes = Some(false);
	}

	let mut project = src.into_project(project_dir(&cli.project))?;
	if let Some(output) = cli.output {
		project.output = output;
	}

	match project.write() {
		Ok(report) => {
			if !report.is_complete() {
				warn!(missing = report.missing_scenes.len(), "some scenes were left out");
			}
			println!("wrote file: {}", project.output.display());
			Ok(())
		},
		Err(e) => {
			error!("not writing rtf file");
			Err(e.into())
		}
	}
}
