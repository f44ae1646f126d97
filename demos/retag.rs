#![allow(missing_docs)]

use riff_retag::config::{ParseOptions, ParsingMode, WriteOptions};
use riff_retag::patch::patch_file;

use structopt::StructOpt;

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(name = "retag", about = "Rewrite the INFO list of a WAVE file")]
enum Opt {
	/// List the chunks of a file
	Inspect {
		#[structopt(parse(from_os_str))]
		path: PathBuf,
	},
	/// Print the metadata of a file
	Show {
		/// Fail on malformed INFO lists
		#[structopt(long)]
		strict: bool,

		#[structopt(parse(from_os_str))]
		path: PathBuf,
	},
	/// Replace the metadata of a file
	Write {
		#[structopt(short, long)]
		title: Option<String>,

		#[structopt(short = "A", long)]
		album: Option<String>,

		#[structopt(short, long)]
		artist: Option<String>,

		#[structopt(short, long)]
		year: Option<u32>,

		#[structopt(short = "n", long)]
		track: Option<u32>,

		#[structopt(short, long)]
		comment: Option<String>,

		#[structopt(short, long)]
		genre: Option<String>,

		/// Update the file's modification time
		#[structopt(long)]
		touch: bool,

		#[structopt(parse(from_os_str))]
		path: PathBuf,
	},
	/// Rename `DIRC` and `IPRT` in place, without rebuilding the file
	FixIds {
		#[structopt(parse(from_os_str))]
		path: PathBuf,
	},
}

fn main() {
	env_logger::init();

	match Opt::from_args() {
		Opt::Inspect { path } => {
			let report = riff_retag::inspect_chunks(&path).expect("ERROR: Failed to read file!");
			print!("{report}");
		},
		Opt::Show { strict, path } => {
			let parsing_mode = if strict {
				ParsingMode::Strict
			} else {
				ParsingMode::BestAttempt
			};

			let metadata = riff_retag::read_metadata_with_options(
				&path,
				ParseOptions::new().parsing_mode(parsing_mode),
			)
			.expect("ERROR: Failed to read file!");

			println!("--- Metadata ---");
			println!("Title: {}", metadata.title.as_deref().unwrap_or("None"));
			println!("Album: {}", metadata.album.as_deref().unwrap_or("None"));
			println!("Artist: {}", metadata.artist.as_deref().unwrap_or("None"));
			println!("Year: {}", metadata.year);
			println!("Track: {}", metadata.track);
			println!("Comment: {}", metadata.comment.as_deref().unwrap_or("None"));
			println!("Genre: {}", metadata.genre.as_deref().unwrap_or("None"));
		},
		Opt::Write {
			title,
			album,
			artist,
			year,
			track,
			comment,
			genre,
			touch,
			path,
		} => {
			if title.is_none()
				&& album.is_none()
				&& artist.is_none()
				&& year.is_none()
				&& track.is_none()
				&& comment.is_none()
				&& genre.is_none()
			{
				eprintln!("ERROR: No options provided!");
				std::process::exit(1);
			}

			let mut metadata =
				riff_retag::read_metadata(&path).expect("ERROR: Failed to read file!");

			if title.is_some() {
				metadata.title = title;
			}
			if album.is_some() {
				metadata.album = album;
			}
			if artist.is_some() {
				metadata.artist = artist;
			}
			if let Some(year) = year {
				metadata.year = year;
			}
			if let Some(track) = track {
				metadata.track = track;
			}
			if comment.is_some() {
				metadata.comment = comment;
			}
			if genre.is_some() {
				metadata.genre = genre;
			}

			riff_retag::rewrite_with_metadata_with_options(
				&path,
				&metadata,
				WriteOptions::new().preserve_timestamps(!touch),
			)
			.expect("ERROR: Failed to write the file!");

			println!("INFO: Metadata successfully updated!");
		},
		Opt::FixIds { path } => {
			let replaced =
				patch_file(&path, WriteOptions::default()).expect("ERROR: Failed to patch file!");

			println!("INFO: Replaced {replaced} identifiers");
		},
	}
}
