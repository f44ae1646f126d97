//! Rewrite the metadata of RIFF/WAVE files
//!
//! Generic tag libraries store some INFO fields under identifiers that file property
//! inspectors don't recognize (the album as `DIRC` rather than `IPRD`, the track as `IPRT`
//! rather than `ITRK`). This crate owns the container instead: it walks the chunks of a WAVE
//! file, drops its INFO lists, and writes a single new one using the identifiers those
//! consumers expect. Every other chunk is carried over byte for byte.
//!
//! # Examples
//!
//! ## Rewriting the metadata
//!
//! ```rust,no_run
//! # fn main() -> riff_retag::error::Result<()> {
//! let mut metadata = riff_retag::read_metadata("foo.wav")?;
//! metadata.album = Some(String::from("Foo album"));
//! metadata.track = 3;
//!
//! riff_retag::rewrite_with_metadata("foo.wav", &metadata)?;
//! # Ok(()) }
//! ```
//!
//! ## Fixing a file saved by another library
//!
//! ```rust,no_run
//! # fn main() -> riff_retag::error::Result<()> {
//! // Renames `DIRC` to `IPRD` and `IPRT` to `ITRK`, without rebuilding the file.
//! // See the `patch` module for why this is only a fallback.
//! riff_retag::convert_identifiers_to_target_convention("foo.wav")?;
//! # Ok(()) }
//! ```
//!
//! ## Inspecting a file
//!
//! ```rust,no_run
//! # fn main() -> riff_retag::error::Result<()> {
//! let report = riff_retag::inspect_chunks("foo.wav")?;
//! println!("{report}");
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod inspect;
pub(crate) mod macros;
pub mod metadata;
pub mod patch;
pub mod rewrite;
pub mod riff;
mod util;

pub use crate::inspect::{ChunkReport, inspect_chunks};
pub use crate::metadata::{MetadataRecord, read_metadata, read_metadata_with_options};
pub use crate::patch::convert_identifiers_to_target_convention;
pub use crate::rewrite::{rewrite_with_metadata, rewrite_with_metadata_with_options};
