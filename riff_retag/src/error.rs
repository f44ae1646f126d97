//! Contains the errors that can arise within riff_retag
//!
//! The primary error is [`RetagError`]. The type of error is determined by [`ErrorKind`].

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, RetagError>`
pub type Result<T> = std::result::Result<T, RetagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// File format related errors
	/// The data does not start with `RIFF <size> WAVE`
	NotARiffFile,

	// File data related errors
	/// A chunk header or declared payload runs past the end of the data
	TruncatedInput,
	/// Attempting to write an abnormally large amount of data
	///
	/// This occurs when an encoded chunk would not fit in its `u32` size field.
	TooMuchData,
	/// Errors that arise while decoding text with [`ParsingMode::Strict`](crate::config::ParsingMode::Strict)
	TextDecode(&'static str),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within riff_retag
pub struct RetagError {
	pub(crate) kind: ErrorKind,
}

impl RetagError {
	/// Create a `RetagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_retag::error::{ErrorKind, RetagError};
	///
	/// let not_riff = RetagError::new(ErrorKind::NotARiffFile);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_retag::error::{ErrorKind, RetagError};
	///
	/// let truncated = RetagError::new(ErrorKind::TruncatedInput);
	/// assert!(matches!(truncated.kind(), ErrorKind::TruncatedInput));
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for RetagError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for RetagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for RetagError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<tempfile::PersistError> for RetagError {
	fn from(input: tempfile::PersistError) -> Self {
		Self {
			kind: ErrorKind::Io(input.error),
		}
	}
}

impl Display for RetagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::NotARiffFile => write!(
				f,
				"Expected a RIFF/WAVE file, the header magic does not match"
			),
			ErrorKind::TextDecode(message) => write!(f, "Text decoding: {message}"),

			// Files
			ErrorKind::TruncatedInput => write!(
				f,
				"Encountered a chunk that runs past the end of the file"
			),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to write an abnormally large amount of data"
			),
		}
	}
}
