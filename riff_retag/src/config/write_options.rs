/// Options to control how riff_retag writes to a file
///
/// This is best used as an application global config that gets set once.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) atomic_replace: bool,
	pub(crate) preserve_timestamps: bool,
}

impl WriteOptions {
	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_retag::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			atomic_replace: true,
			preserve_timestamps: true,
		}
	}

	/// Whether to write through a temporary file that replaces the target
	///
	/// When enabled, the new contents are written to a temporary file in the same directory,
	/// which is then renamed over the original. A crash mid-write leaves the original untouched.
	///
	/// When disabled, the original file is truncated and rewritten in place.
	///
	/// Symlinks are followed, the file they point to is replaced. A read-only file is never
	/// replaced.
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_retag::config::WriteOptions;
	///
	/// // The file is a hard link I need to keep, write it in place
	/// let options = WriteOptions::new().atomic_replace(false);
	/// ```
	pub fn atomic_replace(mut self, atomic_replace: bool) -> Self {
		self.atomic_replace = atomic_replace;
		self
	}

	/// Whether to restore the file's access and modification times after writing
	///
	/// Editing metadata is not considered "touching" the file, so by default the original
	/// timestamps are put back once the write completes. On Windows, the creation time is
	/// restored too.
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_retag::config::WriteOptions;
	///
	/// // I want my file manager to show the file as recently modified
	/// let options = WriteOptions::new().preserve_timestamps(false);
	/// ```
	pub fn preserve_timestamps(mut self, preserve_timestamps: bool) -> Self {
		self.preserve_timestamps = preserve_timestamps;
		self
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	/// 	atomic_replace: true,
	/// 	preserve_timestamps: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
