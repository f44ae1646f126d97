//! RIFF container primitives
//!
//! A RIFF/WAVE file is a 12 byte header followed by a flat sequence of chunks:
//!
//! ```text
//! offset 0:  "RIFF"
//! offset 4:  u32 LE     // file length - 8
//! offset 8:  "WAVE"
//! offset 12: chunk*     // {id: 4, size: u32 LE, payload: size bytes, pad: 0-1 bytes}
//! ```

mod chunk;
mod cursor;
pub mod info;

pub use chunk::{
	ChunkHeader, Chunks, RIFF_CHUNK_HEADER_SIZE, RIFF_FILE_HEADER_SIZE, verify_riff, write_chunk,
};
pub use cursor::ChunkCursor;
