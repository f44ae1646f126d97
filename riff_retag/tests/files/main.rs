#![allow(missing_docs)]

mod inspect;
mod metadata;
mod patch;
mod rewrite;
pub(crate) mod util;
