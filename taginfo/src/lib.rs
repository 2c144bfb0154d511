//! Read-only access to audio metadata.
//!
//! taginfo is the library half of the taginfo CLI. It puts a narrow interface in front of
//! [lofty](https://crates.io/crates/lofty) that only exposes what the CLI prints: a basic
//! tag, a key/value property map, the audio stream properties, and whether the file carries
//! one of the legacy ID3 tags.

#![forbid(unsafe_code)]

pub mod err;
pub mod file;
pub mod genre;
pub mod tag;

pub use err::{Error, Result};
pub use file::{LoftyFile, LoftyReader, MediaFile, TagReader};
pub use tag::{AudioProperties, BasicTag, PropertyMap};
