//! Minimal NBT (named binary tag) decoding.
//!
//! Scoreboard and playerdata files are gzip-compressed NBT documents.
//! This module decodes the tag tree into [`Tag`] values; extraction only
//! needs compound/list walking and a handful of typed getters.

pub mod encode;
mod reader;
mod tag;

pub use reader::{parse, read_file};
pub use tag::Tag;
