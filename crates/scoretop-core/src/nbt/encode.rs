//! Test-support NBT encoder.
//!
//! Production code never writes NBT; this exists so tests can synthesize
//! scoreboard and playerdata files without checked-in binary fixtures.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use super::Tag;

/// Encodes a root compound as an uncompressed NBT document.
pub fn to_bytes(root: &Tag) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(tag_id(root));
    write_string(&mut out, "");
    write_payload(&mut out, root);
    out
}

/// Encodes a root compound as a gzip-compressed NBT document, the way the
/// game stores scoreboard and playerdata files.
pub fn to_gzipped_bytes(root: &Tag) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&to_bytes(root))
        .and_then(|_| encoder.finish())
        .expect("writing to an in-memory buffer cannot fail")
}

fn tag_id(tag: &Tag) -> u8 {
    match tag {
        Tag::End => 0,
        Tag::Byte(_) => 1,
        Tag::Short(_) => 2,
        Tag::Int(_) => 3,
        Tag::Long(_) => 4,
        Tag::Float(_) => 5,
        Tag::Double(_) => 6,
        Tag::ByteArray(_) => 7,
        Tag::String(_) => 8,
        Tag::List(_) => 9,
        Tag::Compound(_) => 10,
        Tag::IntArray(_) => 11,
        Tag::LongArray(_) => 12,
    }
}

fn write_string(out: &mut Vec<u8>, value: &str) {
    out.extend_from_slice(&(value.len() as u16).to_be_bytes());
    out.extend_from_slice(value.as_bytes());
}

fn write_payload(out: &mut Vec<u8>, tag: &Tag) {
    match tag {
        Tag::End => {}
        Tag::Byte(v) => out.push(*v as u8),
        Tag::Short(v) => out.extend_from_slice(&v.to_be_bytes()),
        Tag::Int(v) => out.extend_from_slice(&v.to_be_bytes()),
        Tag::Long(v) => out.extend_from_slice(&v.to_be_bytes()),
        Tag::Float(v) => out.extend_from_slice(&v.to_bits().to_be_bytes()),
        Tag::Double(v) => out.extend_from_slice(&v.to_bits().to_be_bytes()),
        Tag::ByteArray(items) => {
            out.extend_from_slice(&(items.len() as i32).to_be_bytes());
            out.extend(items.iter().map(|&b| b as u8));
        }
        Tag::String(v) => write_string(out, v),
        Tag::List(items) => {
            let item_id = items.first().map(tag_id).unwrap_or(0);
            out.push(item_id);
            out.extend_from_slice(&(items.len() as i32).to_be_bytes());
            for item in items {
                write_payload(out, item);
            }
        }
        Tag::Compound(map) => {
            for (name, value) in map {
                out.push(tag_id(value));
                write_string(out, name);
                write_payload(out, value);
            }
            out.push(0);
        }
        Tag::IntArray(items) => {
            out.extend_from_slice(&(items.len() as i32).to_be_bytes());
            for item in items {
                out.extend_from_slice(&item.to_be_bytes());
            }
        }
        Tag::LongArray(items) => {
            out.extend_from_slice(&(items.len() as i32).to_be_bytes());
            for item in items {
                out.extend_from_slice(&item.to_be_bytes());
            }
        }
    }
}
