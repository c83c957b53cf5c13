use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use super::Tag;
use crate::error::{Error, Result};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Nesting limit; deeper trees indicate a corrupt file.
const MAX_DEPTH: usize = 64;

/// Reads an NBT file from disk, inflating it first when gzip-compressed.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Tag> {
    let raw = fs::read(path)?;
    if raw.starts_with(&GZIP_MAGIC) {
        let mut inflated = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut inflated)?;
        parse(&inflated)
    } else {
        parse(&raw)
    }
}

/// Parses an uncompressed NBT document and returns the root compound.
pub fn parse(data: &[u8]) -> Result<Tag> {
    let mut reader = TagReader::new(data);
    let id = reader.read_u8()?;
    if id != 10 {
        return Err(Error::Nbt(format!("root tag id {} is not a compound", id)));
    }
    // Root name is present in the encoding but carries no information.
    reader.read_string()?;
    reader.read_payload(id, 0)
}

/// Position-tracking big-endian reader over an NBT byte buffer.
struct TagReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TagReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(count)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| Error::Nbt(format!("truncated document at byte {}", self.pos)))?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn read_i16(&mut self) -> Result<i16> {
        let b = self.take(2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    fn read_i32(&mut self) -> Result<i32> {
        let b = self.take(4)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn read_i64(&mut self) -> Result<i64> {
        let b = self.take(8)?;
        Ok(i64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_i32()? as u32))
    }

    fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_i64()? as u64))
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let start = self.pos;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::Nbt(format!("invalid string at byte {}: {}", start, e)))
    }

    /// Length prefix for arrays and lists.
    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(Error::Nbt(format!("negative length {}", len)));
        }
        Ok(len as usize)
    }

    fn read_payload(&mut self, id: u8, depth: usize) -> Result<Tag> {
        if depth > MAX_DEPTH {
            return Err(Error::Nbt("tag nesting too deep".to_string()));
        }
        match id {
            0 => Ok(Tag::End),
            1 => Ok(Tag::Byte(self.read_i8()?)),
            2 => Ok(Tag::Short(self.read_i16()?)),
            3 => Ok(Tag::Int(self.read_i32()?)),
            4 => Ok(Tag::Long(self.read_i64()?)),
            5 => Ok(Tag::Float(self.read_f32()?)),
            6 => Ok(Tag::Double(self.read_f64()?)),
            7 => {
                let len = self.read_len()?;
                let bytes = self.take(len)?;
                Ok(Tag::ByteArray(bytes.iter().map(|&b| b as i8).collect()))
            }
            8 => Ok(Tag::String(self.read_string()?)),
            9 => {
                let item_id = self.read_u8()?;
                let len = self.read_len()?;
                let mut items = Vec::with_capacity(len.min(4096));
                for _ in 0..len {
                    items.push(self.read_payload(item_id, depth + 1)?);
                }
                Ok(Tag::List(items))
            }
            10 => {
                let mut map = HashMap::new();
                loop {
                    let child_id = self.read_u8()?;
                    if child_id == 0 {
                        break;
                    }
                    let name = self.read_string()?;
                    let value = self.read_payload(child_id, depth + 1)?;
                    map.insert(name, value);
                }
                Ok(Tag::Compound(map))
            }
            11 => {
                let len = self.read_len()?;
                let mut items = Vec::with_capacity(len.min(4096));
                for _ in 0..len {
                    items.push(self.read_i32()?);
                }
                Ok(Tag::IntArray(items))
            }
            12 => {
                let len = self.read_len()?;
                let mut items = Vec::with_capacity(len.min(4096));
                for _ in 0..len {
                    items.push(self.read_i64()?);
                }
                Ok(Tag::LongArray(items))
            }
            other => Err(Error::Nbt(format!("unknown tag id {}", other))),
        }
    }
}
