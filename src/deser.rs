use std::io::{ErrorKind, Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::header::FormatHeader;
use crate::pair::Pair;
use crate::{Error, Result};

/// Encodes a pair as a [`FormatHeader`] followed by a bitcode payload.
pub fn to_bytes<F, S>(pair: &Pair<F, S>) -> Result<Vec<u8>>
where
    F: Serialize,
    S: Serialize,
{
    let payload = bitcode::serialize(pair)?;
    let mut data = Vec::with_capacity(FormatHeader::len_bytes() + payload.len());
    data.extend_from_slice(&FormatHeader::current().bytes());
    data.extend_from_slice(&payload);
    Ok(data)
}

/// Decodes a pair written by [`to_bytes`], verifying the version tag first.
pub fn from_bytes<F, S>(data: &[u8]) -> Result<Pair<F, S>>
where
    F: DeserializeOwned,
    S: DeserializeOwned,
{
    if data.len() < FormatHeader::len_bytes() {
        return Err(Error::TruncatedHeader);
    }
    let header = FormatHeader::from_bytes([data[0], data[1]]);
    if !header.is_compatible() {
        return Err(Error::UnsupportedVersion(header.version()));
    }
    Ok(bitcode::deserialize(&data[FormatHeader::len_bytes()..])?)
}

/// Writes a pair to `writer` in the same envelope as [`to_bytes`], with a
/// bincode payload suited for streaming.
pub fn write_pair<W, F, S>(mut writer: W, pair: &Pair<F, S>) -> Result<()>
where
    W: Write,
    F: Serialize,
    S: Serialize,
{
    writer.write_all(&FormatHeader::current().bytes())?;
    bincode::serialize_into(writer, pair)?;
    Ok(())
}

/// Reads back a pair written by [`write_pair`].
pub fn read_pair<R, F, S>(mut reader: R) -> Result<Pair<F, S>>
where
    R: Read,
    F: DeserializeOwned,
    S: DeserializeOwned,
{
    let mut bytes = [0u8; 2];
    reader.read_exact(&mut bytes).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            Error::TruncatedHeader
        } else {
            Error::Io(e)
        }
    })?;
    let header = FormatHeader::from_bytes(bytes);
    if !header.is_compatible() {
        return Err(Error::UnsupportedVersion(header.version()));
    }
    Ok(bincode::deserialize_from(reader)?)
}
