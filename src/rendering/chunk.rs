//! PNG chunk encoding: length, type tag, payload, CRC-32

use crate::{Error, Result};
use std::fmt;

/// A four byte ASCII chunk type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// CRC-32 (IEEE, as used by zlib and PNG) over the type tag followed by the payload.
///
/// The length field is never part of the checksum.
pub fn chunk_crc(chunk_type: ChunkType, payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type.as_bytes());
    hasher.update(payload);
    hasher.finalize()
}

/// Serialize one chunk as `length || type || payload || crc32`.
pub fn encode_chunk(chunk_type: ChunkType, payload: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(payload.len() + 12);
    write_chunk(&mut out, chunk_type, payload)?;
    Ok(out)
}

/// Append one serialized chunk to `out`.
pub fn write_chunk(out: &mut Vec<u8>, chunk_type: ChunkType, payload: &[u8]) -> Result<()> {
    let len = u32::try_from(payload.len()).map_err(|_| {
        Error::Encode(format!(
            "{} payload of {} bytes exceeds the 32-bit length field",
            chunk_type,
            payload.len()
        ))
    })?;

    log::debug!("chunk {} ({} bytes)", chunk_type, len);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(chunk_type.as_bytes());
    out.extend_from_slice(payload);
    out.extend_from_slice(&chunk_crc(chunk_type, payload).to_be_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Bit-at-a-time CRC-32, reflected polynomial 0xEDB88320
    fn reference_crc32(data: &[u8]) -> u32 {
        let mut crc = 0xffff_ffffu32;
        for byte in data {
            crc ^= *byte as u32;
            for _ in 0..8 {
                if crc & 1 != 0 {
                    crc = (crc >> 1) ^ 0xedb8_8320;
                } else {
                    crc >>= 1;
                }
            }
        }
        !crc
    }

    #[test]
    fn iend_matches_well_known_bytes() {
        let chunk = encode_chunk(ChunkType::IEND, &[]).unwrap();
        assert_eq!(
            chunk,
            vec![0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xae, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn ihdr_crc_matches_reference() {
        let payload = [0, 0, 0, 192, 0, 0, 0, 192, 8, 2, 0, 0, 0];
        let chunk = encode_chunk(ChunkType::IHDR, &payload).unwrap();

        assert_eq!(&chunk[0..4], &13u32.to_be_bytes());
        assert_eq!(&chunk[4..8], b"IHDR");
        assert_eq!(&chunk[8..21], &payload);

        let mut covered = b"IHDR".to_vec();
        covered.extend_from_slice(&payload);
        let crc = u32::from_be_bytes([chunk[21], chunk[22], chunk[23], chunk[24]]);
        assert_eq!(crc, reference_crc32(&covered));
    }

    #[test]
    fn crc_excludes_length_field() {
        let payload = b"abc";
        let with_len = {
            let mut v = 3u32.to_be_bytes().to_vec();
            v.extend_from_slice(b"IDAT");
            v.extend_from_slice(payload);
            reference_crc32(&v)
        };
        let crc = chunk_crc(ChunkType::IDAT, payload);
        assert_ne!(crc, with_len);
        assert_eq!(crc, reference_crc32(b"IDATabc"));
    }

    #[test]
    fn chunk_type_display() {
        assert_eq!(ChunkType::IDAT.to_string(), "IDAT");
    }
}
