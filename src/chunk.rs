use crate::crc32::crc32;
use crate::Error;

/// 8 bytes PNG signature, aka the magic bytes
pub const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Appends one chunk to `out`: big-endian length, 4-letter name, payload,
/// then a big-endian CRC over the name and payload (never the length).
///
/// Refuses payloads the 32-bit length field cannot express rather than
/// truncating them.
pub fn add_chunk(out: &mut Vec<u8>, name: &[u8; 4], data: &[u8]) -> Result<(), Error> {
    if data.len() > u32::MAX as usize {
        return Err(Error::ChunkTooLarge(data.len()));
    }
    out.reserve(data.len() + 12);
    /*1: length*/
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    /*2: chunk name (4 letters)*/
    let crc_start = out.len();
    out.extend_from_slice(name);
    /*3: the data*/
    out.extend_from_slice(data);
    /*4: CRC (of the chunk name characters and the data)*/
    let crc = crc32(&out[crc_start..]);
    out.extend_from_slice(&crc.to_be_bytes());
    Ok(())
}

/// Borrowed view of one length/name/payload/CRC frame.
#[derive(Copy, Clone)]
pub struct ChunkRef<'a> {
    data: &'a [u8],
}

impl<'a> ChunkRef<'a> {
    /// `data` must start at the length field of a chunk.
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        if data.len() < 12 {
            return Err(Error::TruncatedChunk);
        }
        let len = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
        if data.len() - 12 < len {
            return Err(Error::TruncatedChunk);
        }
        Ok(Self { data: &data[..len + 12] })
    }

    /// Payload length in bytes, excluding the 12 bytes of framing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() - 12
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn name(&self) -> [u8; 4] {
        let mut name = [0u8; 4];
        name.copy_from_slice(&self.data[4..8]);
        name
    }

    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        &self.data[8..8 + self.len()]
    }

    /// The CRC stored in the frame, which may or may not be correct.
    #[must_use]
    pub fn crc(&self) -> u32 {
        let tail = &self.data[8 + self.len()..];
        u32::from_be_bytes([tail[0], tail[1], tail[2], tail[3]])
    }

    /// True if the stored CRC matches one freshly computed over name+payload.
    #[must_use]
    pub fn check_crc(&self) -> bool {
        self.crc() == crc32(&self.data[4..8 + self.len()])
    }
}

/// Walks the chunks of a PNG byte stream. Start it just past [`SIGNATURE`].
pub struct ChunksIter<'a> {
    data: &'a [u8],
}

impl<'a> ChunksIter<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl<'a> Iterator for ChunksIter<'a> {
    type Item = Result<ChunkRef<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.data.is_empty() {
            return None;
        }
        let ch = match ChunkRef::new(self.data) {
            Ok(ch) => ch,
            Err(e) => {
                self.data = &[];
                return Some(Err(e));
            }
        };
        self.data = &self.data[ch.len() + 12..];
        Some(Ok(ch))
    }
}
