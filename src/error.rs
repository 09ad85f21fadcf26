use std::error;
use std::fmt;
use std::io;

/// Everything that can go wrong while rasterizing or writing an icon.
pub enum Error {
    /// A requested icon dimension was zero
    ZeroDimension,
    /// The pixel buffer does not match the stated dimensions
    BufferSize { expected: usize, got: usize },
    /// A chunk payload longer than its 32-bit length field can express
    ChunkTooLarge(usize),
    /// Chunk framing ran past the end of the byte stream
    TruncatedChunk,
    /// File or compressor I/O failed
    Io(io::Error),
}

impl Error {
    /// Returns an English description of the error.
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::ZeroDimension => "invalid dimension: icon size must be at least one pixel",
            Error::BufferSize { .. } => "pixel buffer length does not match width*height",
            Error::ChunkTooLarge(_) => "chunk payload exceeds the 32-bit length field",
            Error::TruncatedChunk => "chunk is truncated or has a malformed length",
            Error::Io(_) => "i/o error",
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferSize { expected, got } => {
                write!(f, "{} ({} pixels, expected {})", self.as_str(), got, expected)
            }
            Error::ChunkTooLarge(len) => write!(f, "{} ({} bytes)", self.as_str(), len),
            Error::Io(e) => write!(f, "{}: {}", self.as_str(), e),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}
