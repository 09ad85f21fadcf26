//! Generator for the extension's ring-style PNG icon assets.
//!
//! Rasterizes a concentric ring over a transparent square and writes it out
//! as a minimal standards-valid PNG (signature + IHDR + IDAT + IEND, RGBA8,
//! no interlacing, zero scanline filter). The output decodes with any PNG
//! library; the chunk reader in [`ChunkRef`]/[`ChunksIter`] exists so callers
//! and tests can verify the emitted structure without one.
//!
//! ```no_run
//! use icongen::RGB8;
//!
//! let navy = RGB8 { r: 10, g: 25, b: 47 };
//! let cyan = RGB8 { r: 100, g: 255, b: 218 };
//! let path = icongen::write_ring_icon("assets/icons".as_ref(), 48, navy, cyan)?;
//! # Ok::<(), icongen::Error>(())
//! ```

mod chunk;
mod crc32;
mod encoder;
mod error;
mod raster;
mod zlib;

pub use crate::chunk::{add_chunk, ChunkRef, ChunksIter, SIGNATURE};
pub use crate::crc32::crc32;
pub use crate::encoder::{encode, save_file};
pub use crate::error::Error;
pub use crate::raster::render_ring;
pub use rgb::{RGB8, RGBA8};

use std::fs;
use std::path::{Path, PathBuf};

/// Renders one ring icon and encodes it as PNG bytes.
pub fn encode_ring_icon(size: u32, background: RGB8, ring: RGB8) -> Result<Vec<u8>, Error> {
    let pixels = render_ring(size, background, ring)?;
    encode(&pixels, size, size)
}

/// Renders one ring icon and writes it to `dir/icon{size}.png`, creating the
/// directory if needed. Returns the path of the written file.
pub fn write_ring_icon(dir: &Path, size: u32, background: RGB8, ring: RGB8) -> Result<PathBuf, Error> {
    let png = encode_ring_icon(size, background, ring)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("icon{size}.png"));
    save_file(&png, &path)?;
    Ok(path)
}
