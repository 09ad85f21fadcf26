use crate::chunk::{add_chunk, SIGNATURE};
use crate::zlib;
use crate::Error;
use rgb::{ComponentBytes, RGBA8};
use std::fs;
use std::io::Write;
use std::path::Path;

/// zlib effort for the IDAT stream. Icons are tiny, so always spend the maximum.
const COMPRESSION_LEVEL: u8 = 9;

/// Prefixes every scanline with the filter-type byte 0 ("no filter").
/// The pixel bytes themselves pass through untouched; this is framing the
/// IDAT stream requires, not a transformation.
pub(crate) fn filter_scanlines(image: &[u8], w: usize, h: usize) -> Vec<u8> {
    let row = w * 4;
    debug_assert_eq!(image.len(), row * h);
    let mut filtered = Vec::with_capacity(h * (1 + row));
    for line in image.chunks_exact(row) {
        filtered.push(0); /*filter type: None*/
        filtered.extend_from_slice(line);
    }
    filtered
}

fn add_chunk_ihdr(out: &mut Vec<u8>, w: u32, h: u32) -> Result<(), Error> {
    let mut header = [0u8; 13];
    header[0..4].copy_from_slice(&w.to_be_bytes());
    header[4..8].copy_from_slice(&h.to_be_bytes());
    header[8] = 8; /*bit depth*/
    header[9] = 6; /*color type: RGBA*/
    header[10] = 0; /*compression method*/
    header[11] = 0; /*filter method*/
    header[12] = 0; /*interlace method*/
    add_chunk(out, b"IHDR", &header)
}

fn add_chunk_idat(out: &mut Vec<u8>, filtered: &[u8]) -> Result<(), Error> {
    let mut compressed = Vec::new();
    zlib::compress_into(&mut compressed, filtered, COMPRESSION_LEVEL)?;
    add_chunk(out, b"IDAT", &compressed)
}

fn add_chunk_iend(out: &mut Vec<u8>) -> Result<(), Error> {
    add_chunk(out, b"IEND", &[])
}

/// Encodes the RGBA pixels as a complete PNG byte stream:
/// signature, IHDR, one IDAT, IEND.
pub fn encode(image: &[RGBA8], w: u32, h: u32) -> Result<Vec<u8>, Error> {
    if w == 0 || h == 0 {
        return Err(Error::ZeroDimension);
    }
    let expected = w as usize * h as usize;
    if image.len() != expected {
        return Err(Error::BufferSize { expected, got: image.len() });
    }
    let filtered = filter_scanlines(image.as_bytes(), w as usize, h as usize);

    let mut outv = Vec::new();
    outv.extend_from_slice(&SIGNATURE);
    add_chunk_ihdr(&mut outv, w, h)?;
    add_chunk_idat(&mut outv, &filtered)?;
    add_chunk_iend(&mut outv)?;
    Ok(outv)
}

/// Writes `buffer` to `path` through a sibling temp file and a rename, so a
/// failure never leaves a half-written file at the final path.
pub fn save_file(buffer: &[u8], path: &Path) -> Result<(), Error> {
    let tmp = path.with_extension("tmp");
    fs::File::create(&tmp)
        .and_then(|mut f| f.write_all(buffer))
        .and_then(|()| fs::rename(&tmp, path))
        .map_err(|e| {
            let _ = fs::remove_file(&tmp);
            Error::from(e)
        })
}
