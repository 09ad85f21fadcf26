use crate::Error;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

pub(crate) fn new_compressor<W: Write>(outv: W, level: u8) -> ZlibEncoder<W> {
    let level = if level == 0 {
        Compression::none()
    } else {
        Compression::new(level.min(9).into())
    };
    ZlibEncoder::new(outv, level)
}

pub(crate) fn compress_into(out: &mut Vec<u8>, inp: &[u8], level: u8) -> Result<(), Error> {
    let mut z = new_compressor(out, level);
    z.write_all(inp)?;
    z.finish()?;
    Ok(())
}
