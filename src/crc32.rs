/* CRC polynomial: 0xedb88320 (reflected), as required by the PNG spec */

const fn make_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut c = i as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { 0xedb8_8320 ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[i] = c;
        i += 1;
    }
    table
}

static CRC32_TABLE: [u32; 256] = make_table();

/// Return the CRC of the bytes buf[0..len-1].
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
    let mut r = 4294967295u32;
    for &d in data {
        r = CRC32_TABLE[((r ^ u32::from(d)) & 255) as usize] ^ (r >> 8);
    }
    r ^ 4294967295
}
