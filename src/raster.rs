use crate::Error;
use rgb::{RGB8, RGBA8};

/// Outer ring radius, as a fraction of the icon size.
const OUTER_RADIUS: f64 = 0.4;
/// Inner fill radius, as a fraction of the icon size.
const INNER_RADIUS: f64 = 0.25;

/// Rasterizes the ring-on-transparent icon design at `size`×`size` pixels.
///
/// Pixels at distance d from the center `(size/2, size/2)` get the ring color
/// when `inner <= d <= outer`, the background color when `d < inner`, and are
/// fully transparent past the outer radius. Pixels exactly on the inner
/// boundary count as ring, not fill. There is no anti-aliasing; every pixel
/// is one of the three cases, with alpha either 0 or 255.
pub fn render_ring(size: u32, background: RGB8, ring: RGB8) -> Result<Vec<RGBA8>, Error> {
    if size == 0 {
        return Err(Error::ZeroDimension);
    }
    let center = f64::from(size) / 2.;
    let outer = f64::from(size) * OUTER_RADIUS;
    let inner = f64::from(size) * INNER_RADIUS;

    let mut pixels = Vec::with_capacity(size as usize * size as usize);
    for y in 0..size {
        for x in 0..size {
            let dx = f64::from(x) - center;
            let dy = f64::from(y) - center;
            let dist = (dx * dx + dy * dy).sqrt();
            let px = if dist <= outer && dist >= inner {
                ring.alpha(255)
            } else if dist < inner {
                background.alpha(255)
            } else {
                RGBA8::new(0, 0, 0, 0)
            };
            pixels.push(px);
        }
    }
    Ok(pixels)
}
