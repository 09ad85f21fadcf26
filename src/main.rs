//! One-shot icon generation for the extension build.
//!
//! Usage: `icongen [output-dir]` (defaults to `assets/icons`).

use icongen::RGB8;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

const SIZES: [u32; 3] = [16, 48, 128];
/// #0a192f, dark blue
const BACKGROUND: RGB8 = RGB8 { r: 10, g: 25, b: 47 };
/// #64ffda, cyan
const RING: RGB8 = RGB8 { r: 100, g: 255, b: 218 };

fn main() -> ExitCode {
    let out_dir = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets/icons"));

    // One bad size must not stop the others from being written.
    let mut failed = false;
    for size in SIZES {
        match icongen::write_ring_icon(&out_dir, size, BACKGROUND, RING) {
            Ok(path) => println!("Created {}", path.display()),
            Err(e) => {
                eprintln!("icon{size}.png: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        println!("Icons generated successfully!");
        ExitCode::SUCCESS
    }
}
