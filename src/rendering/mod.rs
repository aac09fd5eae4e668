pub mod png_io;
pub mod ramp;

pub use png_io::{decode_png, encode_png, read_png, write_png};
pub use ramp::{render_ramp, SWATCH_GAP, SWATCH_SIZE};
