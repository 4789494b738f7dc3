mod locator;
mod writer;

pub use locator::{find_constants_file, locate_output_file, OutputLocation};
pub use writer::write_atomically;
