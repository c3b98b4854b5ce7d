pub mod lines;

pub use lines::{LineRef, line_count, lines_with_spans};
