pub mod block_quote;
pub mod callout;

pub use block_quote::BlockQuote;
pub use callout::{Callout, HeaderParts};
