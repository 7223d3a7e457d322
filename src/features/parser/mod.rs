pub mod batch;
pub mod line;

pub use batch::BatchProcessor;
pub use line::{LineParser, extract_glosses};
