pub mod json;

pub use json::{load_entries, read_entries, save_entries, write_entries};
