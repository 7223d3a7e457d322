pub mod export;
pub mod parser;
pub mod transcription;
