pub mod client;
pub mod summarizer;
