pub mod analyzer;
pub mod lexicon;
pub mod store;

pub use analyzer::analyze_text;
pub use store::JournalStore;
