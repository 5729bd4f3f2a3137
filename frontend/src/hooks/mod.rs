pub mod use_language;

pub use use_language::*;
