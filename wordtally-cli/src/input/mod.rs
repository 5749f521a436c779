//! Input handling module

pub mod file_reader;
pub mod glob_resolver;
pub mod prompt;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
pub use prompt::prompt_line;
