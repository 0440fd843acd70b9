pub mod reader;
pub mod walker;
