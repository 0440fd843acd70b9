pub mod fs;
pub mod oracle;
