// Start of file: /src/api/mod.rs

pub mod citations;
pub mod root;
pub mod status;

// End of file: /src/api/mod.rs
