// Start of file: /src/config/mod.rs

/*
* Re-export submodules related to configuration, credentials and app state.
*/

pub mod credentials;
pub mod environment;
pub mod state;

// End of file: /src/config/mod.rs
