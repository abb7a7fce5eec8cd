//! Pieces shared by the binary and the server crate.

pub mod utils;
