// strgen shared type definitions
// Each submodule defines types used across the library and the binaries.

pub mod charset;
pub mod errors;
pub mod history;
pub mod notification;
pub mod settings;
