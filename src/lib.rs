//! strgen — random string generator with selectable character sets.
//!
//! The library exposes the character-set registry, the generation engine,
//! the capped history log and its durable store backends, for use by the
//! binaries and integration tests.

pub mod app;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
