//! Platform-independent support: logger, validation, random ids, buffers,
//! browser detection. Compiles for native and wasm alike.

pub mod browser;
pub mod buffer;
pub mod environment;
pub mod level;
pub mod logger;
pub mod random;
pub mod validate;

mod parse;
