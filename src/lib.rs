//! rtc-support: shared support layer for browser WebRTC clients.
//!
//! # Architecture
//!
//! ```text
//! Signaling / peer connection code (out of scope)
//!   │
//!   ├── Logger ── LogSink
//!   │               ├── TracingSink (native)
//!   │               └── ConsoleSink (wasm)
//!   │
//!   └── Utilities
//!         ├── validate_id / validate_key
//!         ├── random_id / random_token
//!         ├── join_array_buffers / blob_to_array_buffer (wasm)
//!         └── is_secure / detect_browser / is_plan_b_safari
//!               └── HostEnvironment
//!                     ├── StaticEnvironment
//!                     └── BrowserEnvironment (wasm)
//! ```
//!
//! # Levels
//!
//! | Level | Rank | error | warn | log |
//! |-------|------|-------|------|-----|
//! | None | 0 | | | |
//! | Error | 1 | x | | |
//! | Warn | 2 | x | x | |
//! | Full | 3 | x | x | x |
//!
//! # Features
//!
//! - `native` - `tracing-subscriber` setup via [`logging::init_logging`]
//! - `wasm` - wasm-bindgen exports, console sink, FileReader blob decoding
//!
//! # Usage
//!
//! ```ignore
//! use rtc_support::{Logger, LogLevel, StaticEnvironment, is_plan_b_safari};
//!
//! let logger = Logger::default();
//! logger.set_level(LogLevel::Warn);
//! logger.warn("negotiation is slow");
//!
//! let env = StaticEnvironment::new().with_user_agent(ua);
//! if is_plan_b_safari(&env) { /* munge SDP */ }
//! ```

// =============================================================================
// Shared modules (compile everywhere)
// =============================================================================
pub mod config;
pub mod core;
pub mod error;

// =============================================================================
// Native-only modules
// =============================================================================
#[cfg(feature = "native")]
pub mod logging;

// =============================================================================
// WASM-only modules (browser, wasm-bindgen)
// =============================================================================
#[cfg(feature = "wasm")]
pub mod wasm;

// =============================================================================
// Re-exports: Shared
// =============================================================================
pub use config::LoggerConfig;
pub use crate::core::browser::{
    detect_browser, is_plan_b_safari, is_secure, is_secure_protocol, parse_user_agent,
    sdp_semantics, BrowserInfo, SdpSemantics,
};
pub use crate::core::buffer::join_array_buffers;
pub use crate::core::environment::{HostEnvironment, StaticEnvironment};
pub use crate::core::level::{LevelSpec, LogLevel};
pub use crate::core::logger::{Channel, LogSink, Logger, TracingSink, LOG_PREFIX};
pub use crate::core::random::{random_id, random_id_from, random_token, random_token_from};
pub use crate::core::validate::{validate_id, validate_key, Validation};
pub use error::{SupportError, SupportResult};

// =============================================================================
// Re-exports: WASM
// =============================================================================
#[cfg(feature = "wasm")]
pub use wasm::{blob_to_array_buffer, BrowserEnvironment, ConsoleSink};
