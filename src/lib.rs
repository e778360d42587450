//! Falltris (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `falltris::{core,engine,input,term,types}`.

pub use falltris_core as core;
pub use falltris_engine as engine;
pub use falltris_input as input;
pub use falltris_term as term;
pub use falltris_types as types;
