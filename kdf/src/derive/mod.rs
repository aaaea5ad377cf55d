//! Batched multi-index key derivation
//!
//! One validated seed plus a [`DeriveConfig`] yields an ordered family of
//! keys, one per index, differentiated only by the per-index info string.

pub mod config;
pub mod core;
pub mod utils;

pub use config::{DeriveConfig, DEFAULT_LENGTH, DEFAULT_NAMESPACE, DEFAULT_SALT};
pub use core::{CtxDeriver, DerivedKeyRecord, MAX_BATCH_COUNT};
pub use utils::constant_time_compare;
