//! HTTP integration tests
//!
//! Every test builds its own in-memory app and drives it with `oneshot`.

#[macro_use]
#[path = "../common/mod.rs"]
mod common;
