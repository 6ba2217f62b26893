//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types with their invariants
//! - `wire.rs` — Raw serde structs matching EDAN responses
//! - `convert.rs` — Mapping from wire structs onto domain types
//! - `client.rs` — Sub-client with one method per remote action

pub mod object_group;
pub mod object_list;
pub mod page;
