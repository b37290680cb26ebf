//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains (where applicable):
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching API responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `state.rs` — App-owned state containers with update methods
//! - `client.rs` — Sub-client with HTTP methods and caching

pub mod category;
pub mod chart;
pub mod coin;
pub mod converter;
pub mod pagination;
pub mod price;
pub mod trade;
pub mod trending;
