//! Network layer: REST helpers and wire types.

pub mod api;
pub mod types;
