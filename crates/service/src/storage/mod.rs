//! Storage abstractions for service layer
//!
//! Contains the shared in-memory ordered map that entity stores build on.

pub mod ordered_map_store;
