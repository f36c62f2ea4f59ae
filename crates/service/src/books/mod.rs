//! Book CRUD: the repository seam, the in-memory store behind it and the
//! string-outcome facade exposed to hosting layers.

pub mod repository;
pub mod store;
pub mod api;
