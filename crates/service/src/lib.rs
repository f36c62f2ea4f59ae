//! Service layer owning the book collection.
//! - `storage` provides the generic ordered in-memory map.
//! - `books` builds the CRUD contract and the string-outcome facade on top of it.
//! - `runtime` wires configuration and logging to a fresh store.

pub mod errors;
pub mod storage;
pub mod books;
pub mod runtime;
