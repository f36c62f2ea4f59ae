//! Domain entities for the book store.
//! - `book` holds the stored record, its input payload and their validation.
//! - `errors` holds the validation error shared with the service layer.

pub mod errors;
pub mod book;
