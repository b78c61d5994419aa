//! Core domain for animelog.
//!
//! Pure data types and storage contracts shared by the server and its
//! storage backends. Nothing in this crate performs I/O.

pub mod anime;
pub mod serde;
pub mod storage;
