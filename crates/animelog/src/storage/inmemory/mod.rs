//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository trait
//! that stores all records in a HashMap wrapped in `Arc<RwLock<_>>`. It backs
//! the router tests and the `inmemory` feature for running without DynamoDB.

mod repository;

pub use repository::InMemoryRepository;
