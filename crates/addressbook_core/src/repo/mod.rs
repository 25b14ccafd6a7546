//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define snapshot-oriented data access contracts for the address book.
//! - Isolate SQLite query details from storage/logic orchestration.
//!
//! # Invariants
//! - Every value read back is re-validated through the person field types.

pub mod person_repo;
