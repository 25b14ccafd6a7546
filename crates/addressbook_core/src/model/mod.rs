//! Domain model for contacts and session state.
//!
//! # Responsibility
//! - Define canonical data structures used by command logic.
//! - Define the `Model` contract commands execute against.
//!
//! # Invariants
//! - An address book never holds two entries for the same person.
//! - User preferences are owned by the model, never held globally.

pub mod address_book;
pub mod model_manager;
pub mod person;
pub mod person_filter;
pub mod sample_data;
pub mod user_prefs;
