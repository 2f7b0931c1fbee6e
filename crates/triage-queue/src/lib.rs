//! # triage-queue
//!
//! A mock clinic waiting room. [`InMemoryPatientQueue`] holds the patients
//! admitted through `POST /api/patients`; nothing is persisted, and a restart
//! returns the queue to its three seeded entries.

pub mod memory;
pub mod time_ago;

pub use memory::InMemoryPatientQueue;
pub use time_ago::time_ago;
