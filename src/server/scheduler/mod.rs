//! One-shot delayed background jobs.

pub mod deletion;
