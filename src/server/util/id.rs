//! Row id generation.
//!
//! All tables use UUIDv7 string primary keys: opaque, time-ordered, and safe
//! to generate application-side without a round trip to the database.

/// Generates a fresh UUIDv7 row id.
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
