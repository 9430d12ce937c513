use uuid::{NoContext, Timestamp, Uuid};

/// Time-ordered opaque row id, generated here rather than by a server
/// sequence so inserts never round-trip for a key.
pub fn generate_id() -> String {
    Uuid::new_v7(Timestamp::now(NoContext)).to_string()
}
