use chrono::Utc;

/// Millisecond epoch timestamp, the unit every persisted `createdAt` /
/// `updatedAt` field uses.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn now_secs() -> usize {
    Utc::now().timestamp() as usize
}
