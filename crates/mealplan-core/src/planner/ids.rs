//! Unique id generation
//!
//! Ids are millisecond timestamps rendered as decimal strings. When the
//! clock has not moved on since the previous id, the previous id plus one is
//! used instead, so ids from one generator are strictly increasing.

use chrono::Utc;

/// 9999-12-31T23:59:59.999Z in milliseconds. Larger stored ids can't have
/// come from a clock and never collide with minted ones.
const LATEST_TIMESTAMP_ID: i64 = 253_402_300_799_999;

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh id
    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id.to_string()
    }

    /// Record an existing id so later ids never repeat it.
    /// Non-numeric ids and ids past [`LATEST_TIMESTAMP_ID`] are ignored.
    pub fn observe(&mut self, id: &str) {
        match id.parse::<i64>() {
            Ok(value) if value <= LATEST_TIMESTAMP_ID => self.last = self.last.max(value),
            _ => {}
        }
    }
}
