//! Contact id generation.
//!
//! Ids are the creation time in milliseconds. Several ids requested within the
//! same millisecond get a `-<seq>` suffix, so `1718000000000`,
//! `1718000000000-1`, `1718000000000-2`. If the clock steps backwards the
//! generator stays on the last tick it saw and keeps counting.

use chrono::Utc;

#[derive(Debug, Default)]
pub struct IdGenerator {
    last_tick: i64,
    seq: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub(crate) fn next_at(&mut self, now_millis: i64) -> String {
        if now_millis > self.last_tick {
            self.last_tick = now_millis;
            self.seq = 0;
            return self.last_tick.to_string();
        }

        self.seq += 1;
        format!("{}-{}", self.last_tick, self.seq)
    }
}
