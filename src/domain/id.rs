//! Week id generation

use chrono::Utc;
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Source of fresh week ids
pub trait IdGenerator {
    /// Produce the next id
    fn next_id(&mut self) -> String;

    /// Called with every id already in the collection when a store opens
    fn observe(&mut self, _existing: &str) {}
}

/// Millisecond wall-clock ids, bumped so they never repeat within one generator
#[derive(Debug, Default, Clone)]
pub struct TimestampIdGenerator {
    last: i64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for a clock reading of `now_millis`.
    ///
    /// Once the counter has reached `i64::MAX` there is no larger timestamp
    /// to hand out, so a UUID is issued instead.
    pub fn next_at(&mut self, now_millis: i64) -> String {
        let id = if now_millis > self.last {
            now_millis
        } else {
            match self.last.checked_add(1) {
                Some(next) => next,
                None => {
                    warn!("timestamp ids exhausted at {}; issuing a uuid", self.last);
                    return Uuid::new_v4().to_string();
                }
            }
        };
        self.last = id;
        id.to_string()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn observe(&mut self, existing: &str) {
        // Non-numeric ids (e.g. uuids from another strategy) do not constrain us
        if let Ok(value) = existing.parse::<i64>() {
            self.last = self.last.max(value);
        }
    }
}

/// Random UUID v4 ids
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Which generator a word pond uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Millisecond timestamps (e.g. "1700000000000")
    #[default]
    Timestamp,
    /// Random UUID v4
    Uuid,
}

impl IdStrategy {
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Timestamp => Box::new(TimestampIdGenerator::new()),
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Timestamp => "timestamp",
            IdStrategy::Uuid => "uuid",
        }
    }
}

impl IdGenerator for Box<dyn IdGenerator> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }

    fn observe(&mut self, existing: &str) {
        (**self).observe(existing)
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timestamp" => Ok(IdStrategy::Timestamp),
            "uuid" => Ok(IdStrategy::Uuid),
            _ => Err(format!(
                "Invalid id strategy: '{}'. Valid strategies are: timestamp, uuid",
                s
            )),
        }
    }
}
