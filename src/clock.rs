//! Time and identifier source for a stamping run
//!
//! The [Clock] trait lets the orchestration read "now" and draw a fresh build
//! identifier without touching ambient process state, so tests can pin both.

use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

/// Source of the build timestamp and build identifier
pub trait Clock {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;

    /// A new identifier for this build
    fn build_id(&self) -> Uuid;
}

/// Host local time and random v4 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn build_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Always reports the same time and identifier
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: NaiveDateTime,
    pub id: Uuid,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime, id: Uuid) -> Self {
        FixedClock { now, id }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn build_id(&self) -> Uuid {
        self.id
    }
}
