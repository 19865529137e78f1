//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Once;

pub use strata_optional::prelude::*;

static INIT_TRACING: Once = Once::new();

/// Route library events to the test writer so they show up in failing tests.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

/// Construction and drop counters shared by a family of [`Tracked`] values.
#[derive(Debug, Clone, Default)]
pub struct Counters {
    constructed: Rc<Cell<usize>>,
    dropped: Rc<Cell<usize>>,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a new tracked value, counting one construction.
    pub fn make(&self, id: u32) -> Tracked {
        self.constructed.set(self.constructed.get() + 1);
        Tracked {
            id,
            counters: self.clone(),
        }
    }

    pub fn constructed(&self) -> usize {
        self.constructed.get()
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Values constructed and not yet dropped.
    pub fn live(&self) -> usize {
        self.constructed() - self.dropped()
    }
}

/// A value that records every construction (including clones) and drop.
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    counters: Counters,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counters.make(self.id)
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.dropped.set(self.counters.dropped.get() + 1);
    }
}
