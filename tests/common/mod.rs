//! Shared helpers for integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use tracing_subscriber::EnvFilter;

/// Route `tracing` output through the test harness; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Iterator over a fixed list that records when it is dropped.
pub struct TrackedSource<T> {
    items: std::vec::IntoIter<T>,
    released: Rc<Cell<bool>>,
}

impl<T> TrackedSource<T> {
    /// Source over `items` plus the flag that flips on release.
    pub fn new(items: Vec<T>) -> (Self, Rc<Cell<bool>>) {
        let released = Rc::new(Cell::new(false));
        let source = Self {
            items: items.into_iter(),
            released: Rc::clone(&released),
        };
        (source, released)
    }
}

impl<T> Iterator for TrackedSource<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }
}

impl<T> Drop for TrackedSource<T> {
    fn drop(&mut self) {
        self.released.set(true);
    }
}
