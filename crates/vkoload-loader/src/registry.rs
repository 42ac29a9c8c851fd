//! Live-handle registry.
//!
//! Every open [`Library`](crate::Library) is recorded here until its handle
//! is released. Leak tests read it to verify that each load is balanced by
//! exactly one release.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);
static LIVE: Mutex<Vec<(u64, String)>> = Mutex::new(Vec::new());

pub(crate) fn register(name: &str) -> u64 {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    LIVE.lock().push((id, name.to_string()));
    id
}

pub(crate) fn retire(id: u64) {
    let mut live = LIVE.lock();
    if let Some(pos) = live.iter().position(|(entry, _)| *entry == id) {
        live.swap_remove(pos);
    }
}

/// Number of library handles currently open in this process.
#[must_use]
pub fn live_count() -> usize {
    LIVE.lock().len()
}

/// Names of the libraries currently open, in unspecified order.
#[must_use]
pub fn live_libraries() -> Vec<String> {
    LIVE.lock().iter().map(|(_, name)| name.clone()).collect()
}
