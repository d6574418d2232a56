//! Time the placement and outline passes. Requires feature "instrumented" to be active.
//!
//! Spans are logged using [log] at the info level, so any logger will pick them up.

#[cfg(feature = "instrumented")]
use std::cell::RefCell;
#[cfg(feature = "instrumented")]
use std::time::Instant;

#[cfg(feature = "instrumented")]
use log::info;

#[cfg(feature = "instrumented")]
thread_local!(
    static INST_STACK: RefCell<Vec<(&'static str, Instant)>> = const { RefCell::new(Vec::new()) }
);

#[cfg(feature = "instrumented")]
pub fn inst(name: &'static str) {
    let now = Instant::now();
    info!("{} START", name);
    INST_STACK.with(|s| s.borrow_mut().push((name, now)));
}

/// Start an instrumented span with the given name.
#[cfg(not(feature = "instrumented"))]
pub fn inst(_name: &'static str) {}

#[cfg(feature = "instrumented")]
pub fn inst_end() {
    if let Some((name, prev)) = INST_STACK.with(|s| s.borrow_mut().pop()) {
        info!("{} END; Took {}μs", name, prev.elapsed().as_micros());
    }
}

/// Ends the last instrumentation span that was started, logging the time it took.
#[cfg(not(feature = "instrumented"))]
pub fn inst_end() {}

#[cfg(feature = "instrumented")]
pub fn evt(name: &str) {
    info!("{:?} {}", Instant::now(), name);
}

/// Log an event with the given name.
#[cfg(not(feature = "instrumented"))]
pub fn evt(_name: &str) {}
