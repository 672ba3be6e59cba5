#![doc(test(attr(deny(warnings))))]

//! Fintrack Core provides the recurrence scheduling and budget evaluation
//! primitives behind a personal finance tracker.

pub mod budget;
pub mod config;
pub mod errors;
pub mod format;
pub mod ledger;
pub mod schedule;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
