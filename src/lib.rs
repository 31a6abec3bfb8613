#![doc(test(attr(deny(warnings))))]

//! Report Core offers the financial reporting aggregation primitives that
//! power the storefront back-office reporting screens: range projection,
//! weekly/monthly bucketing, summary aggregation, and chart series building.

pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Report Core tracing initialized.");
    });
}
