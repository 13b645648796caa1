//! # Tracing Setup
//!
//! Structured logging for every actor and client. Actors emit lifecycle events
//! (`Actor started`, `Created`, `Action ok`, `Action failed`, `Shutdown`) tagged with
//! `entity_type` and `id`; clients open an `instrument` span per call.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per state change
//! RUST_LOG=debug cargo run     # request payloads as well
//! ```
//!
//! With `RUST_LOG=info` a cart flow reads:
//!
//! ```text
//! INFO Actor started entity_type="Ledger"
//! INFO Created entity_type="Ledger" id=ledger_1 size=1
//! INFO cart_flow:add_item: Action ok entity_type="Ledger" id=ledger_1
//! WARN cart_flow:update_item: Action failed entity_type="Ledger" id=ledger_1 error=Quantity selected is more than the available quantity
//! ```

/// Installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .try_init();
}
