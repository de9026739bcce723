//! Read-side views over store snapshots.
//!
//! Everything here is a pure function: it recomputes from the snapshot it
//! is handed on every call and never mutates store state. Callers pass
//! `now` explicitly wherever "future" matters.

mod calendar;
mod dashboard;
mod portal;

pub use calendar::*;
pub use dashboard::*;
pub use portal::*;
