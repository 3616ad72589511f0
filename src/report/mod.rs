//! Report renderers for scan results.
//!
//! - [`terminal`] — colored summary box, per-platform table, guidance and
//!   alerts; respects `--verbose` / `--quiet`.
//!
//! JSON output is the serialized [`ScanReport`](crate::models::ScanReport)
//! and needs no renderer of its own.

pub mod terminal;
