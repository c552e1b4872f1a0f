//! Matching and replacement engine.
//!
//! This module is the entry point for the pure-logic core. Each concern lives
//! in a focused submodule under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! config entries ──┐
//!                  │  TriggerTable::new            (table.rs)
//!                  └────────────┬──────────────
//!                               │  SharedTable::snapshot (Arc)
//! key-down/key-up ──────────────┼─ KeystrokeGate        (gate.rs)
//!                               │    now / deferred / ignored
//!                               v
//!                     find_match (matcher.rs)
//!                       - policy gate
//!                       - room + exact key compare
//!                       - whitespace boundary
//!                       - first match wins
//!                               │
//!                               v
//!                     replace (replace.rs)
//!                       - stale-range check
//!                       - one-shot range replace, or delete + insert
//! ```
//!
//! ## Responsibilities by module
//!
//! - `table.rs`: the ordered rule table and its atomically swappable handle.
//! - `trigger.rs`: derives a rule's policy and markup flag from its key shape.
//! - `matcher.rs`: the first-match search over a collapsed-cursor context.
//! - `replace.rs`: the in-place substitution on a host edit surface.
//! - `gate.rs`: per-field keystroke state machine deciding when to check.
//! - `line_edit.rs`: the variant used by single-line boxes that report text
//!   after the edit was applied.
//! - `dedup.rs`: finds keys shadowed by an earlier identical key.
//! - `metrics.rs`: optional counters for a match pass.
//!
//! ## Debugging
//!
//! The engine logs through `tracing`; the CLI reads its filter from
//! `SYMBEX_LOG` (for example `SYMBEX_LOG=symbex=trace`).

#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/gate.rs"]
mod gate;
#[path = "engine/line_edit.rs"]
mod line_edit;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/replace.rs"]
mod replace;
#[path = "engine/table.rs"]
mod table;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use dedup::first_occurrences;
pub use dedup::Shadowed;
pub use gate::{CheckRequest, KeystrokeGate};
pub use line_edit::{LineEditReplacement, LineEditTrigger, check_line_edit};
pub use matcher::{find_match, find_match_with_metrics};
pub use metrics::MatchMetrics;
pub use replace::{ReplaceOutcome, replace};
pub use table::{SharedTable, TriggerTable};
pub use trigger::{KeyShape, SPECIAL_KEYS, classify_key};
