//! Subsequence resolution engine.
//!
//! ## How the parts work together
//!
//! ```text
//! text ── fields::parse ──────────────┐   (fields.rs)
//!          - split on ':' (1..=3)     │
//!          - grammar per field        │
//!                                     v
//!                      Resolver::resolve_into   (resolver.rs)
//!                        - settle step (default 1, reject 0)
//!                        - length 0 -> (0, 0, step)
//!                        - evaluate start/stop  (end_expr.rs)
//!                        - defaults, clamp or reject  (bounds.rs)
//!                                     │
//!                                     v
//!                              ResolvedSlice
//! ```
//!
//! ## Responsibilities by module
//!
//! - `fields.rs`: splits the text and checks every field against the
//!   grammar, producing unevaluated `Term`s.
//! - `end_expr.rs`: turns a `Term` into an integer for a given length and step
//!   sign, including the `end/d` adjustment for negative steps.
//! - `bounds.rs`: default extremes and the clamp/strict window shared by
//!   start and stop.
//! - `resolver.rs`: orders the steps above and reports each settled field.
//! - `trace.rs`: the per-field records behind the verbose API.
//!
//! ## Debugging
//!
//! Classified failures are emitted as `tracing` debug events and each
//! evaluated bound as a trace event. Run the CLI with `RUST_LOG=subseq=trace`
//! to see them.

#[path = "engine/bounds.rs"]
mod bounds;
#[path = "engine/end_expr.rs"]
mod end_expr;
#[path = "engine/fields.rs"]
mod fields;
#[path = "engine/resolver.rs"]
mod resolver;
#[path = "engine/trace.rs"]
mod trace;


pub use resolver::Resolver;
pub use trace::FieldStep;
