//! Object-lifetime tracking engine.
//!
//! Keeps one object table per instance and per device, resolves dispatch
//! keys to the scope that owns them, and answers the existence, parentage
//! and allocator questions the validation dispatcher asks on every call.

pub mod config;
pub mod error;
pub mod handle;
pub mod leak;
pub mod object_table;
pub mod report;
pub mod scope;
pub mod tracker;

pub use config::{LayerConfig, TeardownPolicy, TrackerConfig};
pub use error::CoreError;
pub use handle::{raw, ObjectKind, ScopeId, ScopeLevel};
pub use object_table::{ObjectRecord, ObjectTable, Origin};
pub use report::{CollectSink, Report, ReportSink, TracingSink, Violation, Vuid};
pub use scope::{Scope, ScopeRegistry};
pub use tracker::Tracker;
