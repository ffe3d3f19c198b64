use std::borrow::Cow;
use std::fmt;

use parking_lot::Mutex;
use tracing::error;

use crate::handle::{ObjectKind, ScopeId};

/// Diagnostic identifier attached to a violation.
///
/// `Undefined` means the rule has no assigned identifier: the condition is
/// still detected and still contributes to the skip verdict.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Vuid {
    Undefined,
    Id(Cow<'static, str>),
}

impl Vuid {
    pub const fn new(id: &'static str) -> Self {
        Vuid::Id(Cow::Borrowed(id))
    }

    pub fn owned(id: String) -> Self {
        Vuid::Id(Cow::Owned(id))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Vuid::Undefined)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Vuid::Undefined => "VUID_Undefined",
            Vuid::Id(id) => id,
        }
    }
}

impl fmt::Display for Vuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for Vuid {
    fn from(id: &'static str) -> Self {
        Vuid::new(id)
    }
}

/// Detected condition classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Non-null handle with no live record in the expected scope.
    NotFound,
    /// Null handle where the call site requires one.
    NullNotAllowed,
    /// Handle is live, but under a different parent than the call requires.
    WrongParent,
    /// Destroyed with an allocator pattern that differs from creation.
    AllocatorMismatch,
    /// Still live when its scope was torn down.
    StillInUse,
}

/// One violation, as delivered to a [`ReportSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub violation: Violation,
    pub vuid: Vuid,
    pub kind: ObjectKind,
    pub handle: u64,
    pub scope: Option<ScopeId>,
    /// Argument path the handle was found at, e.g. `pSubmits[0].pWaitSemaphores[1]`.
    pub location: Option<String>,
}

impl Report {
    pub fn new(violation: Violation, vuid: Vuid, kind: ObjectKind, handle: u64) -> Self {
        Self {
            violation,
            vuid,
            kind,
            handle,
            scope: None,
            location: None,
        }
    }

    pub fn in_scope(mut self, scope: ScopeId) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn at(mut self, location: Option<&str>) -> Self {
        self.location = location.map(str::to_owned);
        self
    }

    /// Human-readable context for the sink.
    pub fn message(&self) -> String {
        let what = match self.violation {
            Violation::NotFound => format!("Invalid {} Object {:#x}.", self.kind, self.handle),
            Violation::NullNotAllowed => format!("{} handle must not be VK_NULL_HANDLE.", self.kind),
            Violation::WrongParent => format!(
                "{} Object {:#x} was not created, allocated or retrieved from the correct parent.",
                self.kind, self.handle
            ),
            Violation::AllocatorMismatch => format!(
                "{} Object {:#x} destroyed with an allocator that does not match its creation.",
                self.kind, self.handle
            ),
            Violation::StillInUse => format!(
                "{} Object {:#x} has not been destroyed.",
                self.kind, self.handle
            ),
        };
        match &self.location {
            Some(location) => format!("{location}: {what}"),
            None => what,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.vuid, self.message())
    }
}

/// Receives violations as they are detected.
pub trait ReportSink: Send + Sync {
    fn report(&self, report: Report);
}

/// Default sink: one `error!` event per violation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&self, report: Report) {
        error!(
            vuid = %report.vuid,
            violation = ?report.violation,
            kind = %report.kind,
            handle = format_args!("{:#x}", report.handle),
            "{}",
            report.message()
        );
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    reports: Mutex<Vec<Report>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().clone()
    }

    /// Remove and return everything collected so far.
    pub fn take(&self) -> Vec<Report> {
        std::mem::take(&mut *self.reports.lock())
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, violation: Violation) -> usize {
        self.reports
            .lock()
            .iter()
            .filter(|r| r.violation == violation)
            .count()
    }

    pub fn has_vuid(&self, vuid: &str) -> bool {
        self.reports.lock().iter().any(|r| r.vuid.as_str() == vuid)
    }
}

impl ReportSink for CollectSink {
    fn report(&self, report: Report) {
        self.reports.lock().push(report);
    }
}
