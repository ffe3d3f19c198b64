//! Per-entry-point validation descriptors.
//!
//! Each intercepted command is described once: which dispatchable handle it
//! runs against, which handle parameters it must validate (with their
//! diagnostic identifiers), and which objects it creates, retrieves or
//! destroys. The dispatcher interprets these descriptors; nothing here
//! touches tracker state.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::warn;
use vkot_common::Platform;
use vkot_core::{ObjectKind, Origin, Vuid};

use crate::call::ArgPath;
use crate::command::Command;
use crate::entry_points;

/// The primary dispatchable parameter of a command.
#[derive(Debug, Clone)]
pub struct DispatchParam {
    pub kind: ObjectKind,
    pub name: &'static str,
    pub vuid: Vuid,
}

/// How the object type of a handle parameter is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Fixed(ObjectKind),
    /// Untyped 64-bit handle whose `VkObjectType` is carried by the named
    /// sibling field.
    TaggedBy(&'static str),
    /// As `TaggedBy`, with a `VkDebugReportObjectTypeEXT` tag.
    ReportTaggedBy(&'static str),
}

#[derive(Debug, Clone)]
pub struct HandleParam {
    pub path: ArgPath,
    pub kind: ParamKind,
    pub null_ok: bool,
    /// Struct type the handle lives in, for nested parameters.
    pub owner: Option<&'static str>,
    /// Handle must have been produced from the handle at this path.
    pub pool: Option<ArgPath>,
    pub vuid: Vuid,
    pub parent_vuid: Vuid,
    pub pool_vuid: Vuid,
    vuid_override: Option<Vuid>,
    parent_vuid_override: Option<Vuid>,
}

impl HandleParam {
    pub fn new(path: &'static str, kind: ObjectKind) -> Self {
        Self::with_kind(path, ParamKind::Fixed(kind))
    }

    /// An untyped handle typed at run time by `type_field`.
    pub fn tagged(path: &'static str, type_field: &'static str) -> Self {
        Self::with_kind(path, ParamKind::TaggedBy(type_field))
    }

    /// An untyped handle typed by a debug-report object type field.
    pub fn report_tagged(path: &'static str, type_field: &'static str) -> Self {
        Self::with_kind(path, ParamKind::ReportTaggedBy(type_field))
    }

    fn with_kind(path: &'static str, kind: ParamKind) -> Self {
        Self {
            path: ArgPath::parse(path),
            kind,
            null_ok: false,
            owner: None,
            pool: None,
            vuid: Vuid::Undefined,
            parent_vuid: Vuid::Undefined,
            pool_vuid: Vuid::Undefined,
            vuid_override: None,
            parent_vuid_override: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.null_ok = true;
        self
    }

    pub fn owner(mut self, owner: &'static str) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn vuid(mut self, vuid: impl Into<Vuid>) -> Self {
        self.vuid_override = Some(vuid.into());
        self
    }

    pub fn parent_vuid(mut self, vuid: impl Into<Vuid>) -> Self {
        self.parent_vuid_override = Some(vuid.into());
        self
    }

    pub fn from_pool(mut self, pool: &'static str, vuid: &'static str) -> Self {
        self.pool = Some(ArgPath::parse(pool));
        self.pool_vuid = Vuid::new(vuid);
        self
    }

    /// Resolve identifiers not given explicitly:
    /// `VUID-{owner}-{field}-parameter`, and `VUID-{owner}-commonparent` or
    /// `VUID-{command}-{field}-parent` for the parent rule.
    fn seal(&mut self, command: Command, common_parent: bool) {
        let owner = self.owner.unwrap_or(command.name());
        let field = self.path.field();
        self.vuid = self
            .vuid_override
            .take()
            .unwrap_or_else(|| Vuid::owned(format!("VUID-{owner}-{field}-parameter")));
        self.parent_vuid = match self.parent_vuid_override.take() {
            Some(vuid) => vuid,
            None if common_parent => Vuid::owned(format!("VUID-{owner}-commonparent")),
            None if self.owner.is_none() => Vuid::owned(format!("VUID-{owner}-{field}-parent")),
            None => Vuid::Undefined,
        };
    }
}

/// Where a new object's parent handle comes from.
#[derive(Debug, Clone)]
pub enum ParentRef {
    /// The command's dispatchable handle.
    Dispatch,
    Arg(ArgPath),
}

#[derive(Debug, Clone)]
pub struct CreateTarget {
    pub path: ArgPath,
    pub kind: ObjectKind,
    pub parent: Option<ParentRef>,
    pub origin: Origin,
    /// Record every non-null output slot even when the call failed
    /// (pipeline creation may succeed for a subset of its create infos).
    pub partial: bool,
}

#[derive(Debug, Clone)]
pub struct DestroyTarget {
    /// `None` destroys the dispatchable handle itself.
    pub path: Option<ArgPath>,
    pub kind: ObjectKind,
    pub vuid_custom_allocator: Vuid,
    pub vuid_default_allocator: Vuid,
    /// Bulk frees carry no allocator.
    pub check_allocator: bool,
}

/// Releases every child of a pool without destroying the pool.
#[derive(Debug, Clone)]
pub struct ResetTarget {
    pub pool: ArgPath,
    pub kind: ObjectKind,
}

/// Commands that create or end a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeEvent {
    CreateInstance,
    DestroyInstance,
    CreateDevice,
    DestroyDevice,
}

#[derive(Debug, Clone)]
pub struct EntryPoint {
    pub command: Command,
    pub dispatch: Option<DispatchParam>,
    pub params: Vec<HandleParam>,
    /// All handles of the call must share a parent.
    pub common_parent: bool,
    pub creates: Vec<CreateTarget>,
    pub destroys: Vec<DestroyTarget>,
    pub resets: Vec<ResetTarget>,
    pub scope_event: Option<ScopeEvent>,
    pub platform: Option<Platform>,
}

impl EntryPoint {
    fn base(command: Command, dispatch: Option<(ObjectKind, &'static str)>) -> Self {
        Self {
            command,
            dispatch: dispatch.map(|(kind, name)| DispatchParam {
                kind,
                name,
                vuid: Vuid::owned(format!("VUID-{}-{}-parameter", command.name(), name)),
            }),
            params: Vec::new(),
            common_parent: false,
            creates: Vec::new(),
            destroys: Vec::new(),
            resets: Vec::new(),
            scope_event: None,
            platform: None,
        }
    }

    pub fn global(command: Command) -> Self {
        Self::base(command, None)
    }

    pub fn instance(command: Command) -> Self {
        Self::base(command, Some((ObjectKind::Instance, "instance")))
    }

    pub fn physical_device(command: Command) -> Self {
        Self::base(command, Some((ObjectKind::PhysicalDevice, "physicalDevice")))
    }

    pub fn device(command: Command) -> Self {
        Self::base(command, Some((ObjectKind::Device, "device")))
    }

    pub fn queue(command: Command) -> Self {
        Self::base(command, Some((ObjectKind::Queue, "queue")))
    }

    pub fn command_buffer(command: Command) -> Self {
        Self::base(command, Some((ObjectKind::CommandBuffer, "commandBuffer")))
    }

    // ── Parameters ──────────────────────────────────────────

    pub fn param(mut self, param: HandleParam) -> Self {
        self.params.push(param);
        self
    }

    /// Required top-level handle.
    pub fn handle(self, path: &'static str, kind: ObjectKind) -> Self {
        self.param(HandleParam::new(path, kind))
    }

    /// Top-level handle that may be VK_NULL_HANDLE.
    pub fn optional(self, path: &'static str, kind: ObjectKind) -> Self {
        self.param(HandleParam::new(path, kind).optional())
    }

    /// Required handle inside a parameter struct of type `owner`.
    pub fn nested(self, owner: &'static str, path: &'static str, kind: ObjectKind) -> Self {
        self.param(HandleParam::new(path, kind).owner(owner))
    }

    pub fn nested_optional(self, owner: &'static str, path: &'static str, kind: ObjectKind) -> Self {
        self.param(HandleParam::new(path, kind).owner(owner).optional())
    }

    pub fn common_parent(mut self) -> Self {
        self.common_parent = true;
        self
    }

    // ── Effects ─────────────────────────────────────────────

    fn output(mut self, path: &'static str, kind: ObjectKind, parent: Option<ParentRef>, origin: Origin) -> Self {
        self.creates.push(CreateTarget {
            path: ArgPath::parse(path),
            kind,
            parent,
            origin,
            partial: false,
        });
        self
    }

    pub fn creates(self, path: &'static str, kind: ObjectKind) -> Self {
        self.output(path, kind, None, Origin::Created)
    }

    /// Pipelines: successfully created slots are recorded even on failure.
    pub fn creates_partial(mut self, path: &'static str, kind: ObjectKind) -> Self {
        self = self.creates(path, kind);
        if let Some(target) = self.creates.last_mut() {
            target.partial = true;
        }
        self
    }

    /// Objects allocated from the pool or parent at `parent`.
    pub fn creates_child(self, path: &'static str, kind: ObjectKind, parent: &'static str) -> Self {
        self.output(path, kind, Some(ParentRef::Arg(ArgPath::parse(parent))), Origin::Created)
    }

    /// Objects handed out by the implementation, owned by the dispatchable.
    pub fn retrieves(self, path: &'static str, kind: ObjectKind) -> Self {
        self.output(path, kind, Some(ParentRef::Dispatch), Origin::Retrieved)
    }

    pub fn retrieves_child(self, path: &'static str, kind: ObjectKind, parent: &'static str) -> Self {
        self.output(path, kind, Some(ParentRef::Arg(ArgPath::parse(parent))), Origin::Retrieved)
    }

    /// Destroy the handle at `path`. Also validates it (null allowed).
    pub fn destroys(mut self, path: &'static str, kind: ObjectKind) -> Self {
        self.destroys.push(DestroyTarget {
            path: Some(ArgPath::parse(path)),
            kind,
            vuid_custom_allocator: Vuid::Undefined,
            vuid_default_allocator: Vuid::Undefined,
            check_allocator: true,
        });
        self.optional(path, kind)
    }

    /// Identifiers for the allocator rules of the most recent destroy.
    pub fn allocator_vuids(mut self, custom: &'static str, default: &'static str) -> Self {
        if let Some(target) = self.destroys.last_mut() {
            target.vuid_custom_allocator = Vuid::new(custom);
            target.vuid_default_allocator = Vuid::new(default);
        }
        self
    }

    /// Free pool children listed at `path`. Each must exist and come from
    /// the pool at `pool`; null entries are ignored.
    pub fn frees(mut self, path: &'static str, kind: ObjectKind, pool: &'static str, pool_vuid: &'static str) -> Self {
        self.destroys.push(DestroyTarget {
            path: Some(ArgPath::parse(path)),
            kind,
            vuid_custom_allocator: Vuid::Undefined,
            vuid_default_allocator: Vuid::Undefined,
            check_allocator: false,
        });
        self.param(HandleParam::new(path, kind).optional().from_pool(pool, pool_vuid))
    }

    pub fn resets(mut self, pool: &'static str, kind: ObjectKind) -> Self {
        self.resets.push(ResetTarget {
            pool: ArgPath::parse(pool),
            kind,
        });
        self
    }

    pub fn scope(mut self, event: ScopeEvent) -> Self {
        self.scope_event = Some(event);
        if matches!(event, ScopeEvent::DestroyInstance | ScopeEvent::DestroyDevice) {
            if let Some(dispatch) = &self.dispatch {
                self.destroys.push(DestroyTarget {
                    path: None,
                    kind: dispatch.kind,
                    vuid_custom_allocator: Vuid::Undefined,
                    vuid_default_allocator: Vuid::Undefined,
                    check_allocator: true,
                });
            }
        }
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Fill in every derived identifier.
    pub fn sealed(mut self) -> Self {
        let (command, common_parent) = (self.command, self.common_parent);
        for param in &mut self.params {
            param.seal(command, common_parent);
        }
        self
    }

    /// Whether the command's platform extension is compiled in.
    pub fn is_supported(&self) -> bool {
        self.platform.map_or(true, Platform::is_enabled)
    }
}

/// Lookup from command to its sealed descriptor.
pub struct EntryPointTable {
    entries: HashMap<Command, EntryPoint>,
}

impl EntryPointTable {
    pub fn build() -> Self {
        let mut entries = HashMap::new();
        for entry in entry_points::all() {
            let command = entry.command;
            if entries.insert(command, entry.sealed()).is_some() {
                warn!("{} described twice; keeping the last", command.name());
            }
        }
        Self { entries }
    }

    pub fn get(&self, command: Command) -> Option<&EntryPoint> {
        self.entries.get(&command)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntryPoint> {
        self.entries.values()
    }
}

static TABLE: OnceLock<EntryPointTable> = OnceLock::new();

/// The process-wide descriptor table, built on first use.
pub fn table() -> &'static EntryPointTable {
    TABLE.get_or_init(EntryPointTable::build)
}
