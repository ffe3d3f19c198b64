//! The call record passed through the interceptor chain.
//!
//! Arguments are kept as a small tree that mirrors the API's parameter
//! structs: pointers to structs become nested [`Args`], count + pointer
//! pairs become arrays, and a null pointer is either [`Arg::Null`] or an
//! absent field. Only the parts of a call that can carry handles (plus the
//! discriminator fields that type them) need to be filled in.

use std::fmt::Write;

use ash::vk;
use ash::vk::Handle;

use crate::command::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Null,
    Handle(u64),
    Value(u64),
    Struct(Args),
    Array(Vec<Arg>),
}

impl Arg {
    pub fn handle<H: Handle>(handle: H) -> Self {
        Arg::Handle(handle.as_raw())
    }

    pub fn handles<H: Handle + Copy>(handles: &[H]) -> Self {
        Arg::Array(handles.iter().map(|h| Arg::Handle(h.as_raw())).collect())
    }

    pub fn structs(items: Vec<Args>) -> Self {
        Arg::Array(items.into_iter().map(Arg::Struct).collect())
    }

    pub fn as_handle(&self) -> Option<u64> {
        match self {
            Arg::Handle(h) => Some(*h),
            Arg::Null => Some(0),
            _ => None,
        }
    }
}

/// Named fields of one parameter list or struct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    fields: Vec<(&'static str, Arg)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Arg> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, a)| a)
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, name: &'static str, arg: Arg) {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = arg,
            None => self.fields.push((name, arg)),
        }
    }

    pub fn with(mut self, name: &'static str, arg: Arg) -> Self {
        self.set(name, arg);
        self
    }

    pub fn handle<H: Handle>(self, name: &'static str, handle: H) -> Self {
        self.with(name, Arg::handle(handle))
    }

    pub fn raw_handle(self, name: &'static str, handle: u64) -> Self {
        self.with(name, Arg::Handle(handle))
    }

    pub fn handles<H: Handle + Copy>(self, name: &'static str, handles: &[H]) -> Self {
        self.with(name, Arg::handles(handles))
    }

    pub fn value(self, name: &'static str, value: u64) -> Self {
        self.with(name, Arg::Value(value))
    }

    pub fn object_type(self, name: &'static str, object_type: vk::ObjectType) -> Self {
        self.value(name, object_type.as_raw() as u32 as u64)
    }

    pub fn null(self, name: &'static str) -> Self {
        self.with(name, Arg::Null)
    }

    pub fn nested(self, name: &'static str, args: Args) -> Self {
        self.with(name, Arg::Struct(args))
    }

    pub fn structs(self, name: &'static str, items: Vec<Args>) -> Self {
        self.with(name, Arg::structs(items))
    }
}

/// One intercepted API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCall {
    pub command: Command,
    /// The primary dispatchable handle, or 0 for global commands.
    pub dispatch: u64,
    /// Whether a non-null `pAllocator` was passed.
    pub custom_allocator: bool,
    pub args: Args,
}

impl ApiCall {
    pub fn new<H: Handle>(command: Command, dispatch: H) -> Self {
        Self::with_raw_dispatch(command, dispatch.as_raw())
    }

    pub fn with_raw_dispatch(command: Command, dispatch: u64) -> Self {
        Self {
            command,
            dispatch,
            custom_allocator: false,
            args: Args::new(),
        }
    }

    /// A command that takes no dispatchable handle (e.g. vkCreateInstance).
    pub fn global(command: Command) -> Self {
        Self::with_raw_dispatch(command, 0)
    }

    pub fn allocator(mut self) -> Self {
        self.custom_allocator = true;
        self
    }

    pub fn with(mut self, name: &'static str, arg: Arg) -> Self {
        self.args.set(name, arg);
        self
    }

    pub fn handle<H: Handle>(self, name: &'static str, handle: H) -> Self {
        self.with(name, Arg::handle(handle))
    }

    pub fn raw_handle(self, name: &'static str, handle: u64) -> Self {
        self.with(name, Arg::Handle(handle))
    }

    pub fn handles<H: Handle + Copy>(self, name: &'static str, handles: &[H]) -> Self {
        self.with(name, Arg::handles(handles))
    }

    pub fn value(self, name: &'static str, value: u64) -> Self {
        self.with(name, Arg::Value(value))
    }

    pub fn object_type(self, name: &'static str, object_type: vk::ObjectType) -> Self {
        self.value(name, object_type.as_raw() as u32 as u64)
    }

    pub fn null(self, name: &'static str) -> Self {
        self.with(name, Arg::Null)
    }

    pub fn nested(self, name: &'static str, args: Args) -> Self {
        self.with(name, Arg::Struct(args))
    }

    pub fn structs(self, name: &'static str, items: Vec<Args>) -> Self {
        self.with(name, Arg::structs(items))
    }

    /// Write an output parameter (called by the next layer once it has
    /// produced handles).
    pub fn set(&mut self, name: &'static str, arg: Arg) {
        self.args.set(name, arg);
    }

    pub fn set_handle(&mut self, name: &'static str, handle: u64) {
        self.args.set(name, Arg::Handle(handle));
    }

    pub fn set_handles(&mut self, name: &'static str, handles: Vec<u64>) {
        self.args
            .set(name, Arg::Array(handles.into_iter().map(Arg::Handle).collect()));
    }

    pub fn get(&self, name: &str) -> Option<&Arg> {
        self.args.get(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Field(&'static str),
    /// Every element of the array named by the preceding field.
    Each,
}

/// Route from a call's parameters to the handles it names, e.g.
/// `pSubmits[].pWaitSemaphores[]`. `.` descends into a struct pointer and
/// `[]` iterates a count + array pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgPath {
    text: &'static str,
    segments: Vec<Segment>,
}

impl ArgPath {
    pub fn parse(text: &'static str) -> Self {
        let mut segments = Vec::new();
        for part in text.split('.') {
            match part.strip_suffix("[]") {
                Some(name) => {
                    segments.push(Segment::Field(name));
                    segments.push(Segment::Each);
                }
                None => segments.push(Segment::Field(part)),
            }
        }
        Self { text, segments }
    }

    pub fn as_str(&self) -> &'static str {
        self.text
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Name of the field holding the handle.
    pub fn field(&self) -> &'static str {
        self.segments
            .iter()
            .rev()
            .find_map(|s| match s {
                Segment::Field(name) => Some(*name),
                Segment::Each => None,
            })
            .unwrap_or(self.text)
    }

    /// Number of nested array levels.
    pub fn depth(&self) -> usize {
        self.segments.iter().filter(|s| **s == Segment::Each).count()
    }

    /// Call `f` for every handle slot this path reaches, with the element
    /// indices taken at each array level and the struct holding the slot.
    /// Null struct pointers and missing arrays are not descended into; a
    /// missing or null terminal slot is reported as handle 0.
    pub fn visit<'a>(&self, args: &'a Args, f: &mut dyn FnMut(&[usize], &'a Args, u64)) {
        let mut indices = Vec::with_capacity(self.depth());
        walk(&self.segments, args, &mut indices, f);
    }

    /// Every handle this path reaches, in visiting order.
    pub fn handles(&self, args: &Args) -> Vec<u64> {
        let mut found = Vec::new();
        self.visit(args, &mut |_, _, handle| found.push(handle));
        found
    }

    /// First handle this path reaches, if any.
    pub fn first(&self, args: &Args) -> Option<u64> {
        self.handles(args).into_iter().next()
    }

    /// Render the path with concrete indices, e.g. `pSubmits[0].pWaitSemaphores[2]`.
    pub fn location(&self, indices: &[usize]) -> String {
        let mut out = String::with_capacity(self.text.len() + 4 * indices.len());
        let mut next_index = indices.iter();
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) => {
                    if i > 0 {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                Segment::Each => {
                    let _ = write!(out, "[{}]", next_index.next().copied().unwrap_or(0));
                }
            }
        }
        out
    }
}

fn walk<'a>(
    segments: &[Segment],
    container: &'a Args,
    indices: &mut Vec<usize>,
    f: &mut dyn FnMut(&[usize], &'a Args, u64),
) {
    let Some((Segment::Field(name), rest)) = segments.split_first() else {
        return;
    };
    let value = container.get(name);
    match rest.first() {
        None => {
            if let Some(handle) = value.map_or(Some(0), Arg::as_handle) {
                f(indices, container, handle);
            }
        }
        Some(Segment::Each) => {
            let Some(Arg::Array(items)) = value else {
                return;
            };
            let tail = &rest[1..];
            for (i, item) in items.iter().enumerate() {
                indices.push(i);
                if tail.is_empty() {
                    if let Some(handle) = item.as_handle() {
                        f(indices, container, handle);
                    }
                } else if let Arg::Struct(inner) = item {
                    walk(tail, inner, indices, f);
                }
                indices.pop();
            }
        }
        Some(Segment::Field(_)) => {
            if let Some(Arg::Struct(inner)) = value {
                walk(rest, inner, indices, f);
            }
        }
    }
}
