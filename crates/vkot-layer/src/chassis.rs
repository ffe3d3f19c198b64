//! Interceptor registration and the per-call hook sequence.

use std::sync::Arc;

use ash::vk;
use bitflags::bitflags;
use tracing::{debug, trace};

use crate::call::ApiCall;
use crate::command::Command;
use crate::entry_point;
use crate::error::LayerError;

bitflags! {
    /// Hooks an interceptor participates in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Hooks: u8 {
        const PRE_VALIDATE = 0x01;
        const PRE_RECORD   = 0x02;
        const POST_RECORD  = 0x04;
    }
}

/// A validation component registered with the host.
///
/// For every call the host runs, in registration order, each participant's
/// validate hook, then (unless the call is skipped) each pre-record hook,
/// forwards the call, and finally each post-record hook.
pub trait Interceptor: Send + Sync {
    fn name(&self) -> &'static str;

    fn hooks(&self) -> Hooks {
        Hooks::all()
    }

    /// Whether this interceptor wants to see `command` at all.
    fn intercepts(&self, _command: Command) -> bool {
        true
    }

    /// Returns `true` to recommend skipping the call.
    fn pre_call_validate(&self, _call: &ApiCall) -> bool {
        false
    }

    fn pre_call_record(&self, _call: &ApiCall) {}

    fn post_call_record(&self, _call: &ApiCall, _result: vk::Result) {}
}

/// What happened to an intercepted call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// Vetoed; the next layer was never called.
    Skipped,
    /// Forwarded; carries the next layer's result.
    Forwarded(vk::Result),
}

impl CallOutcome {
    /// The result to hand back to the application.
    pub fn result(self) -> vk::Result {
        match self {
            CallOutcome::Skipped => vk::Result::ERROR_VALIDATION_FAILED_EXT,
            CallOutcome::Forwarded(result) => result,
        }
    }

    pub fn is_skipped(self) -> bool {
        self == CallOutcome::Skipped
    }
}

/// Ordered set of interceptors for one layer instance.
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn Interceptor>>,
    skip_on_violation: bool,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
            skip_on_violation: true,
        }
    }

    /// When disabled, vetoes are logged but the call is still forwarded.
    pub fn skip_on_violation(mut self, enabled: bool) -> Self {
        self.skip_on_violation = enabled;
        self
    }

    pub fn with(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.register(interceptor);
        self
    }

    pub fn register(&mut self, interceptor: Arc<dyn Interceptor>) {
        debug!(name = interceptor.name(), hooks = ?interceptor.hooks(), "interceptor registered");
        self.interceptors.push(interceptor);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Run `call` through every interceptor, forwarding it to `next`
    /// unless vetoed. `next` may write output parameters into the call.
    pub fn dispatch<F>(&self, call: &mut ApiCall, next: F) -> Result<CallOutcome, LayerError>
    where
        F: FnOnce(&mut ApiCall) -> vk::Result,
    {
        if let Some(entry) = entry_point::table().get(call.command) {
            if !entry.is_supported() {
                return Err(LayerError::UnsupportedEntryPoint(call.command.name()));
            }
        }

        let participants: Vec<&Arc<dyn Interceptor>> = self
            .interceptors
            .iter()
            .filter(|i| i.intercepts(call.command))
            .collect();

        let skip = participants
            .iter()
            .filter(|i| i.hooks().contains(Hooks::PRE_VALIDATE))
            .fold(false, |skip, i| skip | i.pre_call_validate(call));
        if skip && self.skip_on_violation {
            debug!("{} skipped", call.command);
            return Ok(CallOutcome::Skipped);
        }

        for interceptor in participants
            .iter()
            .filter(|i| i.hooks().contains(Hooks::PRE_RECORD))
        {
            interceptor.pre_call_record(call);
        }

        let result = next(call);
        trace!(result = ?result, "{} forwarded", call.command);

        for interceptor in participants
            .iter()
            .filter(|i| i.hooks().contains(Hooks::POST_RECORD))
        {
            interceptor.post_call_record(call, result);
        }
        Ok(CallOutcome::Forwarded(result))
    }
}

impl Default for InterceptorChain {
    fn default() -> Self {
        Self::new()
    }
}
