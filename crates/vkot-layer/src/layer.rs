//! The layer host: configuration, the interceptor chain and the shared
//! tracker, plus the process-wide instance the loader-facing entry points
//! go through.

use std::sync::Arc;

use ash::vk;
use parking_lot::Mutex;
use tracing::info;
use vkot_common::{logging, Platform};
use vkot_core::{LayerConfig, ReportSink, Tracker, TracingSink};

use crate::call::ApiCall;
use crate::chassis::{CallOutcome, Interceptor, InterceptorChain};
use crate::command::Command;
use crate::dispatcher::ObjectTracker;
use crate::entry_point::{self, EntryPoint};
use crate::error::LayerError;

pub struct Layer {
    config: LayerConfig,
    tracker: Arc<Tracker>,
    chain: InterceptorChain,
}

impl Layer {
    pub fn new(config: LayerConfig, sink: Arc<dyn ReportSink>) -> Self {
        let tracker = Arc::new(Tracker::new(config.object_tracker.clone(), sink));
        let mut chain = InterceptorChain::new().skip_on_violation(config.object_tracker.skip_on_violation);
        if config.object_tracker.enabled {
            chain.register(Arc::new(ObjectTracker::new(Arc::clone(&tracker))));
        }
        info!(
            interceptors = ?chain.names(),
            platforms = ?Platform::enabled().collect::<Vec<_>>(),
            "layer ready"
        );
        Self {
            config,
            tracker,
            chain,
        }
    }

    /// Load configuration from `path` and report through `tracing`.
    pub fn load(path: &str) -> Result<Self, LayerError> {
        let config = LayerConfig::load(path)?;
        Ok(Self::new(config, Arc::new(TracingSink)))
    }

    /// Configuration from `VKOT_CONFIG` (or the platform default), logging
    /// initialised from it.
    pub fn from_env() -> Self {
        let config = LayerConfig::from_env();
        logging::init_logging(&config.logging.filter);
        Self::new(config, Arc::new(TracingSink))
    }

    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    pub fn tracker(&self) -> &Arc<Tracker> {
        &self.tracker
    }

    /// Add another interceptor after the built-in ones.
    pub fn register(&mut self, interceptor: Arc<dyn Interceptor>) {
        self.chain.register(interceptor);
    }

    /// Resolve an API name to its descriptor, as a proc-address query would.
    pub fn entry_point(&self, name: &str) -> Result<&'static EntryPoint, LayerError> {
        let command =
            Command::from_name(name).ok_or_else(|| LayerError::UnknownEntryPoint(name.to_string()))?;
        let entry = entry_point::table()
            .get(command)
            .ok_or_else(|| LayerError::UnknownEntryPoint(name.to_string()))?;
        if !entry.is_supported() {
            return Err(LayerError::UnsupportedEntryPoint(command.name()));
        }
        Ok(entry)
    }

    /// Intercept one call; see [`InterceptorChain::dispatch`].
    pub fn call<F>(&self, call: &mut ApiCall, next: F) -> Result<CallOutcome, LayerError>
    where
        F: FnOnce(&mut ApiCall) -> vk::Result,
    {
        self.chain.dispatch(call, next)
    }

    /// No instance is being tracked any more.
    pub fn is_idle(&self) -> bool {
        self.tracker.registry().is_empty()
    }
}

static GLOBAL: Mutex<Option<Arc<Layer>>> = Mutex::new(None);

/// The process-wide layer, created from the environment on first use.
pub fn global() -> Arc<Layer> {
    let mut slot = GLOBAL.lock();
    Arc::clone(slot.get_or_insert_with(|| Arc::new(Layer::from_env())))
}

/// Route a call through the process-wide layer. Once the last instance has
/// been destroyed the layer is released; the next call builds a fresh one.
pub fn dispatch<F>(call: &mut ApiCall, next: F) -> Result<CallOutcome, LayerError>
where
    F: FnOnce(&mut ApiCall) -> vk::Result,
{
    let layer = global();
    let outcome = layer.call(call, next)?;
    if call.command == Command::DestroyInstance && layer.is_idle() {
        release_if_idle();
    }
    Ok(outcome)
}

/// Drop the process-wide layer if it tracks nothing. Returns whether it was
/// released.
pub fn release_if_idle() -> bool {
    let mut slot = GLOBAL.lock();
    if slot.as_ref().is_some_and(|layer| layer.is_idle()) {
        *slot = None;
        info!("last instance destroyed; layer released");
        return true;
    }
    false
}
