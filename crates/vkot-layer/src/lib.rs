//! Object-lifetime validation layer.
//!
//! Every intercepted command is described by an [`EntryPoint`] listing the
//! handles it names and the objects it creates or destroys. The
//! [`ObjectTracker`] interceptor checks those handles against the tracking
//! engine before the call is forwarded and updates the object tables after.

pub mod call;
pub mod chassis;
pub mod command;
pub mod dispatcher;
pub mod entry_point;
pub mod entry_points;
pub mod error;
pub mod layer;

pub use call::{ApiCall, Arg, ArgPath, Args};
pub use chassis::{CallOutcome, Hooks, Interceptor, InterceptorChain};
pub use command::Command;
pub use dispatcher::ObjectTracker;
pub use entry_point::{EntryPoint, EntryPointTable, HandleParam};
pub use error::LayerError;
pub use layer::Layer;
