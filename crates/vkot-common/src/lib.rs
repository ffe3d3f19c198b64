pub mod logging;
pub mod platform;

pub use platform::Platform;
