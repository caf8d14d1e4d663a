//! Small developer helpers shared by devkit binaries.
//!
//! - [`strings`]: URL-friendly slugs.
//! - [`math`]: moving averages.
//! - [`timer`]: elapsed-time logging around closures and scopes.
//! - [`logging`]: environment-driven `tracing` subscriber setup.

pub mod logging;
pub mod math;
pub mod strings;
pub mod timer;

pub use logging::{LogFormat, LoggingConfig, LoggingError, init_from_env};
pub use math::{MathError, moving_average};
pub use strings::slugify;
pub use timer::{Timer, timed};
