//! Configuration utility types.
//!
//! | Module     | Purpose                                      |
//! |------------|----------------------------------------------|
//! | `error`    | Configuration error types                    |
//! | `field`    | Typed field paths for diagnostics            |
//! | `presence` | Which settings a file sets explicitly        |

mod error;
mod field;
mod presence;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use presence::ConfigPresence;
