//! Culture-Aware Personal Name Formatter Library
//!
//! This library formats personal names for display, reconciling two
//! cultural conventions: Latin-script naming (given name(s) then surname,
//! space-separated) and CJK naming (surname then given name, no
//! separator). It also derives compact initials for each convention.
//!
//! Name parts are always supplied in the order: primary given name,
//! additional given name(s) (optional), surname. The surname-first CJK
//! ordering is an output transformation, never an input contract.
//!
//! # Examples
//!
//! ```rust
//! use name_display::{format_initials, format_name};
//! use name_display::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     assert_eq!(format_name(&["Eric", "Louis", "Morris"])?, "Eric Louis Morris");
//!     assert_eq!(format_name(&["晓东", "李"])?, "李晓东");
//!
//!     assert_eq!(format_initials(&["Eric", "Louis", "Morris"])?, "ELM");
//!     assert_eq!(format_initials(&["晓东", "李"])?, "李");
//!
//!     // A name requires at minimum a given name and a surname
//!     assert!(format_name(&["Madonna"]).is_err());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use formatter::{Script, format_initials, format_name};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
