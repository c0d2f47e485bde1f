//! Building blocks shared by every guard
//!
//! - [`Check`]: one reusable rule over an input type
//! - [`CheckTextExt`]: applies a string rule to a possibly-null candidate
//! - [`AsText`]: what counts as a nullable string
//!
//! # Examples
//!
//! ```
//! use ensured_outcomes::foundation::{Check, CheckTextExt};
//! use ensured_outcomes::checks::NotEmpty;
//!
//! let nickname: Option<String> = None;
//! let error = NotEmpty.ensure_text(&nickname, "nickname").unwrap_err();
//! assert_eq!(error.code(), "null");
//!
//! assert!(NotEmpty.ensure("zed", "nickname").is_ok());
//! ```

pub mod text;
pub mod traits;

pub use text::AsText;
pub use traits::{Check, CheckTextExt};
