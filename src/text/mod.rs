//! Text processing utilities.
//!
//! - [`utf8`] - non-validating lead-byte classification and codepoint decoding
//! - [`dfa`] - the table-driven validation automaton
//! - [`config`] - settings for rendering validation reports
//!
//! ```
//! use utf8view::text::{validate_bytes_detailed, Utf8ErrorKind};
//!
//! assert!(validate_bytes_detailed("日本語".as_bytes()).is_ok());
//!
//! let err = validate_bytes_detailed(&[0x80]).unwrap_err();
//! assert_eq!(err.kind, Utf8ErrorKind::InvalidLeadByte);
//! assert_eq!(err.offset, 0);
//! ```

pub mod config;
pub mod dfa;
pub mod utf8;

// Re-export commonly used types
pub use config::{ColorChoice, ReportConfig};
pub use dfa::{validate, validate_bytes, validate_bytes_detailed, validate_detailed, Utf8Error, Utf8ErrorKind};
pub use utf8::{decode, lead_byte_length, Codepoint};
