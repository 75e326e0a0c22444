//! # utf8view
//!
//! Non-owning UTF-8 string views for Rust.
//!
//! A [`StrView`] is a half-open byte range over text that lives somewhere
//! else (a literal, a memory-mapped file, a caller's buffer). Views are
//! `Copy`, never allocate, and every operation returns a new view.
//!
//! ## Module Organization
//!
//! - [`view`] - The view type, navigation by bytes and codepoints, accessors
//! - [`text`] - Codepoint decoding and the table-driven UTF-8 validator
//!
//! ## Quick Start
//!
//! ```
//! use utf8view::{sv, StrView};
//!
//! let text = sv!("Γαζέες");
//! assert_eq!(text.len(), 12);
//! assert_eq!(text.utf_length(), 6);
//! assert!(text.validate());
//!
//! // Walk codepoints, keeping both the element and the rest
//! let mut it = text;
//! let mut c = 0;
//! it = it.iter_next_char(&mut c, 1);
//! assert_eq!(c, 915);
//! assert_eq!(it.utf_length(), 5);
//!
//! // Untrusted bytes go through the automaton first
//! assert!(!StrView::new(b"abcd\x80").validate());
//! ```
//!
//! ## Two decode tiers
//!
//! Decoding and codepoint navigation trust their input: they classify lead
//! bytes and extract payload bits without checking well-formedness. The
//! validator in [`text::dfa`] is the only component that decides whether
//! bytes are UTF-8.
//!
//! ## Features
//!
//! - `std` (default) - `std::error::Error` impls and lossy string helpers
//! - `serde` - Serialization for error and configuration types
//! - `cli` - The `utf8view` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// =============================================================================
// Core modules
// =============================================================================

/// UTF-8 decoding and validation.
pub mod text;

/// Non-owning string views.
pub mod view;

// =============================================================================
// Public re-exports
// =============================================================================

pub use text::{validate, Codepoint, Utf8Error, Utf8ErrorKind};
pub use view::StrView;
