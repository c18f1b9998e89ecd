//! fieldtrip - round-trip verification for string field accessor/mutator pairs
//!
//! This library removes the need to hand-write "set value, get value, assert
//! equality" tests for every simple data-holder type in a codebase. A type
//! describes its fields once through the [`members::Introspect`] capability;
//! the verifier then walks every text field, resolves the conventional
//! `name()` / `set_name()` pair by name, round-trips a probe value through
//! the pair, and optionally exercises how the pair handles absent values.
//!
//! # Examples
//!
//! ```
//! use fieldtrip::asserts::assert_string_accessors;
//! use fieldtrip::field::FieldSpec;
//! use fieldtrip::members::{Introspect, MemberTable};
//!
//! #[derive(Default)]
//! struct Profile {
//!     name: Option<String>,
//! }
//!
//! impl Profile {
//!     fn name(&self) -> Option<&str> {
//!         self.name.as_deref()
//!     }
//!
//!     fn set_name(&mut self, value: Option<String>) {
//!         self.name = value;
//!     }
//! }
//!
//! impl Introspect for Profile {
//!     fn fields(&self) -> Vec<FieldSpec> {
//!         vec![FieldSpec::text("name")]
//!     }
//!
//!     fn members(&self) -> MemberTable<Self> {
//!         MemberTable::new()
//!             .with_accessor("name", |p: &Self| p.name().map(str::to_string))
//!             .with_mutator("set_name", |p: &mut Self, v| {
//!                 p.set_name(v);
//!                 Ok(())
//!             })
//!     }
//! }
//!
//! let mut profile = Profile::default();
//! assert_string_accessors(&mut profile);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod asserts;
pub mod field;
pub mod members;
pub mod verifier;
