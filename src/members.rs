//! Member table and the `Introspect` capability
//!
//! Rust has no runtime reflection, so a type opts into verification by
//! registering its accessor and mutator functions in a [`MemberTable`]
//! keyed by method name. The verifier resolves conventionally-derived
//! names against this table the same way a reflective implementation
//! would resolve them against a class's method table: lookup is by exact
//! string match, and a missing entry is a resolution failure, not an
//! error.
//!
//! Absence is modeled with `Option<String>`: accessors return `None` when
//! the field holds no value, and mutators receive `None` to clear it. A
//! mutator that does not accept absence rejects it by returning a
//! [`MutateError`].

use std::fmt;

use thiserror::Error;

use crate::field::FieldSpec;

/// Error a mutator returns to reject a value
#[derive(Debug, Error)]
pub enum MutateError {
    /// The field does not accept an absent value
    #[error("absent value not allowed")]
    AbsentNotAllowed,

    /// The field rejected the value for another reason
    #[error("value rejected: {0}")]
    Rejected(String),
}

/// Accessor entry: reads the current value of one field
pub type Accessor<T> = Box<dyn Fn(&T) -> Option<String>>;

/// Mutator entry: stores a new value, or rejects it with a [`MutateError`]
pub type Mutator<T> = Box<dyn Fn(&mut T, Option<String>) -> Result<(), MutateError>>;

/// Method table mapping operation names to accessor/mutator entries
///
/// Entries keep registration order. Lookups are exact string matches; the
/// table never guesses near-miss names.
pub struct MemberTable<T> {
    accessors: Vec<(String, Accessor<T>)>,
    mutators: Vec<(String, Mutator<T>)>,
}

impl<T> MemberTable<T> {
    /// Create an empty table
    #[must_use]
    pub const fn new() -> Self {
        Self { accessors: Vec::new(), mutators: Vec::new() }
    }

    /// Register an accessor under the given method name
    #[must_use]
    pub fn with_accessor(
        mut self,
        name: impl Into<String>,
        read: impl Fn(&T) -> Option<String> + 'static,
    ) -> Self {
        self.accessors.push((name.into(), Box::new(read)));
        self
    }

    /// Register a mutator under the given method name
    #[must_use]
    pub fn with_mutator(
        mut self,
        name: impl Into<String>,
        write: impl Fn(&mut T, Option<String>) -> Result<(), MutateError> + 'static,
    ) -> Self {
        self.mutators.push((name.into(), Box::new(write)));
        self
    }

    /// Look up an accessor by exact method name
    #[must_use]
    pub fn accessor(&self, name: &str) -> Option<&Accessor<T>> {
        self.accessors.iter().find(|(n, _)| n == name).map(|(_, read)| read)
    }

    /// Look up a mutator by exact method name
    #[must_use]
    pub fn mutator(&self, name: &str) -> Option<&Mutator<T>> {
        self.mutators.iter().find(|(n, _)| n == name).map(|(_, write)| write)
    }

    /// Names of all registered accessors, in registration order
    #[must_use]
    pub fn accessor_names(&self) -> Vec<&str> {
        self.accessors.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Names of all registered mutators, in registration order
    #[must_use]
    pub fn mutator_names(&self) -> Vec<&str> {
        self.mutators.iter().map(|(n, _)| n.as_str()).collect()
    }
}

impl<T> Default for MemberTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Closures are not Debug, so print the registered names only
impl<T> fmt::Debug for MemberTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberTable")
            .field("accessors", &self.accessor_names())
            .field("mutators", &self.mutator_names())
            .finish()
    }
}

/// Capability a type implements to make itself verifiable
///
/// Implementations report only the fields the type itself declares, in
/// declaration order; fields of embedded or wrapped types are that type's
/// own business. The member table may hold any registrations the type
/// wants - the verifier silently skips fields whose conventional pair is
/// not present, so a partially-registered table is fine.
///
/// # Examples
///
/// ```
/// use fieldtrip::field::FieldSpec;
/// use fieldtrip::members::{Introspect, MemberTable, MutateError};
///
/// #[derive(Default)]
/// struct Contact {
///     email: String,
/// }
///
/// impl Contact {
///     fn email(&self) -> &str {
///         &self.email
///     }
///
///     fn set_email(&mut self, value: Option<String>) -> Result<(), MutateError> {
///         self.email = value.ok_or(MutateError::AbsentNotAllowed)?;
///         Ok(())
///     }
/// }
///
/// impl Introspect for Contact {
///     fn fields(&self) -> Vec<FieldSpec> {
///         vec![FieldSpec::text("email")]
///     }
///
///     fn members(&self) -> MemberTable<Self> {
///         MemberTable::new()
///             .with_accessor("email", |c: &Self| Some(c.email().to_string()))
///             .with_mutator("set_email", |c: &mut Self, v| c.set_email(v))
///     }
/// }
/// ```
pub trait Introspect: Sized {
    /// Fields declared directly on this type, in declaration order
    fn fields(&self) -> Vec<FieldSpec>;

    /// Method table used to resolve accessor/mutator pairs by name
    fn members(&self) -> MemberTable<Self>;
}
