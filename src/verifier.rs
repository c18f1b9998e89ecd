//! Accessor/mutator verification engine
//!
//! For each text field a type declares, the verifier derives the
//! conventional method names (`name` reads, `set_name` writes), resolves
//! both against the type's member table, stores a probe value through the
//! mutator, reads it back through the accessor, and checks the two match.
//! An [`AbsencePolicy`] optionally adds a second pass that stores an
//! absent value and checks it is either accepted or rejected.
//!
//! Failures travel on two distinct channels:
//!
//! - A field whose pair cannot be resolved, or whose mutator errors while
//!   storing the probe value, is skipped with a debug-level trace and no
//!   assertion. Types with partially-conventional accessors stay usable.
//! - A resolved pair that violates its contract is a [`VerifyError`],
//!   which aborts the whole run at the first violation. No further fields
//!   are checked and there is no partial-success reporting.
//!
//! Each field is exercised independently; one field's skip never affects
//! another. The run is synchronous and touches no shared state beyond the
//! read-only [`PROBE_VALUE`] constant, so concurrent runs on distinct
//! subjects are safe.

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::members::Introspect;

/// Probe value stored through every mutator and read back through the
/// matching accessor
pub const PROBE_VALUE: &str = "blah";

/// How the verifier treats absent values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbsencePolicy {
    /// Round-trip only; absence is not exercised
    #[default]
    Untested,
    /// Storing an absent value must succeed and read back as absent
    Allowed,
    /// Storing an absent value must be rejected by the mutator
    Rejected,
}

/// Fatal verification failures
///
/// Every variant names the offending field (or mutator) and, where a
/// value comparison failed, what was expected and what was observed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The accessor did not return the value the mutator stored
    #[error("{field} - failed to set and get (expected {expected:?}, got {actual:?})")]
    RoundTrip {
        /// The field whose pair failed the round-trip
        field: String,
        /// The value stored through the mutator
        expected: String,
        /// The value the accessor returned
        actual: Option<String>,
    },

    /// The mutator rejected an absent value it should have accepted
    #[error("{field} - couldn't be set as absent: {reason}")]
    AbsentRejected {
        /// The field whose mutator rejected absence
        field: String,
        /// The mutator's own description of the rejection
        reason: String,
    },

    /// The accessor still returned a value after absence was stored
    #[error("{field} - couldn't be set and get as absent (got {actual:?})")]
    AbsentNotStored {
        /// The field whose accessor ignored the stored absence
        field: String,
        /// The value the accessor returned instead
        actual: String,
    },

    /// The mutator accepted an absent value it should have rejected
    #[error("rejection not signaled for {mutator}")]
    RejectionNotSignaled {
        /// The mutator that accepted absence
        mutator: String,
    },
}

/// Summary of a passing verification run
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Fields whose accessor/mutator pair satisfied the policy
    pub verified: Vec<String>,

    /// Fields skipped because their pair did not resolve or was not
    /// invocable
    pub skipped: Vec<String>,
}

/// Verify every text field of `subject` against `policy`
///
/// Fields named in `ignore` are excluded before any resolution is
/// attempted (exact match). The probe value is left stored in the subject
/// when the run passes; callers wanting a pristine instance should verify
/// a throwaway one.
///
/// # Errors
///
/// Returns the first [`VerifyError`] encountered; the run stops there.
pub fn verify<T: Introspect>(
    subject: &mut T,
    policy: AbsencePolicy,
    ignore: &[&str],
) -> Result<VerifyReport, VerifyError> {
    let fields = subject.fields();
    let members = subject.members();

    let mut verified = Vec::new();
    let mut skipped = Vec::new();

    for spec in fields {
        if !spec.is_text() {
            continue;
        }
        if ignore.contains(&spec.name.as_str()) {
            continue;
        }

        let accessor_name = spec.name.clone();
        let mutator_name = format!("set_{}", spec.name);

        let (Some(read), Some(write)) =
            (members.accessor(&accessor_name), members.mutator(&mutator_name))
        else {
            debug!("skipping {}: no {accessor_name}/{mutator_name} pair", spec.name);
            skipped.push(spec.name);
            continue;
        };

        // Round trip: store the probe value, read it back
        if let Err(err) = write(subject, Some(PROBE_VALUE.to_string())) {
            debug!("skipping {}: {mutator_name} not invocable ({err})", spec.name);
            skipped.push(spec.name);
            continue;
        }
        let actual = read(subject);
        if actual.as_deref() != Some(PROBE_VALUE) {
            return Err(VerifyError::RoundTrip {
                field: spec.name,
                expected: PROBE_VALUE.to_string(),
                actual,
            });
        }

        match policy {
            AbsencePolicy::Untested => {},
            AbsencePolicy::Allowed => {
                if let Err(err) = write(subject, None) {
                    return Err(VerifyError::AbsentRejected {
                        field: spec.name,
                        reason: err.to_string(),
                    });
                }
                if let Some(actual) = read(subject) {
                    return Err(VerifyError::AbsentNotStored { field: spec.name, actual });
                }
            },
            AbsencePolicy::Rejected => {
                // Any mutator error counts as a correct rejection; the
                // error's kind is not inspected
                if write(subject, None).is_ok() {
                    return Err(VerifyError::RejectionNotSignaled { mutator: mutator_name });
                }
            },
        }

        verified.push(spec.name);
    }

    Ok(VerifyReport { verified, skipped })
}
