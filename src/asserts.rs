//! Panicking entry points for use inside `#[test]` functions
//!
//! These wrap [`verify`](crate::verifier::verify) and panic with the
//! failure diagnostic, which the test harness reports like any other
//! assertion failure. Call [`verify`](crate::verifier::verify) directly
//! when a `Result` is more convenient than a panic.
//!
//! Three verification modes, each with and without an ignore list:
//!
//! | Entry point | Round-trip | Absence |
//! |---|---|---|
//! | [`assert_string_accessors`] | yes | not exercised |
//! | [`assert_nullable_string_accessors`] | yes | must be accepted |
//! | [`assert_non_nullable_string_accessors`] | yes | must be rejected |

use crate::members::Introspect;
use crate::verifier::{AbsencePolicy, verify};

/// Assert every text field round-trips the probe value
#[track_caller]
pub fn assert_string_accessors<T: Introspect>(subject: &mut T) {
    assert_string_accessors_ignoring(subject, &[]);
}

/// Same as [`assert_string_accessors`], excluding the named fields
#[track_caller]
pub fn assert_string_accessors_ignoring<T: Introspect>(subject: &mut T, ignore: &[&str]) {
    run(subject, AbsencePolicy::Untested, ignore);
}

/// Assert every text field round-trips the probe value and accepts an
/// absent value
#[track_caller]
pub fn assert_nullable_string_accessors<T: Introspect>(subject: &mut T) {
    assert_nullable_string_accessors_ignoring(subject, &[]);
}

/// Same as [`assert_nullable_string_accessors`], excluding the named
/// fields
#[track_caller]
pub fn assert_nullable_string_accessors_ignoring<T: Introspect>(subject: &mut T, ignore: &[&str]) {
    run(subject, AbsencePolicy::Allowed, ignore);
}

/// Assert every text field round-trips the probe value and rejects an
/// absent value
#[track_caller]
pub fn assert_non_nullable_string_accessors<T: Introspect>(subject: &mut T) {
    assert_non_nullable_string_accessors_ignoring(subject, &[]);
}

/// Same as [`assert_non_nullable_string_accessors`], excluding the named
/// fields
#[track_caller]
pub fn assert_non_nullable_string_accessors_ignoring<T: Introspect>(
    subject: &mut T,
    ignore: &[&str],
) {
    run(subject, AbsencePolicy::Rejected, ignore);
}

#[track_caller]
fn run<T: Introspect>(subject: &mut T, policy: AbsencePolicy, ignore: &[&str]) {
    if let Err(err) = verify(subject, policy, ignore) {
        panic!("{err}");
    }
}
