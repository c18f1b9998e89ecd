//! Parameterized tests using test-case
//!
//! These tests run the verification mode matrix against holders with
//! opposite absence behavior.

use fieldtrip::verifier::{AbsencePolicy, verify};
use test_case::test_case;

use crate::common::{Invoice, Profile, Ticket};

// =============================================================================
// Mode matrix: holder whose mutators accept absence
// =============================================================================

#[test_case(AbsencePolicy::Untested, true ; "basic passes")]
#[test_case(AbsencePolicy::Allowed, true ; "nullable passes")]
#[test_case(AbsencePolicy::Rejected, false ; "non nullable fails")]
fn test_accepting_holder(policy: AbsencePolicy, expected_ok: bool) {
    let mut profile = Profile::default();
    let outcome = verify(&mut profile, policy, &[]);

    assert_eq!(outcome.is_ok(), expected_ok, "policy={policy:?}");
}

// =============================================================================
// Mode matrix: holder whose mutator rejects absence
// =============================================================================

#[test_case(AbsencePolicy::Untested, true ; "basic passes")]
#[test_case(AbsencePolicy::Allowed, false ; "nullable fails")]
#[test_case(AbsencePolicy::Rejected, true ; "non nullable passes")]
fn test_rejecting_holder(policy: AbsencePolicy, expected_ok: bool) {
    let mut invoice = Invoice::default();
    let outcome = verify(&mut invoice, policy, &[]);

    assert_eq!(outcome.is_ok(), expected_ok, "policy={policy:?}");
}

// =============================================================================
// Ignore list shapes
// =============================================================================

#[test_case(&[] ; "empty ignore list")]
#[test_case(&["visits"] ; "ignoring a non text field changes nothing")]
#[test_case(&["name"] ; "ignoring one field")]
#[test_case(&["name", "email"] ; "ignoring every field")]
#[test_case(&["name", "name"] ; "duplicate names are harmless")]
fn test_basic_mode_passes_regardless_of_ignore_shape(ignore: &[&str]) {
    let mut profile = Profile::default();
    assert!(verify(&mut profile, AbsencePolicy::Untested, ignore).is_ok());
}

// =============================================================================
// Skipped fields never count as verified
// =============================================================================

#[test_case(AbsencePolicy::Untested ; "basic")]
#[test_case(AbsencePolicy::Allowed ; "nullable")]
fn test_unresolvable_field_is_reported_skipped(policy: AbsencePolicy) {
    let mut ticket = Ticket::default();
    let report = verify(&mut ticket, policy, &[]).unwrap();

    assert_eq!(report.skipped, vec!["code"]);
    assert!(!report.verified.iter().any(|f| f == "code"));
}
