//! Tests for the domain error payload and its serde contract.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_input("bad"), ErrorCode::InvalidInput)]
#[case(Error::invalid_credentials("who?"), ErrorCode::InvalidCredentials)]
#[case(Error::duplicate_identity("taken"), ErrorCode::DuplicateIdentity)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::forbidden("nope"), ErrorCode::Forbidden)]
#[case(Error::already_claimed("late"), ErrorCode::AlreadyClaimed)]
#[case(Error::invalid_transition("closed"), ErrorCode::InvalidTransition)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidInput, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn serialises_codes_in_snake_case() {
    let error = Error::already_claimed("complaint 1 is already Assigned");
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({"code": "already_claimed", "message": "complaint 1 is already Assigned"})
    );
}

#[rstest]
fn deserialisation_rejects_blank_messages() {
    let result: Result<Error, _> =
        serde_json::from_value(json!({"code": "not_found", "message": " "}));
    assert!(result.is_err());
}

#[rstest]
fn details_survive_a_round_trip() {
    let error = Error::invalid_input("bad").with_details(json!({"field": "email"}));
    let value = serde_json::to_value(&error).expect("serialise error");
    let parsed: Error = serde_json::from_value(value).expect("deserialise error");
    assert_eq!(parsed, error);
}

#[rstest]
fn display_uses_the_message() {
    assert_eq!(Error::forbidden("not your complaint").to_string(), "not your complaint");
}
