//! Regression coverage for the user model.

use super::*;
use rstest::rstest;

fn digest() -> PasswordDigest {
    PasswordDigest::derive("sekret").expect("derive digest")
}

#[rstest]
#[case("", UserValidationError::UsernameTooShort { min: USERNAME_MIN })]
#[case("ab", UserValidationError::UsernameTooShort { min: USERNAME_MIN })]
#[case("  a  ", UserValidationError::UsernameTooShort { min: USERNAME_MIN })]
fn short_usernames_are_rejected(#[case] raw: &str, #[case] expected: UserValidationError) {
    let err = Username::new(raw).expect_err("short username must fail");
    assert_eq!(err, expected);
}

#[rstest]
fn usernames_are_trimmed_but_case_preserved() {
    let username = Username::new("  Root  ").expect("valid username");
    assert_eq!(username.as_ref(), "Root");
}

#[rstest]
#[case(None, Some("Jeff Smith"), Some("jeffsmith22"), UserValidationError::MissingUsername)]
#[case(Some("jeff1"), None, Some("jeffsmith22"), UserValidationError::MissingName)]
#[case(Some("jeff1"), Some("Jeff Smith"), None, UserValidationError::MissingPassword)]
#[case(
    Some("jeff1"),
    Some("Jeff Smith"),
    Some("ab"),
    UserValidationError::PasswordTooShort { min: PASSWORD_MIN }
)]
#[case(
    Some("jeff1"),
    Some(""),
    Some("jeffsmith22"),
    UserValidationError::EmptyName
)]
fn incomplete_registrations_are_rejected(
    #[case] username: Option<&str>,
    #[case] name: Option<&str>,
    #[case] password: Option<&str>,
    #[case] expected: UserValidationError,
) {
    let err = Registration::try_from_parts(
        username.map(str::to_owned),
        name.map(str::to_owned),
        password.map(str::to_owned),
    )
    .expect_err("incomplete registration must fail");
    assert_eq!(err, expected);
}

#[rstest]
fn minimum_length_boundaries_are_inclusive() {
    let registration = Registration::try_from_parts(
        Some("abc".to_owned()),
        Some("Ada".to_owned()),
        Some("pwd".to_owned()),
    )
    .expect("three-character username and password are accepted");
    assert_eq!(registration.username().as_ref(), "abc");
    assert_eq!(registration.password(), "pwd");
}

#[rstest]
fn serialized_user_omits_password_material() {
    let registration = Registration::try_from_parts(
        Some("root".to_owned()),
        Some("Superuser".to_owned()),
        Some("sekret".to_owned()),
    )
    .expect("valid registration");
    let user = registration.into_user(digest());

    let value = serde_json::to_value(&user).expect("serialize user");
    let object = value.as_object().expect("user object");
    assert_eq!(
        object.get("username").and_then(|v| v.as_str()),
        Some("root")
    );
    assert_eq!(
        object.get("name").and_then(|v| v.as_str()),
        Some("Superuser")
    );
    assert_eq!(object.len(), 2, "only username and name may be exposed");
}
