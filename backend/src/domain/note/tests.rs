//! Regression coverage for the note model.

use super::*;
use rstest::rstest;

#[rstest]
#[case("", NoteValidationError::EmptyId)]
#[case("asdf", NoteValidationError::MalformedId)]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa", NoteValidationError::MalformedId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", NoteValidationError::MalformedId)]
fn invalid_ids_are_classified_as_malformed(
    #[case] raw: &str,
    #[case] expected: NoteValidationError,
) {
    let err = NoteId::new(raw).expect_err("invalid id must fail");
    assert_eq!(err, expected);
}

#[rstest]
fn well_formed_ids_parse_and_round_trip() {
    let id = NoteId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    assert_eq!(id.as_ref(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    assert_eq!(id.to_string(), id.as_uuid().to_string());
}

#[rstest]
fn random_ids_are_unique() {
    assert_ne!(NoteId::random(), NoteId::random());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn blank_content_is_rejected(#[case] raw: &str) {
    let err = NoteContent::new(raw).expect_err("blank content must fail");
    assert_eq!(err, NoteValidationError::EmptyContent);
}

#[rstest]
fn draft_requires_content() {
    let err = NoteDraft::try_from_parts(None, Some(true)).expect_err("missing content");
    assert_eq!(err, NoteValidationError::MissingContent);
}

#[rstest]
#[case(None, false)]
#[case(Some(false), false)]
#[case(Some(true), true)]
fn draft_defaults_important_to_false(#[case] important: Option<bool>, #[case] expected: bool) {
    let draft = NoteDraft::try_from_parts(Some("HTML is easy".to_owned()), important)
        .expect("valid draft");
    assert_eq!(draft.important(), expected);
}

#[rstest]
fn note_serializes_flat_fields() {
    let note = Note::from_draft(
        NoteId::random(),
        NoteDraft::try_from_parts(Some("HTML is easy".to_owned()), None).expect("valid draft"),
    );
    let value = serde_json::to_value(&note).expect("serialize note");
    assert_eq!(
        value.get("content").and_then(|v| v.as_str()),
        Some("HTML is easy")
    );
    assert_eq!(value.get("important").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        value.get("id").and_then(|v| v.as_str()),
        Some(note.id().as_ref())
    );
}

#[rstest]
fn note_deserialization_revalidates_fields() {
    let err = serde_json::from_str::<Note>(r#"{"id":"asdf","content":"x","important":false}"#)
        .expect_err("malformed id must fail deserialization");
    assert!(err.to_string().contains("valid UUID"));
}
