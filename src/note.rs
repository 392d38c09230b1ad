//! The note record: one piece of text owned by a user.

use crate::common::{self, key};
use crate::error::{Error, Result};
use crate::record::{self, Record};

use aws_sdk_dynamodb::types;
use std::fmt;

/// Attribute holding the owning user.
pub const USER_ID: &str = "UserId";
/// Attribute holding the note number within the user's partition.
pub const NOTE_ID: &str = "NoteId";
/// Attribute holding the note body.
pub const TEXT: &str = "Note";

/// Default table notes are stored in.
pub const TABLE_NAME: &str = "Notes";

/// Fields of a note, as named in conditional updates.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NoteField {
    /// The partition key.
    UserId,
    /// The sort key.
    NoteId,
    /// The note body.
    Text,
}

/// Primary key of a note.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct NoteKey {
    /// Owning user, must not be empty.
    pub user_id: String,
    /// Note number, unique within the user.
    pub note_id: i32,
}

impl NoteKey {
    /// Build a key.
    pub fn new(user_id: impl Into<String>, note_id: i32) -> Self {
        Self {
            user_id: user_id.into(),
            note_id,
        }
    }
}

/// A note.
///
/// ```rust
/// use notes_crud::note::Note;
///
/// let note = Note::new("leoTest222", 222, "Insertion of element via java");
/// assert_eq!(note.to_string(), "note leoTest222/222: Insertion of element via java");
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Note {
    /// Owning user, must not be empty.
    pub user_id: String,
    /// Note number, unique within the user.
    pub note_id: i32,
    /// Note body, may be empty.
    pub text: String,
}

impl Note {
    /// Build a note.
    pub fn new(user_id: impl Into<String>, note_id: i32, text: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            note_id,
            text: text.into(),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "note {}/{}: {}", self.user_id, self.note_id, self.text)
    }
}

fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id.is_empty() {
        return Err(Error::Validation(format!("{USER_ID} must not be empty")));
    }
    Ok(())
}

impl Record for Note {
    type Key = NoteKey;
    type Field = NoteField;

    fn key_schema() -> key::KeySchema {
        key::KeySchema {
            partition_key: USER_ID.to_string(),
            sort_key: NOTE_ID.to_string(),
        }
    }

    fn attribute_name(field: NoteField) -> &'static str {
        match field {
            NoteField::UserId => USER_ID,
            NoteField::NoteId => NOTE_ID,
            NoteField::Text => TEXT,
        }
    }

    fn key(&self) -> NoteKey {
        NoteKey::new(self.user_id.clone(), self.note_id)
    }

    fn key_attributes(key: &NoteKey) -> Result<key::Keys> {
        validate_user_id(&key.user_id)?;
        let keys = key::Keys {
            partition_key: key::Key {
                name: USER_ID.to_string(),
                value: types::AttributeValue::S(key.user_id.clone()),
            },
            sort_key: key::Key {
                name: NOTE_ID.to_string(),
                value: types::AttributeValue::N(key.note_id.to_string()),
            },
        };
        Ok(keys)
    }

    fn validate(&self) -> Result<()> {
        validate_user_id(&self.user_id)
    }

    fn to_item(&self) -> common::Item {
        common::Item::from([
            (
                USER_ID.to_string(),
                types::AttributeValue::S(self.user_id.clone()),
            ),
            (
                NOTE_ID.to_string(),
                types::AttributeValue::N(self.note_id.to_string()),
            ),
            (TEXT.to_string(), types::AttributeValue::S(self.text.clone())),
        ])
    }

    fn from_item(mut item: common::Item) -> Result<Self> {
        let note = Self {
            user_id: record::take_string(&mut item, USER_ID)?,
            note_id: record::take_number(&mut item, NOTE_ID)?,
            text: record::take_optional_string(&mut item, TEXT)?.unwrap_or_default(),
        };
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::user_id(NoteField::UserId, "UserId")]
    #[case::note_id(NoteField::NoteId, "NoteId")]
    #[case::text(NoteField::Text, "Note")]
    fn test_attribute_name(#[case] field: NoteField, #[case] expected: &str) {
        assert_eq!(Note::attribute_name(field), expected);
    }

    #[test]
    fn test_to_item() {
        let note = Note::new("leoTest222", 222, "Insertion of element via java");
        let expected = common::Item::from([
            (
                "UserId".to_string(),
                types::AttributeValue::S("leoTest222".to_string()),
            ),
            (
                "NoteId".to_string(),
                types::AttributeValue::N("222".to_string()),
            ),
            (
                "Note".to_string(),
                types::AttributeValue::S("Insertion of element via java".to_string()),
            ),
        ]);
        assert_eq!(note.to_item(), expected);
    }

    #[rstest]
    #[case::full(Note::new("a", -7, "b"))]
    #[case::empty_text(Note::new("a", 0, ""))]
    fn test_item_round_trip(#[case] note: Note) {
        assert_eq!(Note::from_item(note.to_item()).unwrap(), note);
    }

    #[test]
    fn test_from_item_without_text() {
        let item = common::Item::from([
            ("UserId".to_string(), types::AttributeValue::S("a".to_string())),
            ("NoteId".to_string(), types::AttributeValue::N("1".to_string())),
        ]);
        assert_eq!(Note::from_item(item).unwrap(), Note::new("a", 1, ""));
    }

    #[rstest]
    #[case::missing_note_id(
        common::Item::from([
            ("UserId".to_string(), types::AttributeValue::S("a".to_string())),
        ])
    )]
    #[case::string_note_id(
        common::Item::from([
            ("UserId".to_string(), types::AttributeValue::S("a".to_string())),
            ("NoteId".to_string(), types::AttributeValue::S("1".to_string())),
        ])
    )]
    #[case::numeric_text(
        common::Item::from([
            ("UserId".to_string(), types::AttributeValue::S("a".to_string())),
            ("NoteId".to_string(), types::AttributeValue::N("1".to_string())),
            ("Note".to_string(), types::AttributeValue::N("2".to_string())),
        ])
    )]
    fn test_from_item_rejects_malformed(#[case] item: common::Item) {
        assert!(matches!(Note::from_item(item), Err(Error::Mapping(_))));
    }

    #[test]
    fn test_key_attributes() {
        let keys = Note::key_attributes(&NoteKey::new("newbie", 1)).unwrap();
        let item: common::Item = keys.into();
        assert_eq!(
            item,
            common::Item::from([
                ("UserId".to_string(), types::AttributeValue::S("newbie".to_string())),
                ("NoteId".to_string(), types::AttributeValue::N("1".to_string())),
            ])
        );
    }

    #[test]
    fn test_empty_user_id_is_rejected() {
        assert!(matches!(
            Note::key_attributes(&NoteKey::new("", 1)),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            Note::new("", 1, "text").validate(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_key_schema_matches_item() {
        let note = Note::new("a", 3, "b");
        let keys = Note::key_schema().keys_of(&note.to_item()).unwrap();
        assert_eq!(keys, Note::key_attributes(&note.key()).unwrap());
    }
}
