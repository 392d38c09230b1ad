use crate::common;

use aws_sdk_dynamodb::types;

/// Key component.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use notes_crud::common::key;
///
/// let key = key::Key {
///     name: "UserId".to_string(),
///     value: AttributeValue::S("leoTest222".to_string()),
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Key {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: types::AttributeValue,
}

/// Composite primary key (partition key and sort key).
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use notes_crud::common::key;
///
/// let keys = key::Keys {
///     partition_key: key::Key {
///         name: "UserId".to_string(),
///         value: AttributeValue::S("leoTest222".to_string()),
///     },
///     sort_key: key::Key {
///         name: "NoteId".to_string(),
///         value: AttributeValue::N("222".to_string()),
///     },
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Keys {
    /// The partition key.
    pub partition_key: Key,
    /// The sort key.
    pub sort_key: Key,
}

impl From<Keys> for common::Item {
    fn from(keys: Keys) -> Self {
        Self::from([
            (keys.partition_key.name, keys.partition_key.value),
            (keys.sort_key.name, keys.sort_key.value),
        ])
    }
}

/// Names of the key attributes of a table.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct KeySchema {
    /// The partition key attribute name.
    pub partition_key: String,
    /// The sort key attribute name.
    pub sort_key: String,
}

impl KeySchema {
    /// Extract the primary key of an item, if both key attributes are present.
    pub fn keys_of(&self, item: &common::Item) -> Option<Keys> {
        let partition_value = item.get(&self.partition_key)?;
        let sort_value = item.get(&self.sort_key)?;
        let keys = Keys {
            partition_key: Key {
                name: self.partition_key.clone(),
                value: partition_value.clone(),
            },
            sort_key: Key {
                name: self.sort_key.clone(),
                value: sort_value.clone(),
            },
        };
        Some(keys)
    }
}
