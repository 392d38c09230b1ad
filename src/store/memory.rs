use crate::common::{self, condition, key};
use crate::error::{Error, Result};
use crate::read::common::Consistency;
use crate::record::Record;
use crate::store::Store;

use async_trait::async_trait;
use aws_sdk_dynamodb::types;
use std::{collections, sync};
use tokio::sync::RwLock;

/// Hashable form of a key attribute value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
enum ScalarKey {
    B(Vec<u8>),
    N(String),
    S(String),
}

impl ScalarKey {
    fn from_value(name: &str, value: &types::AttributeValue) -> Result<Self> {
        match value {
            types::AttributeValue::S(value) => Ok(Self::S(value.clone())),
            types::AttributeValue::N(value) => Ok(Self::N(value.clone())),
            types::AttributeValue::B(value) => Ok(Self::B(value.as_ref().to_vec())),
            _ => Err(Error::Validation(format!(
                "key attribute {name} must be a string, number or binary"
            ))),
        }
    }
}

type PrimaryKey = (ScalarKey, ScalarKey);

/// In-memory table.
///
/// Every read is strongly consistent. A conditional put checks its condition and
/// writes under the same lock, so racing conditional writers are serialized and
/// at most one of them sees the value they expected. Clones share the same table.
///
/// ```rust
/// use notes_crud::{note::Note, store::MemoryStore};
///
/// let store = MemoryStore::for_record::<Note>();
/// assert_eq!(store.key_schema().partition_key, "UserId");
/// ```
#[derive(Clone, Debug)]
pub struct MemoryStore {
    key_schema: key::KeySchema,
    items: sync::Arc<RwLock<collections::HashMap<PrimaryKey, common::Item>>>,
}

impl MemoryStore {
    /// Create an empty table with the given key attributes.
    pub fn new(key_schema: key::KeySchema) -> Self {
        Self {
            key_schema,
            items: Default::default(),
        }
    }

    /// Create an empty table keyed the way `R` expects.
    pub fn for_record<R: Record>() -> Self {
        Self::new(R::key_schema())
    }

    /// The key attributes of the table.
    pub fn key_schema(&self) -> &key::KeySchema {
        &self.key_schema
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the table holds no items.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    fn primary_key(&self, keys: &key::Keys) -> Result<PrimaryKey> {
        for (expected, actual) in [
            (&self.key_schema.partition_key, &keys.partition_key.name),
            (&self.key_schema.sort_key, &keys.sort_key.name),
        ] {
            if expected != actual {
                return Err(Error::Validation(format!(
                    "key attribute {actual} does not match the table key {expected}"
                )));
            }
        }
        let partition =
            ScalarKey::from_value(&keys.partition_key.name, &keys.partition_key.value)?;
        let sort = ScalarKey::from_value(&keys.sort_key.name, &keys.sort_key.value)?;
        Ok((partition, sort))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(
        &self,
        keys: key::Keys,
        _consistency: Consistency,
    ) -> Result<Option<common::Item>> {
        let primary_key = self.primary_key(&keys)?;
        let items = self.items.read().await;
        Ok(items.get(&primary_key).cloned())
    }

    async fn put(
        &self,
        item: common::Item,
        condition: Option<condition::ConditionGroup>,
    ) -> Result<()> {
        let keys = self.key_schema.keys_of(&item).ok_or_else(|| {
            Error::Validation(format!(
                "item must hold key attributes {} and {}",
                self.key_schema.partition_key, self.key_schema.sort_key
            ))
        })?;
        let primary_key = self.primary_key(&keys)?;
        let mut items = self.items.write().await;
        if let Some(condition) = condition {
            if !condition.holds(items.get(&primary_key)) {
                return Err(Error::PreconditionFailed {
                    attributes: condition.attribute_names(),
                });
            }
        }
        items.insert(primary_key, item);
        Ok(())
    }

    async fn delete(&self, keys: key::Keys) -> Result<bool> {
        let primary_key = self.primary_key(&keys)?;
        let mut items = self.items.write().await;
        Ok(items.remove(&primary_key).is_some())
    }
}
