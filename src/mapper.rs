//! The record access layer.
//!
//! A [`Mapper`] translates typed records to and from the generic items of a
//! [`Store`] and performs one store call per operation. It keeps no state of its
//! own besides the store handle, so it can be shared freely between tasks.

use crate::common::condition;
use crate::error::Result;
use crate::read::common::Consistency;
use crate::record::Record;
use crate::store::Store;

use serde::Serialize;
use serde_dynamo::to_attribute_value;

/// Typed save, load, update, delete and conditional update over one store.
///
/// ```rust
/// use notes_crud::{
///     mapper::Mapper,
///     note::{Note, NoteField, NoteKey},
///     read::common::Consistency,
///     store::MemoryStore,
/// };
///
/// # #[tokio::main]
/// # async fn main() -> notes_crud::error::Result<()> {
/// let mapper = Mapper::new(MemoryStore::for_record::<Note>());
/// mapper.save(&Note::new("newbie", 1, "old text")).await?;
/// mapper
///     .conditional_update(&Note::new("newbie", 1, "new text"), NoteField::Text, "old text")
///     .await?;
/// let note = mapper
///     .load::<Note>(&NoteKey::new("newbie", 1), Consistency::Strong)
///     .await?;
/// assert_eq!(note.map(|note| note.text), Some("new text".to_string()));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Mapper<S> {
    store: S,
}

impl<S: Store> Mapper<S> {
    /// Create a mapper over a store handle.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the mapper, returning the store handle.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Write a record, creating it or replacing the stored one entirely.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "notes_crud.save", skip(self), err)
    )]
    pub async fn save<R: Record>(&self, record: &R) -> Result<()> {
        record.validate()?;
        self.store.put(record.to_item(), None).await
    }

    /// Read the record stored under `key`. `None` means there is no such record.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "notes_crud.load", skip(self), err)
    )]
    pub async fn load<R: Record>(
        &self,
        key: &R::Key,
        consistency: Consistency,
    ) -> Result<Option<R>> {
        let keys = R::key_attributes(key)?;
        match self.store.get(keys, consistency).await? {
            Some(item) => Ok(Some(R::from_item(item)?)),
            None => Ok(None),
        }
    }

    /// Replace a stored record with a new state of it.
    ///
    /// Behaves exactly like [`Mapper::save`]: every attribute is rewritten.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "notes_crud.update", skip(self), err)
    )]
    pub async fn update<R: Record>(&self, record: &R) -> Result<()> {
        record.validate()?;
        self.store.put(record.to_item(), None).await
    }

    /// Remove the record stored under `key`. Removing a missing record succeeds.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "notes_crud.delete", skip(self), err)
    )]
    pub async fn delete<R: Record>(&self, key: &R::Key) -> Result<()> {
        let keys = R::key_attributes(key)?;
        let removed = self.store.delete(keys).await?;
        if !removed {
            #[cfg(feature = "tracing")]
            tracing::debug!(?key, "nothing stored under key");
        }
        Ok(())
    }

    /// Replace a stored record only if its `field` currently holds `expected`.
    ///
    /// The comparison and the write happen in one atomic store call. When the
    /// stored value differs, or nothing is stored, the call fails with
    /// `Error::PreconditionFailed` and the stored record is unchanged. The
    /// expected value must come from the caller's own knowledge of the record.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "notes_crud.conditional_update", skip(self, expected), err)
    )]
    pub async fn conditional_update<R, V>(
        &self,
        record: &R,
        field: R::Field,
        expected: V,
    ) -> Result<()>
    where
        R: Record,
        V: Serialize + Send,
    {
        record.validate()?;
        let expected = to_attribute_value(expected)?;
        let condition = condition::ConditionGroup::equals(R::attribute_name(field), expected);
        self.store.put(record.to_item(), Some(condition)).await
    }
}
