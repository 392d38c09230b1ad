//! Storage collaborators.
//!
//! A [`Store`] is one table addressed by a composite primary key. It offers point
//! reads, full-item writes, point deletes, and writes guarded by a condition that
//! the store checks and applies atomically.

/// DynamoDB-backed store.
pub mod dynamodb;

/// In-process store with the same contract, for tests and local runs.
pub mod memory;

pub use dynamodb::DynamoStore;
pub use memory::MemoryStore;

use crate::common::{self, condition, key};
use crate::error::Result;
use crate::read::common::Consistency;

use async_trait::async_trait;
use std::sync;

/// One table holding items under a composite primary key.
#[async_trait]
pub trait Store: Send + Sync {
    /// Read the item stored under `keys`, if any.
    async fn get(
        &self,
        keys: key::Keys,
        consistency: Consistency,
    ) -> Result<Option<common::Item>>;

    /// Write `item`, replacing whatever is stored under its key.
    ///
    /// With a condition, the write applies only if the condition holds against the
    /// stored item at the moment of the write. Otherwise it fails with
    /// `Error::PreconditionFailed` and nothing changes.
    async fn put(
        &self,
        item: common::Item,
        condition: Option<condition::ConditionGroup>,
    ) -> Result<()>;

    /// Remove the item stored under `keys`. Returns whether an item was removed.
    async fn delete(&self, keys: key::Keys) -> Result<bool>;
}

#[async_trait]
impl<S: Store + ?Sized> Store for sync::Arc<S> {
    async fn get(
        &self,
        keys: key::Keys,
        consistency: Consistency,
    ) -> Result<Option<common::Item>> {
        (**self).get(keys, consistency).await
    }

    async fn put(
        &self,
        item: common::Item,
        condition: Option<condition::ConditionGroup>,
    ) -> Result<()> {
        (**self).put(item, condition).await
    }

    async fn delete(&self, keys: key::Keys) -> Result<bool> {
        (**self).delete(keys).await
    }
}

#[async_trait]
impl<S: Store + ?Sized> Store for &S {
    async fn get(
        &self,
        keys: key::Keys,
        consistency: Consistency,
    ) -> Result<Option<common::Item>> {
        (**self).get(keys, consistency).await
    }

    async fn put(
        &self,
        item: common::Item,
        condition: Option<condition::ConditionGroup>,
    ) -> Result<()> {
        (**self).put(item, condition).await
    }

    async fn delete(&self, keys: key::Keys) -> Result<bool> {
        (**self).delete(keys).await
    }
}
