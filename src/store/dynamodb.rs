use crate::common::{self, condition, key};
use crate::error::{self, Result};
use crate::read::{self, common::Consistency};
use crate::store::Store;
use crate::write;

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types};

/// Store backed by one DynamoDB table.
///
/// The client is cheap to clone and safe to share, so build it once at startup
/// and hand clones to every store that needs it.
///
/// ```rust,no_run
/// use notes_crud::{config::Config, store::DynamoStore};
///
/// # async fn example() {
/// let config = Config::from_env();
/// let store = DynamoStore::new(config.client().await, config.table_name);
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Create a store over `table_name` using an existing client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// The table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl DynamoStore {
    fn get_item(&self, keys: key::Keys, consistency: Consistency) -> read::get_item::GetItem {
        read::get_item::GetItem {
            keys,
            single_read_args: read::common::SingleReadArgs {
                consistency,
                table_name: self.table_name.clone(),
            },
        }
    }

    fn put_item(
        &self,
        item: common::Item,
        condition: Option<condition::ConditionGroup>,
    ) -> write::put_item::PutItem {
        write::put_item::PutItem {
            item,
            write_args: write::common::WriteArgs {
                condition,
                table_name: self.table_name.clone(),
                ..Default::default()
            },
        }
    }

    fn delete_item(&self, keys: key::Keys) -> write::delete_item::DeleteItem {
        write::delete_item::DeleteItem {
            keys,
            write_args: write::common::WriteArgs {
                return_values: Some(types::ReturnValue::AllOld),
                table_name: self.table_name.clone(),
                ..Default::default()
            },
        }
    }
}

/// Whether a delete returning `ALL_OLD` attributes removed an item.
fn was_removed(attributes: Option<common::Item>) -> bool {
    attributes.is_some_and(|attributes| !attributes.is_empty())
}

#[async_trait]
impl Store for DynamoStore {
    async fn get(
        &self,
        keys: key::Keys,
        consistency: Consistency,
    ) -> Result<Option<common::Item>> {
        let output = self
            .get_item(keys, consistency)
            .send(&self.client)
            .await
            .map_err(error::from_get_item_error)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            table = %self.table_name,
            ?consistency,
            found = output.item.is_some(),
            "dynamodb get_item"
        );
        Ok(output.item)
    }

    async fn put(
        &self,
        item: common::Item,
        condition: Option<condition::ConditionGroup>,
    ) -> Result<()> {
        let attributes = condition
            .as_ref()
            .map(condition::ConditionGroup::attribute_names)
            .unwrap_or_default();
        self.put_item(item, condition)
            .send(&self.client)
            .await
            .map_err(|err| error::from_put_item_error(err, attributes))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(table = %self.table_name, "dynamodb put_item");
        Ok(())
    }

    async fn delete(&self, keys: key::Keys) -> Result<bool> {
        let output = self
            .delete_item(keys)
            .send(&self.client)
            .await
            .map_err(error::from_delete_item_error)?;
        let removed = was_removed(output.attributes);
        #[cfg(feature = "tracing")]
        tracing::debug!(table = %self.table_name, removed, "dynamodb delete_item");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::config;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> DynamoStore {
        let config = config::Config::builder()
            .behavior_version(config::BehaviorVersion::latest())
            .build();
        DynamoStore::new(Client::from_conf(config), "Notes")
    }

    fn keys() -> key::Keys {
        key::Keys {
            partition_key: key::Key {
                name: "UserId".to_string(),
                value: types::AttributeValue::S("newbie".to_string()),
            },
            sort_key: key::Key {
                name: "NoteId".to_string(),
                value: types::AttributeValue::N("1".to_string()),
            },
        }
    }

    #[rstest]
    #[case::eventual(Consistency::Eventual)]
    #[case::strong(Consistency::Strong)]
    fn test_get_item_carries_consistency(store: DynamoStore, #[case] consistency: Consistency) {
        let expected = read::get_item::GetItem {
            keys: keys(),
            single_read_args: read::common::SingleReadArgs {
                consistency,
                table_name: "Notes".to_string(),
            },
        };
        assert_eq!(store.get_item(keys(), consistency), expected);
    }

    #[rstest]
    #[case::unconditional(None)]
    #[case::conditional(Some(condition::ConditionGroup::equals(
        "Note",
        types::AttributeValue::S("old".to_string()),
    )))]
    fn test_put_item_carries_condition(
        store: DynamoStore,
        #[case] condition: Option<condition::ConditionGroup>,
    ) {
        let item: common::Item = keys().into();
        let expected = write::put_item::PutItem {
            item: item.clone(),
            write_args: write::common::WriteArgs {
                condition: condition.clone(),
                return_values: None,
                table_name: "Notes".to_string(),
            },
        };
        assert_eq!(store.put_item(item, condition), expected);
    }

    #[rstest]
    fn test_delete_item_asks_for_old_attributes(store: DynamoStore) {
        let expected = write::delete_item::DeleteItem {
            keys: keys(),
            write_args: write::common::WriteArgs {
                return_values: Some(types::ReturnValue::AllOld),
                table_name: "Notes".to_string(),
                ..Default::default()
            },
        };
        assert_eq!(store.delete_item(keys()), expected);
    }

    #[rstest]
    #[case::nothing_returned(None, false)]
    #[case::empty_attributes(Some(common::Item::new()), false)]
    #[case::old_item_returned(Some(keys().into()), true)]
    fn test_was_removed(#[case] attributes: Option<common::Item>, #[case] expected: bool) {
        assert_eq!(was_removed(attributes), expected);
    }
}
