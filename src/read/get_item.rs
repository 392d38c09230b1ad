use crate::{common, read};

use aws_sdk_dynamodb::{Client, error, operation};

/// get item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct GetItemInput {
    keys: common::Item,
    single_read_operation: read::common::SingleReadInput,
}

/// Get item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types::AttributeValue};
/// use notes_crud::{common, read};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let get_item = read::get_item::GetItem {
///     keys: common::key::Keys {
///         partition_key: common::key::Key {
///             name: "UserId".to_string(),
///             value: AttributeValue::S("leoTest222".to_string()),
///         },
///         sort_key: common::key::Key {
///             name: "NoteId".to_string(),
///             value: AttributeValue::N("222".to_string()),
///         },
///     },
///     single_read_args: read::common::SingleReadArgs {
///         consistency: read::common::Consistency::Strong,
///         table_name: "Notes".to_string(),
///     },
/// };
/// let output = get_item.send(client).await?;
/// println!("{:?}", output.item);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GetItem {
    /// The primary key of the item to retrieve.
    pub keys: common::key::Keys,
    /// Additional read operation arguments (table name, consistency).
    pub single_read_args: read::common::SingleReadArgs,
}

impl From<GetItem> for GetItemInput {
    fn from(get_item: GetItem) -> Self {
        Self {
            keys: get_item.keys.into(),
            single_read_operation: get_item.single_read_args.into(),
        }
    }
}

impl GetItem {
    /// Execute the get item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::get_item::GetItemOutput,
        error::SdkError<operation::get_item::GetItemError>,
    > {
        let get_item: GetItemInput = self.into();
        let builder = client.get_item().set_key(Some(get_item.keys));
        crate::apply_single_read_operation!(builder, get_item.single_read_operation)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;

    #[rstest]
    #[case::eventual(
        GetItem {
            keys: common::key::Keys {
                partition_key: common::key::Key {
                    name: "a".to_string(),
                    value: types::AttributeValue::S(
                        "b".to_string()
                    ),
                },
                sort_key: common::key::Key {
                    name: "c".to_string(),
                    value: types::AttributeValue::N(
                        "1".to_string()
                    ),
                },
            },
            single_read_args: read::common::SingleReadArgs {
                table_name: "d".to_string(),
                ..Default::default()
            },
        },
        GetItemInput {
            keys: common::Item::from(
                [
                    (
                        "a".to_string(),
                        types::AttributeValue::S(
                            "b".to_string()
                        )
                    ),
                    (
                        "c".to_string(),
                        types::AttributeValue::N(
                            "1".to_string()
                        )
                    ),
                ]
            ),
            single_read_operation: read::common::SingleReadInput {
                consistent_read: Some(false),
                table_name: "d".to_string(),
            },
        }
    )]
    #[case::strong(
        GetItem {
            keys: common::key::Keys {
                partition_key: common::key::Key {
                    name: "a".to_string(),
                    value: types::AttributeValue::S(
                        "b".to_string()
                    ),
                },
                sort_key: common::key::Key {
                    name: "c".to_string(),
                    value: types::AttributeValue::S(
                        "e".to_string()
                    ),
                },
            },
            single_read_args: read::common::SingleReadArgs {
                consistency: read::common::Consistency::Strong,
                table_name: "d".to_string(),
            },
        },
        GetItemInput {
            keys: common::Item::from(
                [
                    (
                        "a".to_string(),
                        types::AttributeValue::S(
                            "b".to_string()
                        )
                    ),
                    (
                        "c".to_string(),
                        types::AttributeValue::S(
                            "e".to_string()
                        )
                    ),
                ]
            ),
            single_read_operation: read::common::SingleReadInput {
                consistent_read: Some(true),
                table_name: "d".to_string(),
            },
        }
    )]
    fn test_get_item(#[case] args: GetItem, #[case] expected: GetItemInput) {
        let actual: GetItemInput = args.into();
        assert_eq!(actual, expected);
    }
}
