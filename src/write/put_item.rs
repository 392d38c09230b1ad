use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation};

/// put item operation
#[derive(Debug, PartialEq)]
struct PutItemInput {
    item: common::Item,
    write_operation: write::common::WriteInput,
}

/// Put item operation.
///
/// The item replaces whatever is stored under its primary key. With a condition,
/// the replacement only happens if the condition holds against the stored item.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types::AttributeValue};
/// use notes_crud::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let put_item = write::put_item::PutItem {
///     item: common::Item::from([
///         ("UserId".to_string(), AttributeValue::S("newbie".to_string())),
///         ("NoteId".to_string(), AttributeValue::N("1".to_string())),
///         ("Note".to_string(), AttributeValue::S("new text".to_string())),
///     ]),
///     write_args: write::common::WriteArgs {
///         condition: Some(common::condition::ConditionGroup::equals(
///             "Note",
///             AttributeValue::S("old text".to_string()),
///         )),
///         table_name: "Notes".to_string(),
///         ..Default::default()
///     },
/// };
/// put_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
pub struct PutItem {
    /// The item to put into the table.
    pub item: common::Item,
    /// Additional write operation arguments (table name, condition, return values).
    pub write_args: write::common::WriteArgs,
}

impl From<PutItem> for PutItemInput {
    fn from(put_item: PutItem) -> Self {
        Self {
            item: put_item.item,
            write_operation: put_item.write_args.into(),
        }
    }
}

impl PutItem {
    /// Execute the put item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::put_item::PutItemOutput,
        error::SdkError<operation::put_item::PutItemError>,
    > {
        let put_item: PutItemInput = self.into();
        let builder = client.put_item().set_item(Some(put_item.item));
        crate::apply_write_operation!(builder, put_item.write_operation)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;
    use std::collections;

    #[rstest]
    #[case::unconditional(
        PutItem {
            item: common::Item::from(
                [(
                    "a".to_string(),
                    types::AttributeValue::S(
                        "b".to_string()
                    ),
                )]
            ),
            write_args: write::common::WriteArgs {
                table_name: "c".to_string(),
                ..Default::default()
            },
        },
        PutItemInput {
            item: common::Item::from(
                [(
                    "a".to_string(),
                    types::AttributeValue::S(
                        "b".to_string()
                    ),
                )]
            ),
            write_operation: write::common::WriteInput {
                table_name: "c".to_string(),
                ..Default::default()
            },
        }
    )]
    #[case::conditional(
        PutItem {
            item: common::Item::from(
                [(
                    "a".to_string(),
                    types::AttributeValue::S(
                        "b".to_string()
                    ),
                )]
            ),
            write_args: write::common::WriteArgs {
                condition: Some(
                    common::condition::ConditionGroup::equals(
                        "c",
                        types::AttributeValue::S(
                            "d".to_string()
                        ),
                    )
                ),
                return_values: Some(
                    types::ReturnValue::AllOld
                ),
                table_name: "e".to_string(),
            },
        },
        PutItemInput {
            item: common::Item::from(
                [(
                    "a".to_string(),
                    types::AttributeValue::S(
                        "b".to_string()
                    ),
                )]
            ),
            write_operation: write::common::WriteInput {
                condition_expression: Some(
                    "#c = :c_eq0".to_string()
                ),
                expression_attribute_names: Some(
                    collections::HashMap::from(
                        [
                            ("#c".to_string(), "c".to_string()),
                        ]
                    )
                ),
                expression_attribute_values: Some(
                    collections::HashMap::from(
                        [
                            (
                                ":c_eq0".to_string(),
                                types::AttributeValue::S(
                                    "d".to_string()
                                )
                            ),
                        ]
                    )
                ),
                return_values: Some(
                    types::ReturnValue::AllOld
                ),
                table_name: "e".to_string(),
            },
        }
    )]
    fn test_put_item(#[case] args: PutItem, #[case] expected: PutItemInput) {
        let actual: PutItemInput = args.into();
        assert_eq!(actual, expected);
    }
}
