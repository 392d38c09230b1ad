use crate::{common, write};

use aws_sdk_dynamodb::{Client, error, operation};

/// delete item operation
#[derive(Debug, PartialEq)]
struct DeleteItemInput {
    keys: common::Item,
    write_operation: write::common::WriteInput,
}

/// Delete item operation.
///
/// Deleting a key that holds no item succeeds and changes nothing.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types::AttributeValue};
/// use notes_crud::{common, write};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let delete_item = write::delete_item::DeleteItem {
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
///     write_args: write::common::WriteArgs {
///         table_name: "Notes".to_string(),
///         ..Default::default()
///     },
/// };
/// delete_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
pub struct DeleteItem {
    /// The primary key of the item to delete.
    pub keys: common::key::Keys,
    /// Additional write operation arguments (table name, condition, return values).
    pub write_args: write::common::WriteArgs,
}

impl From<DeleteItem> for DeleteItemInput {
    fn from(delete_item: DeleteItem) -> Self {
        Self {
            keys: delete_item.keys.into(),
            write_operation: delete_item.write_args.into(),
        }
    }
}

impl DeleteItem {
    /// Execute the delete item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::delete_item::DeleteItemOutput,
        error::SdkError<operation::delete_item::DeleteItemError>,
    > {
        let delete_item: DeleteItemInput = self.into();
        let builder = client.delete_item().set_key(Some(delete_item.keys));
        crate::apply_write_operation!(builder, delete_item.write_operation)
            .send()
            .await
    }
}
