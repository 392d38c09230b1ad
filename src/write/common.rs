use crate::common;

use aws_sdk_dynamodb::types;
use std::collections;

/// Internal representation of write operation parameters.
///
/// This is an internal type that holds the processed write operation parameters
/// after conversion from the public `WriteArgs` type. It contains the fully
/// resolved expression strings and attribute mappings ready for DynamoDB API calls.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct WriteInput {
    pub(crate) condition_expression: Option<String>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) expression_attribute_values:
        Option<collections::HashMap<String, types::AttributeValue>>,
    pub(crate) return_values: Option<types::ReturnValue>,
    pub(crate) table_name: String,
}

/// Arguments common to all write operations (Put, Delete).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteArgs {
    /// Condition that must hold for the operation to succeed.
    ///
    /// DynamoDB evaluates the condition and applies the write in one atomic step.
    /// If the condition is false, the operation fails with a conditional check error
    /// and the stored item is left untouched. A group without conditions is an
    /// unconditional write.
    pub condition: Option<common::condition::ConditionGroup>,
    /// Which item attributes to return in the response.
    ///
    /// Put and Delete accept `AllOld` or `None`.
    pub return_values: Option<types::ReturnValue>,
    /// The name of the table to write to.
    pub table_name: String,
}

impl From<WriteArgs> for WriteInput {
    fn from(write_args: WriteArgs) -> Self {
        let (condition_expression, expression_attribute_names, expression_attribute_values) =
            match write_args
                .condition
                .filter(|condition| !condition.conditions.is_empty())
            {
                Some(condition) => {
                    let condition_operation: common::ExpressionInput = condition.into();
                    let expression_attribute_values =
                        if condition_operation.expression_attribute_values.is_empty() {
                            None
                        } else {
                            Some(condition_operation.expression_attribute_values)
                        };
                    (
                        Some(condition_operation.expression),
                        Some(condition_operation.expression_attribute_names),
                        expression_attribute_values,
                    )
                }
                None => (None, None, None),
            };
        Self {
            condition_expression,
            expression_attribute_names,
            expression_attribute_values,
            return_values: write_args.return_values,
            table_name: write_args.table_name,
        }
    }
}

/// apply common write operation settings to a builder
#[macro_export]
macro_rules! apply_write_operation {
    ($builder:expr, $write_operation:expr) => {
        $builder
            .set_condition_expression($write_operation.condition_expression)
            .set_expression_attribute_names($write_operation.expression_attribute_names)
            .set_expression_attribute_values($write_operation.expression_attribute_values)
            .set_return_values($write_operation.return_values)
            .table_name($write_operation.table_name)
    };
}
