//! Common building blocks for DynamoDB requests.
//!
//! This module provides the key and condition types shared by the read and write
//! operations, together with the expression plumbing that turns them into
//! placeholder-based DynamoDB expressions.

/// Condition expressions for conditional writes.
pub mod condition;

/// Key types for identifying items in a table with a composite primary key.
pub mod key;

use aws_sdk_dynamodb::types;
use std::collections;

/// Generic attribute map of a stored item.
pub type Item = collections::HashMap<String, types::AttributeValue>;

pub(crate) fn name_placeholder(name: &str) -> String {
    format!("#{name}")
}

fn get_expression(left: String, operator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{operator}{right}")
    }
}

/// expression operation
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    pub(crate) fn merge(operator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            operation.expression = get_expression(operation.expression, operator, item.expression);
        }
        operation
    }
}
