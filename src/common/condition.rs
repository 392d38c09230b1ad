use crate::common;

use aws_sdk_dynamodb::types;
use std::{collections, ops};

/// Logical operator for combining conditions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogicalOperator {
    /// Logical AND - all conditions must be true.
    #[default]
    And,
    /// Logical OR - at least one condition must be true.
    Or,
}

impl ops::Deref for LogicalOperator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// Condition on the current stored value of one attribute.
///
/// A comparison against an attribute the item does not have is false, whatever
/// the operator, so `Equals` on a missing item never holds.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use notes_crud::common::condition;
///
/// let eq = condition::Condition::Equals(AttributeValue::S("old text".to_string()));
/// let absent = condition::Condition::Null;
/// assert!(eq.holds(Some(&AttributeValue::S("old text".to_string()))));
/// assert!(absent.holds(None));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// Checks if an attribute value equals a specified value.
    Equals(types::AttributeValue),
    /// Checks if an attribute value does not equal a specified value.
    NotEqual(types::AttributeValue),
    /// Checks if an attribute exists.
    NotNull,
    /// Checks if an attribute does not exist.
    Null,
}

impl Condition {
    fn get_expression(
        self,
        key: &str,
        key_placeholder: &str,
        index: &mut usize,
    ) -> (String, collections::HashMap<String, types::AttributeValue>) {
        let mut expression_attribute_values = collections::HashMap::new();
        let expression = match self {
            Self::Equals(value) => {
                let value_placeholder = format!(":{key}_eq{index}");
                *index += 1;
                let expression = format!("{key_placeholder} = {value_placeholder}");
                expression_attribute_values.insert(value_placeholder, value);
                expression
            }
            Self::NotEqual(value) => {
                let value_placeholder = format!(":{key}_ne{index}");
                *index += 1;
                let expression = format!("{key_placeholder} <> {value_placeholder}");
                expression_attribute_values.insert(value_placeholder, value);
                expression
            }
            Self::NotNull => format!("attribute_exists({key_placeholder})"),
            Self::Null => format!("attribute_not_exists({key_placeholder})"),
        };
        (expression, expression_attribute_values)
    }

    /// Evaluate the condition against the current value of the attribute.
    ///
    /// Values compare by their raw representation, so numbers must be written
    /// in the same canonical form on both sides.
    pub fn holds(&self, current: Option<&types::AttributeValue>) -> bool {
        match (self, current) {
            (Self::Equals(expected), Some(current)) => current == expected,
            (Self::NotEqual(expected), Some(current)) => current != expected,
            (Self::Equals(_) | Self::NotEqual(_), None) => false,
            (Self::NotNull, current) => current.is_some(),
            (Self::Null, current) => current.is_none(),
        }
    }
}

/// Condition applied to an attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyCondition {
    /// The condition to apply to the attribute.
    pub condition: Condition,
    /// The name of the attribute to apply the condition to.
    pub name: String,
}

/// Conditions combined with one logical operator.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use notes_crud::common::condition;
///
/// let group = condition::ConditionGroup::equals(
///     "Note",
///     AttributeValue::S("old text".to_string()),
/// );
/// assert_eq!(group.attribute_names(), vec!["Note".to_string()]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConditionGroup {
    /// The operator joining the conditions.
    pub operator: LogicalOperator,
    /// The conditions, rendered in order.
    pub conditions: Vec<KeyCondition>,
}

impl ConditionGroup {
    /// A group holding a single equality check.
    pub fn equals(name: impl Into<String>, value: types::AttributeValue) -> Self {
        Self {
            operator: LogicalOperator::And,
            conditions: vec![KeyCondition {
                name: name.into(),
                condition: Condition::Equals(value),
            }],
        }
    }

    /// Names of the attributes the group checks, in order.
    pub fn attribute_names(&self) -> Vec<String> {
        self.conditions
            .iter()
            .map(|key_condition| key_condition.name.clone())
            .collect()
    }

    /// Evaluate the group against a stored item, or against no item at all.
    ///
    /// An empty group always holds.
    pub fn holds(&self, item: Option<&common::Item>) -> bool {
        let mut results = self.conditions.iter().map(|key_condition| {
            let current = item.and_then(|item| item.get(&key_condition.name));
            key_condition.condition.holds(current)
        });
        match self.operator {
            LogicalOperator::And => results.all(|holds| holds),
            LogicalOperator::Or => self.conditions.is_empty() || results.any(|holds| holds),
        }
    }
}

impl From<ConditionGroup> for common::ExpressionInput {
    fn from(group: ConditionGroup) -> Self {
        let mut index = 0;
        let operations = group
            .conditions
            .into_iter()
            .map(|key_condition| {
                let placeholder = common::name_placeholder(&key_condition.name);
                let (expression, expression_attribute_values) = key_condition
                    .condition
                    .get_expression(&key_condition.name, &placeholder, &mut index);
                common::ExpressionInput {
                    expression,
                    expression_attribute_names: collections::HashMap::from([(
                        placeholder,
                        key_condition.name,
                    )]),
                    expression_attribute_values,
                }
            })
            .collect();
        common::ExpressionInput::merge(&group.operator, operations)
    }
}
