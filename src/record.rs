//! Mapping between typed records and stored items.
//!
//! Each record type spells out its own mapping: which attributes hold the keys,
//! how every field is written into the item, and how it is read back. Nothing is
//! derived at run time.

use crate::common::{self, key};
use crate::error::{Error, Result};

use aws_sdk_dynamodb::types;
use std::{fmt, str};

/// A typed record stored in a table with a composite primary key.
pub trait Record: Sized + fmt::Debug + Send + Sync {
    /// Owned primary key of the record.
    type Key: fmt::Debug + Send + Sync;
    /// Tag naming one mapped field.
    type Field: Copy + fmt::Debug + Send + Sync;

    /// Names of the key attributes.
    fn key_schema() -> key::KeySchema;

    /// Attribute name a field is stored under.
    fn attribute_name(field: Self::Field) -> &'static str;

    /// Primary key of this record.
    fn key(&self) -> Self::Key;

    /// Validate a key and turn it into key attributes.
    fn key_attributes(key: &Self::Key) -> Result<key::Keys>;

    /// Validate the record before it is written.
    fn validate(&self) -> Result<()>;

    /// Write every field into an item.
    fn to_item(&self) -> common::Item;

    /// Read a record back from a stored item.
    fn from_item(item: common::Item) -> Result<Self>;
}

/// Take a string attribute out of an item.
pub fn take_string(item: &mut common::Item, name: &str) -> Result<String> {
    match item.remove(name) {
        Some(types::AttributeValue::S(value)) => Ok(value),
        Some(other) => Err(unexpected_type(name, "S", &other)),
        None => Err(Error::Mapping(format!("missing attribute {name}"))),
    }
}

/// Take an optional string attribute out of an item.
pub fn take_optional_string(item: &mut common::Item, name: &str) -> Result<Option<String>> {
    match item.remove(name) {
        Some(types::AttributeValue::S(value)) => Ok(Some(value)),
        Some(types::AttributeValue::Null(_)) | None => Ok(None),
        Some(other) => Err(unexpected_type(name, "S", &other)),
    }
}

/// Take a number attribute out of an item and parse it.
pub fn take_number<N>(item: &mut common::Item, name: &str) -> Result<N>
where
    N: str::FromStr,
    N::Err: fmt::Display,
{
    match item.remove(name) {
        Some(types::AttributeValue::N(value)) => value
            .parse()
            .map_err(|err| Error::Mapping(format!("attribute {name} holds {value}: {err}"))),
        Some(other) => Err(unexpected_type(name, "N", &other)),
        None => Err(Error::Mapping(format!("missing attribute {name}"))),
    }
}

fn unexpected_type(name: &str, expected: &str, actual: &types::AttributeValue) -> Error {
    let actual = match actual {
        types::AttributeValue::B(_) => "B",
        types::AttributeValue::Bool(_) => "BOOL",
        types::AttributeValue::Bs(_) => "BS",
        types::AttributeValue::L(_) => "L",
        types::AttributeValue::M(_) => "M",
        types::AttributeValue::N(_) => "N",
        types::AttributeValue::Ns(_) => "NS",
        types::AttributeValue::Null(_) => "NULL",
        types::AttributeValue::S(_) => "S",
        types::AttributeValue::Ss(_) => "SS",
        _ => "unknown",
    };
    Error::Mapping(format!("attribute {name} has type {actual}, expected {expected}"))
}
