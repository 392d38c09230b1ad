//! Connection settings for the notes table.

use crate::note;

use aws_sdk_dynamodb::{Client, config::Region};

/// Environment variable naming the notes table.
pub const TABLE_NAME_VAR: &str = "NOTES_TABLE_NAME";
/// Environment variable overriding the AWS region.
pub const REGION_VAR: &str = "AWS_REGION";
/// Environment variable overriding the DynamoDB endpoint, e.g. for DynamoDB Local.
pub const ENDPOINT_URL_VAR: &str = "AWS_ENDPOINT_URL";

/// Where the notes table lives.
///
/// Credentials are always resolved through the default AWS provider chain.
///
/// ```rust
/// use notes_crud::config::Config;
///
/// let config = Config::from_lookup(|name| match name {
///     "NOTES_TABLE_NAME" => Some("NotesTest".to_string()),
///     _ => None,
/// });
/// assert_eq!(config.table_name, "NotesTest");
/// assert_eq!(config.endpoint_url, None);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Table holding the notes.
    pub table_name: String,
    /// Region override; the provider chain decides when `None`.
    pub region: Option<String>,
    /// Endpoint override; the regional DynamoDB endpoint is used when `None`.
    pub endpoint_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: note::TABLE_NAME.to_string(),
            region: None,
            endpoint_url: None,
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, treating empty values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
        Self {
            table_name: get(TABLE_NAME_VAR).unwrap_or_else(|| note::TABLE_NAME.to_string()),
            region: get(REGION_VAR),
            endpoint_url: get(ENDPOINT_URL_VAR),
        }
    }

    /// Build the DynamoDB client for these settings.
    ///
    /// Build it once per process and share clones of it.
    pub async fn client(&self) -> Client {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;
        Client::new(&sdk_config)
    }
}
