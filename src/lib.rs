#![deny(missing_docs)]

//! # Notes CRUD
//!
//! A typed record access layer over a single DynamoDB table, with an atomic
//! conditional update.
//!
//! ## Overview
//!
//! This library maps typed records to and from items of a table keyed by a
//! partition key and a sort key, and offers five operations:
//! - `save`: create or fully overwrite a record
//! - `load`: read a record with eventual or strong consistency, `None` when absent
//! - `update`: replace an existing record (same effect as `save`)
//! - `delete`: remove a record; deleting a missing record succeeds
//! - `conditional_update`: replace a record only if one of its fields still holds
//!   an expected value, checked and written in a single conditional put
//!
//! ## Quick Example
//!
//! ```no_run
//! use notes_crud::{
//!     config::Config,
//!     mapper::Mapper,
//!     note::{Note, NoteField, NoteKey},
//!     read::common::Consistency,
//!     record::Record,
//!     store::DynamoStore,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let mapper = Mapper::new(DynamoStore::new(config.client().await, config.table_name));
//!
//! let mut note = Note::new("leoTest222", 222, "Insertion of element via java");
//! mapper.save(&note).await?;
//!
//! note.text = "updated notes".to_string();
//! mapper.update(&note).await?;
//!
//! let stored = mapper
//!     .load::<Note>(&NoteKey::new("leoTest222", 222), Consistency::Strong)
//!     .await?;
//! assert_eq!(stored.as_ref(), Some(&note));
//!
//! // Only applies if nobody changed the text in the meantime.
//! let next = Note::new("leoTest222", 222, "final notes");
//! mapper
//!     .conditional_update(&next, NoteField::Text, "updated notes")
//!     .await?;
//!
//! mapper.delete::<Note>(&note.key()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@mapper`] - The record access layer
//! - [`mod@note`] - The note record and its attribute mapping
//! - [`mod@record`] - The mapping contract every record type implements
//! - [`mod@store`] - Storage collaborators (DynamoDB and in-memory)
//! - [`mod@common`] - Keys and condition expressions
//! - [`mod@read`] - GetItem
//! - [`mod@write`] - PutItem and DeleteItem
//! - [`mod@config`] - Table and client settings
//! - [`mod@error`] - Error kinds

/// Keys and condition expressions shared by read and write operations.
pub mod common;

/// Table and client settings.
pub mod config;

/// Error kinds surfaced by every operation.
pub mod error;

/// The record access layer.
pub mod mapper;

/// The note record.
pub mod note;

/// Read operations for retrieving items from DynamoDB tables.
pub mod read;

/// The mapping contract between typed records and stored items.
pub mod record;

/// Storage collaborators.
pub mod store;

/// Write operations for modifying items in DynamoDB tables.
pub mod write;

pub use error::{Error, Result};
pub use mapper::Mapper;
pub use note::{Note, NoteField, NoteKey};
pub use read::common::Consistency;
pub use record::Record;
pub use store::{DynamoStore, MemoryStore, Store};
