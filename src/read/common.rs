/// Read consistency requested from the table.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Consistency {
    /// Eventually consistent read: lower latency, may miss a write that just
    /// completed.
    #[default]
    Eventual,
    /// Strongly consistent read: reflects every write that succeeded before
    /// the read.
    Strong,
}

impl Consistency {
    /// Whether this mode maps to a DynamoDB consistent read.
    pub fn is_strong(self) -> bool {
        matches!(self, Self::Strong)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SingleReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) table_name: String,
}

/// Arguments for single-item read operations (GetItem).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SingleReadArgs {
    /// Read consistency.
    ///
    /// Consistent reads consume more capacity units but guarantee you see the latest data.
    pub consistency: Consistency,
    /// The name of the table to read from.
    pub table_name: String,
}

impl From<SingleReadArgs> for SingleReadInput {
    fn from(single_read_args: SingleReadArgs) -> Self {
        Self {
            consistent_read: Some(single_read_args.consistency.is_strong()),
            table_name: single_read_args.table_name,
        }
    }
}

/// apply common single read operation settings to a builder
#[macro_export]
macro_rules! apply_single_read_operation {
    ($builder:expr, $single_read_operation:expr) => {
        $builder
            .set_consistent_read($single_read_operation.consistent_read)
            .table_name($single_read_operation.table_name)
    };
}
