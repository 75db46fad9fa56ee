/// Errors returned when a table write cannot be completed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("table `{table}` is unreachable")]
    Unreachable { table: String },
    #[error("table `{table}` lock poisoned by a panicking writer")]
    Poisoned { table: String },
}
