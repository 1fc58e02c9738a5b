#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VersionError {
    #[error("Failed matching version string {input}")]
    NoMatch { input: String },
    #[error("Invalid value for number group {group}: {value}")]
    InvalidNumber { group: String, value: String },
    #[error("Invalid format for group name: {name}")]
    InvalidGroupName { name: String },
    #[error(transparent)]
    InvalidPattern(#[from] regex::Error),
}
