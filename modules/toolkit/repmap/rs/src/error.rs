use derive_more::{Display, Error};
use eyre::Result;

/// Domain errors raised before any computation starts. They travel inside `eyre::Report`
/// and can be recovered with `report.downcast_ref::<Error>()`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    #[display("Invalid configuration: {reason}")]
    InvalidConfig {
        #[error(not(source))]
        reason: String,
    },
}

impl Error {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub(crate) fn ensure_min_length(min_length: usize) -> Result<()> {
    if min_length < 1 {
        return Err(Error::invalid_config(format!(
            "minimum repeat length must be at least 1, got {min_length}"
        ))
        .into());
    }
    Ok(())
}
