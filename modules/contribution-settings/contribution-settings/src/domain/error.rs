use contribution_settings_sdk::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid contribution type. Must be \"percentage\" or \"dollar\"")]
    InvalidType,

    #[error("Invalid contribution rate. Must be a positive number")]
    InvalidRate,

    #[error("Percentage cannot exceed 100%")]
    PercentageTooHigh,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

impl From<DomainError> for SettingsError {
    fn from(e: DomainError) -> Self {
        if e.is_validation() {
            Self::validation(e.to_string())
        } else {
            Self::internal()
        }
    }
}
