#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid contribution type. Must be \"percentage\" or \"dollar\"")]
    InvalidContributionType,

    #[error("Invalid {field}. Must be a finite number")]
    InvalidRate { field: &'static str },

    /// A projection overflowed to infinity or NaN.
    #[error("projection produced a non-finite {0}")]
    NonFinite(&'static str),
}

impl DomainError {
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::NonFinite(_))
    }
}
