use thiserror::Error;

/// Problems with a draft that are caught before anything is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount is required")]
    MissingAmount,

    #[error("description is required")]
    MissingDescription,

    #[error("amount must be a non-negative number, got {0:?}")]
    InvalidAmount(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("network error: {0}")]
    Network(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for FinanceError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => FinanceError::Decode(e.to_string()),
            other => FinanceError::Network(other.to_string()),
        }
    }
}

impl FinanceError {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => FinanceError::Unauthorized,
            other => FinanceError::Status(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_unauthorized() {
        assert_eq!(FinanceError::from_status(401), FinanceError::Unauthorized);
        assert_eq!(FinanceError::from_status(403), FinanceError::Unauthorized);
        assert_eq!(FinanceError::from_status(500), FinanceError::Status(500));
    }

    #[test]
    fn validation_errors_convert() {
        let err: FinanceError = ValidationError::MissingAmount.into();
        assert!(matches!(err, FinanceError::Validation(ValidationError::MissingAmount)));
        assert_eq!(err.to_string(), "amount is required");
    }
}
