//! Error types for repository operations.
//!
//! Every error carries an [`ErrorContext`] naming the operation and the record
//! involved, which the HTTP layer forwards as the response `details`.

use std::fmt;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Where a repository error happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// e.g. "get_restaurant", "load_config"
    pub operation: Option<String>,
    pub entity: Option<String>,
    pub entity_id: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("operation", &self.operation),
            ("entity", &self.entity),
            ("id", &self.entity_id),
            ("details", &self.details),
        ];
        let parts: Vec<String> = fields
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| format!("{}={}", name, v)))
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The catalog store is unavailable.
    #[error("Connection error: {message} {context}")]
    ConnectionError { message: String, context: ErrorContext },

    #[error("Not found: {message} {context}")]
    NotFound { message: String, context: ErrorContext },

    /// A record was rejected before anything was written.
    #[error("Data validation error: {message} {context}")]
    ValidationError { message: String, context: ErrorContext },

    /// Unreadable or invalid service configuration.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError { message: String, context: ErrorContext },
}

impl RepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn not_found(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::NotFound {
            message: message.into(),
            context,
        }
    }

    pub fn validation(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ValidationError {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The message without the context suffix.
    pub fn message(&self) -> &str {
        match self {
            Self::ConnectionError { message, .. }
            | Self::NotFound { message, .. }
            | Self::ValidationError { message, .. }
            | Self::ConfigurationError { message, .. } => message,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::ConnectionError { context, .. }
            | Self::NotFound { context, .. }
            | Self::ValidationError { context, .. }
            | Self::ConfigurationError { context, .. } => context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display_skips_missing_fields() {
        let ctx = ErrorContext::new("get_restaurant")
            .with_entity("restaurant")
            .with_entity_id(7);
        assert_eq!(
            ctx.to_string(),
            "[operation=get_restaurant, entity=restaurant, id=7]"
        );
        assert_eq!(ErrorContext::default().to_string(), "[]");
    }

    #[test]
    fn test_not_found_message() {
        let err = RepositoryError::not_found(
            "Restaurant 7 not found",
            ErrorContext::new("get_restaurant").with_entity_id(7),
        );
        assert!(err.is_not_found());
        assert_eq!(err.message(), "Restaurant 7 not found");
        assert_eq!(
            err.to_string(),
            "Not found: Restaurant 7 not found [operation=get_restaurant, id=7]"
        );
    }

    #[test]
    fn test_configuration_keeps_context() {
        let err = RepositoryError::configuration(
            "bad port",
            ErrorContext::new("load_config").with_details("PORT"),
        );
        assert!(!err.is_not_found());
        assert_eq!(err.context().operation.as_deref(), Some("load_config"));
        assert_eq!(err.context().details.as_deref(), Some("PORT"));
    }
}
