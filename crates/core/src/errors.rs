use thiserror::Error;

/// Rejection of a calculator submission. Raised before any computation runs,
/// so a caller never sees a partial result.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("missing required field `{field}`")]
    Missing { field: &'static str },
    #[error("field `{field}` must be numeric, got `{value}`")]
    NotNumeric { field: &'static str, value: String },
    #[error("field `{field}` must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("unsupported value `{value}` for `{field}` (expected {expected})")]
    UnknownOption { field: &'static str, value: String, expected: &'static str },
    #[error("field `{field}` must be a calendar date (YYYY-MM-DD), got `{value}`")]
    NotADate { field: &'static str, value: String },
    #[error("at least one training goal must be selected")]
    NoGoalsSelected,
    #[error("field `{field}` is outside the supported range")]
    OutOfRange { field: &'static str },
}

impl InvalidInputError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotNumeric { field, .. }
            | Self::NonPositive { field }
            | Self::UnknownOption { field, .. }
            | Self::NotADate { field, .. }
            | Self::OutOfRange { field } => field,
            Self::NoGoalsSelected => "goals",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, field: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Some answers could not be used. Check the form and try again.",
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }

    pub fn error_class(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "invalid_input",
            Self::Internal { .. } => "configuration",
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::InvalidInput(error) => Self::BadRequest {
                message: error.to_string(),
                field: error.field().to_owned(),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::Configuration(message) => {
                Self::Internal { message, correlation_id: "unassigned".to_owned() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ApplicationError, InterfaceError, InvalidInputError};

    #[test]
    fn invalid_input_maps_to_bad_request_interface_error() {
        let interface =
            ApplicationError::from(InvalidInputError::NonPositive { field: "weight_lbs" })
                .into_interface("feeding-1");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest {
                ref correlation_id,
                ref field,
                ..
            } if correlation_id == "feeding-1" && field == "weight_lbs"
        ));
        assert_eq!(interface.error_class(), "invalid_input");
    }

    #[test]
    fn bad_request_has_user_safe_message() {
        let interface = ApplicationError::from(InvalidInputError::NoGoalsSelected)
            .into_interface("training-1");

        assert_eq!(
            interface.user_message(),
            "Some answers could not be used. Check the form and try again."
        );
    }

    #[test]
    fn configuration_error_maps_to_internal() {
        let interface = ApplicationError::Configuration("bad log level".to_owned())
            .into_interface("config-1");

        assert!(matches!(interface, InterfaceError::Internal { .. }));
        assert_eq!(interface.user_message(), "An unexpected internal error occurred.");
    }

    #[test]
    fn every_variant_reports_its_field() {
        let error = InvalidInputError::UnknownOption {
            field: "region",
            value: "arctic".to_owned(),
            expected: "northeast|southeast|midwest|southwest|west",
        };
        assert_eq!(error.field(), "region");
        assert!(error.to_string().contains("arctic"));
        assert_eq!(InvalidInputError::NoGoalsSelected.field(), "goals");
    }
}
