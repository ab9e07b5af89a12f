pub mod config;
pub mod feeding;
pub mod grooming;
pub mod insurance;
pub mod training;
pub mod vaccination;

use chrono::NaiveDate;
use puppyparent_core::config::OutputFormat;
use puppyparent_core::{
    ApplicationError, DeterministicRecommendationEngine, InterfaceError, InvalidInputError,
};
use serde::Serialize;

pub const EXIT_INVALID_INPUT: u8 = 2;
pub const EXIT_CONFIGURATION: u8 = 3;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

/// Everything a calculator command needs, resolved once from config.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub engine: DeterministicRecommendationEngine,
    pub format: OutputFormat,
    pub today: NaiveDate,
}

#[derive(Debug, Serialize)]
struct CommandOutcome<T> {
    command: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<T>,
}

impl CommandResult {
    pub fn success<T: Serialize>(command: &str, result: T) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            field: None,
            message: None,
            result: Some(result),
        };
        Self { exit_code: 0, output: serialize_payload(&payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
        format: OutputFormat,
    ) -> Self {
        let message = message.into();
        let output = match format {
            OutputFormat::Text => format!("error[{error_class}]: {message}"),
            OutputFormat::Json => serialize_payload(&CommandOutcome::<()> {
                command: command.to_string(),
                status: "error".to_string(),
                error_class: Some(error_class.to_string()),
                field: None,
                message: Some(message),
                result: None,
            }),
        };
        Self { exit_code, output }
    }

    fn rejected(command: &str, error: &InterfaceError, format: OutputFormat) -> Self {
        let (message, field) = match error {
            InterfaceError::BadRequest { message, field, .. } => (message, Some(field)),
            InterfaceError::Internal { message, .. } => (message, None),
        };
        let output = match format {
            OutputFormat::Text => format!(
                "{}\nerror[{}]: {message}",
                error.user_message(),
                error.error_class()
            ),
            OutputFormat::Json => serialize_payload(&CommandOutcome::<()> {
                command: command.to_string(),
                status: "error".to_string(),
                error_class: Some(error.error_class().to_string()),
                field: field.cloned(),
                message: Some(message.clone()),
                result: None,
            }),
        };
        let exit_code = match error {
            InterfaceError::BadRequest { .. } => EXIT_INVALID_INPUT,
            InterfaceError::Internal { .. } => EXIT_CONFIGURATION,
        };
        Self { exit_code, output }
    }
}

impl CommandContext {
    /// Renders a calculator outcome in the configured output format.
    pub fn respond<T: Serialize>(
        &self,
        command: &str,
        outcome: Result<T, InvalidInputError>,
        render: fn(&T) -> String,
    ) -> CommandResult {
        match outcome {
            Ok(result) => match self.format {
                OutputFormat::Text => CommandResult { exit_code: 0, output: render(&result) },
                OutputFormat::Json => CommandResult::success(command, result),
            },
            Err(error) => {
                let interface = ApplicationError::from(error).into_interface(command);
                CommandResult::rejected(command, &interface, self.format)
            }
        }
    }
}

fn serialize_payload<T: Serialize>(payload: &CommandOutcome<T>) -> String {
    serde_json::to_string(payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
