use thiserror::Error;

/// Fields every imported event object must carry as strings.
pub const REQUIRED_FIELDS: [&str; 5] = ["date", "startTime", "endTime", "title", "color"];

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed file: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("Invalid event format: {0}")]
    ShapeValidation(String),

    #[error("Invalid color format: '{0}' (expected #RRGGBB)")]
    InvalidColorFormat(String),

    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("Import cancelled: a newer file was selected")]
    ImportCancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn shape_validation() -> Self {
        Self::ShapeValidation(format!(
            "expected an array of objects, each with string fields: {}",
            REQUIRED_FIELDS.join(", ")
        ))
    }

    pub fn invalid_color<S: Into<String>>(value: S) -> Self {
        Self::InvalidColorFormat(value.into())
    }

    pub fn invalid_file_type<S: Into<String>>(msg: S) -> Self {
        Self::InvalidFileType(msg.into())
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// True for failures of the import path, which abort without applying events.
    pub fn is_import_failure(&self) -> bool {
        matches!(
            self,
            Self::Syntax(_)
                | Self::ShapeValidation(_)
                | Self::InvalidFileType(_)
                | Self::ImportCancelled
                | Self::Io(_)
        )
    }

    /// Short message suitable for the status line shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Syntax(_) => "Error parsing JSON. Check file format.".to_string(),
            Self::ShapeValidation(_) => format!(
                "Invalid event data. Each event needs: {}.",
                REQUIRED_FIELDS.join(", ")
            ),
            Self::InvalidFileType(_) => "Please select a valid .json file.".to_string(),
            Self::Io(_) => "Failed to read the file.".to_string(),
            Self::InvalidInput(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
