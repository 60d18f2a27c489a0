use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Spreadsheet parsing failed: {0}")]
    SpreadsheetError(#[from] calamine::XlsxError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Data parsing error: {message}")]
    ParseError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Template,
    Io,
    Configuration,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::SpreadsheetError(_) | SiteError::CsvError(_) | SiteError::ParseError { .. } => {
                ErrorCategory::Data
            }
            SiteError::TemplateError(_) => ErrorCategory::Template,
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::ConfigError { .. }
            | SiteError::ValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Critical,
            ErrorCategory::Data | ErrorCategory::Template => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Data => {
                "Check that the data file is a readable .xlsx or .csv table with a header row containing the category column".to_string()
            }
            ErrorCategory::Template => {
                "Check that the template file exists and only references the 'grouped_wines' and 'total_years' bindings".to_string()
            }
            ErrorCategory::Io => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            ErrorCategory::Configuration => {
                "Run with --help to see the expected flags, environment variables and defaults".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "File not found. Check the data and template paths.".to_string()
            }
            SiteError::SpreadsheetError(_) | SiteError::CsvError(_) => {
                format!("The catalog table could not be read: {}", self)
            }
            SiteError::ParseError { message } => format!("The catalog table is not usable: {}", message),
            SiteError::TemplateError(_) => format!("The page template failed to render: {}", self),
            SiteError::IoError(_) => format!("File operation failed: {}", self),
            SiteError::ConfigError { message } => format!("Configuration problem: {}", message),
            SiteError::ValidationError { message } => format!("Configuration problem: {}", message),
            SiteError::InvalidConfigValueError { .. } => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
