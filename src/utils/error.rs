use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickupError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Listing request to {url} returned status {status}")]
    ListingStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Page error: {message}")]
    PageError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Document,
    System,
}

impl PickupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PickupError::HttpError(_) | PickupError::ListingStatusError { .. } => {
                ErrorCategory::Network
            }
            PickupError::UrlError(_)
            | PickupError::SelectorError { .. }
            | PickupError::ConfigError { .. }
            | PickupError::MissingConfigError { .. }
            | PickupError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PickupError::PageError { .. } => ErrorCategory::Document,
            PickupError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PickupError::HttpError(_) => "Could not reach the shop server".to_string(),
            PickupError::ListingStatusError { url, status } => {
                format!("The server answered {} for {}", status, url)
            }
            PickupError::IoError(e) => format!("File access failed: {}", e),
            PickupError::UrlError(e) => format!("The page location is not a valid URL: {}", e),
            PickupError::SelectorError { selector, .. } => {
                format!("The card selector '{}' is not valid CSS", selector)
            }
            PickupError::ConfigError { message } => format!("Configuration problem: {}", message),
            PickupError::MissingConfigError { field } => {
                format!("Missing required setting: {}", field)
            }
            PickupError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting {} is invalid: {}", field, reason)
            }
            PickupError::PageError { message } => format!("Home page problem: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the site is being served and the URL is reachable",
            ErrorCategory::Configuration => "Review the command line flags and the TOML config file",
            ErrorCategory::Document => "Make sure the home page markup is complete",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, PickupError>;
