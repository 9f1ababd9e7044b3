use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderdeskError {
    #[error("order not found: {0}")]
    OrderNotFound(String),

    #[error("duplicate order id in dataset: {0}")]
    DuplicateOrderId(String),

    #[error("invalid status '{0}': expected New, In Progress, On Hold, Completed, or Invoiced")]
    InvalidStatus(String),

    #[error("dataset is missing required column: {0}")]
    MissingColumn(String),

    #[error("token validity must be between {min} and {max} hours, got {got}")]
    InvalidHours { min: u32, max: u32, got: u32 },

    #[error("no signing secret configured: set app_secret or ORDERDESK_SECRET")]
    MissingSecret,

    #[error("export failed: {0}")]
    Export(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OrderdeskError>;
