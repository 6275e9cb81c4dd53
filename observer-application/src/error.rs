use observer_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("application already shut down: title={title}")]
    AlreadyShutdown { title: String },

    #[error("invalid delay range: min={min}, max={max}")]
    InvalidDelayRange { min: u64, max: u64 },
}

pub type AppResult<T> = Result<T, AppError>;
