use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrivacyError {
    #[error(transparent)]
    Core(#[from] tabcloak_core::CoreError),

    #[error("at least one sensitive column is required")]
    NoSensitiveColumns,
}
