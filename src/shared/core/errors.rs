use thiserror::Error;

use crate::modules::reporting::core::csv_export::CsvExportError;
use crate::modules::time_entries::core::command::ValidationError;
use crate::shared::core::duration::DurationError;
use crate::shared::core::wall_clock::WallClockError;
use crate::shared::infrastructure::time_entry_store::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Entry not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error(transparent)]
    Export(#[from] CsvExportError),
}

impl From<WallClockError> for ApplicationError {
    fn from(error: WallClockError) -> Self {
        ApplicationError::Validation(ValidationError::Timestamp(error))
    }
}
