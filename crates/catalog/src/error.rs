use kobis::KobisError;
use tmdb::TmdbError;

/// The single failure type of an aggregation pass.
///
/// Every provider failure collapses into one of two buckets: the provider
/// could not be reached (or answered with a non-success status), or it
/// answered but the body itself carried an error. Either way the whole pass
/// is aborted and this is what the caller gets to display.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("provider fault: {0}")]
    ProviderFault(String),

    #[error("missing configuration: {0} is not set")]
    ConfigurationMissing(&'static str),
}

impl From<TmdbError> for ArchiveError {
    fn from(e: TmdbError) -> Self {
        match e {
            TmdbError::Request(_) | TmdbError::Api { .. } => {
                ArchiveError::ProviderUnavailable(e.to_string())
            }
        }
    }
}

impl From<KobisError> for ArchiveError {
    fn from(e: KobisError) -> Self {
        match e {
            KobisError::Request(_) | KobisError::Api { .. } => {
                ArchiveError::ProviderUnavailable(e.to_string())
            }
            KobisError::Fault { .. } | KobisError::Json { .. } => {
                ArchiveError::ProviderFault(e.to_string())
            }
        }
    }
}
