/// Errors that can occur when accessing a parsed dataset
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// Data was requested before the load sequence attached it
    #[error("Dataset not initialized: no data has been attached to {0}")]
    NotInitialized(String),

    /// Data can be attached only once per dataset
    #[error("Dataset already loaded: data for {0} was attached earlier")]
    AlreadyLoaded(String),
}
