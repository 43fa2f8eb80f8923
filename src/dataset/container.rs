use std::fmt;
use std::sync::OnceLock;

use super::{DatasetError, DatasetId};
use crate::types::DatasetType;

/// A parsed dataset: its identifier, its type and, once loaded, its data.
///
/// The data slot is single-assignment. Until [`Dataset::attach`] has returned,
/// [`Dataset::data`] fails with [`DatasetError::NotInitialized`]; afterwards every
/// reader, on any thread, observes the complete value.
pub struct Dataset<D> {
    ids: DatasetId,
    dataset_type: DatasetType,
    data: OnceLock<D>,
}

impl<D> Dataset<D> {
    /// Create a dataset with no data attached
    pub fn new(ids: DatasetId, dataset_type: DatasetType) -> Self {
        Self {
            ids,
            dataset_type,
            data: OnceLock::new(),
        }
    }

    /// Create a dataset whose data is already available
    pub fn with_data(ids: DatasetId, dataset_type: DatasetType, data: D) -> Self {
        let dataset = Self::new(ids, dataset_type);
        // A fresh OnceLock cannot already be set
        let _ = dataset.data.set(data);
        dataset
    }

    /// Identifier parsed from the filename
    pub fn ids(&self) -> &DatasetId {
        &self.ids
    }

    /// Type the filename was parsed as
    pub fn dataset_type(&self) -> DatasetType {
        self.dataset_type
    }

    /// Whether data has been attached
    pub fn is_loaded(&self) -> bool {
        self.data.get().is_some()
    }

    /// Access the loaded data
    pub fn data(&self) -> Result<&D, DatasetError> {
        self.data
            .get()
            .ok_or_else(|| DatasetError::NotInitialized(self.ids.to_string()))
    }

    /// Attach the loaded data. Fails if data was attached before.
    pub fn attach(&self, data: D) -> Result<(), DatasetError> {
        self.data
            .set(data)
            .map_err(|_| DatasetError::AlreadyLoaded(self.ids.to_string()))
    }

    /// Split the dataset into its identifier and data, if any
    pub fn into_parts(self) -> (DatasetId, DatasetType, Option<D>) {
        (self.ids, self.dataset_type, self.data.into_inner())
    }
}

impl<D: fmt::Debug> fmt::Debug for Dataset<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("ids", &self.ids)
            .field("dataset_type", &self.dataset_type)
            .field("data", &self.data.get())
            .finish()
    }
}
