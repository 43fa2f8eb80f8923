use log::{debug, warn};
use std::convert::Infallible;
use std::fmt;
use std::path::Path;

use super::{FilenameParser, ParserError};
use crate::dataset::Dataset;
use crate::types::DatasetType;

/// Reads the payload behind a parsed filename.
///
/// Implemented by the host application; the parser only decides *when* it is
/// called and publishes its result.
pub trait DataLoader {
    /// Loaded payload
    type Data;
    /// Load failure
    type Error: std::error::Error;

    /// Read the data stored at `path`.
    fn load(&self, path: &Path, dataset_type: DatasetType) -> Result<Self::Data, Self::Error>;
}

/// Loader that attaches an empty payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDataLoader;

impl DataLoader for NoDataLoader {
    type Data = ();
    type Error = Infallible;

    fn load(&self, _path: &Path, _dataset_type: DatasetType) -> Result<(), Infallible> {
        Ok(())
    }
}

#[derive(Debug)]
enum ParserState<D> {
    Uninitialized,
    Ready(Dataset<D>),
}

/// Stateful wrapper that parses a filename and then loads its data.
///
/// The parser is `Uninitialized` until [`MmParser::parse_filename`] has parsed
/// the filename *and* run the loader; only then does [`MmParser::dataset`]
/// return the dataset.
///
/// ```rust
/// use mmparser::parser::{MmParser, ParserError};
/// use mmparser::types::DatasetType;
///
/// let mut parser = MmParser::new();
/// assert!(matches!(parser.dataset(), Err(ParserError::NotInitialized)));
///
/// let dataset = parser.parse_filename(
///     "Cos7_Microtubules_A647_3_MMStack_Pos0_locResults.dat",
///     DatasetType::Localizations,
///     false,
/// )?;
/// assert_eq!(dataset.ids().acq_id, Some(3));
/// # Ok::<(), ParserError>(())
/// ```
pub struct MmParser<L: DataLoader = NoDataLoader> {
    parser: FilenameParser,
    loader: L,
    state: ParserState<L::Data>,
}

impl<L> fmt::Debug for MmParser<L>
where
    L: DataLoader + fmt::Debug,
    L::Data: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MmParser")
            .field("loader", &self.loader)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl MmParser<NoDataLoader> {
    /// Create an uninitialized parser with the default grammar and no loader
    pub fn new() -> Self {
        Self::with_loader(NoDataLoader)
    }
}

impl Default for MmParser<NoDataLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: DataLoader> MmParser<L> {
    /// Create an uninitialized parser with the default grammar
    pub fn with_loader(loader: L) -> Self {
        Self::with_parser(FilenameParser::default(), loader)
    }

    /// Create an uninitialized parser with a custom grammar
    pub fn with_parser(parser: FilenameParser, loader: L) -> Self {
        Self {
            parser,
            loader,
            state: ParserState::Uninitialized,
        }
    }

    /// Underlying pure filename parser
    pub fn filename_parser(&self) -> &FilenameParser {
        &self.parser
    }

    /// Whether a dataset has been parsed
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, ParserState::Ready(_))
    }

    /// Drop the current dataset and return to the uninitialized state
    pub fn reset(&mut self) {
        self.state = ParserState::Uninitialized;
    }

    /// Parse `path` as `dataset_type` and, if `read_data` is set, load its data.
    ///
    /// The parser is reset first. A parse failure leaves it uninitialized; a
    /// load failure is logged and leaves the dataset without data.
    pub fn parse_filename(
        &mut self,
        path: impl AsRef<Path>,
        dataset_type: DatasetType,
        read_data: bool,
    ) -> Result<&Dataset<L::Data>, ParserError> {
        self.reset();

        let path = path.as_ref();
        let ids = self.parser.parse(path, dataset_type)?;
        let dataset = Dataset::new(ids, dataset_type);

        if read_data {
            match self.loader.load(path, dataset_type) {
                Ok(data) => dataset.attach(data)?,
                Err(e) => warn!(
                    "Filename {} successfully parsed, but no data was read from the file: {}",
                    path.display(),
                    e
                ),
            }
        }

        debug!("Parser initialized with {}", dataset.ids());
        self.state = ParserState::Ready(dataset);
        self.dataset()
    }

    /// The parsed dataset
    pub fn dataset(&self) -> Result<&Dataset<L::Data>, ParserError> {
        match &self.state {
            ParserState::Ready(dataset) => Ok(dataset),
            ParserState::Uninitialized => Err(ParserError::NotInitialized),
        }
    }

    /// Take the parsed dataset, consuming the parser
    pub fn into_dataset(self) -> Result<Dataset<L::Data>, ParserError> {
        match self.state {
            ParserState::Ready(dataset) => Ok(dataset),
            ParserState::Uninitialized => Err(ParserError::NotInitialized),
        }
    }
}
