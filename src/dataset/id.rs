use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage position encoded in a Micro-Manager filename.
///
/// `Pos3` yields [`Position::Single`]; the multi-XY form `Pos_012_003`
/// yields [`Position::Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Position {
    /// Single position index
    Single(u32),
    /// Row/column index from a position grid
    Grid(u32, u32),
}

impl Position {
    /// Position indices in filename order.
    pub fn indices(&self) -> Vec<u32> {
        match *self {
            Position::Single(p) => vec![p],
            Position::Grid(x, y) => vec![x, y],
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Single(p) => write!(f, "{}", p),
            Position::Grid(x, y) => write!(f, "{}_{}", x, y),
        }
    }
}

/// Structured identifier of a logical dataset, derived from filename tokens only.
///
/// Two filenames that differ only in tokens the grammar ignores (leading
/// underscores, repeated separators, the data suffix) map to equal ids, so
/// a `DatasetId` can key an index or deduplicate a file listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DatasetId {
    /// Free-form acquisition label (e.g. "Cos7_Microtubules")
    pub prefix: String,

    /// Acquisition number
    pub acq_id: Option<u32>,

    /// Channel identifier token (e.g. "A647")
    pub channel_id: Option<String>,

    /// Acquisition date token
    pub date_id: Option<String>,

    /// Stage position
    pub pos_id: Option<Position>,

    /// Z-slice index
    pub slice_id: Option<u32>,
}

impl DatasetId {
    /// Create an id with only a prefix set
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            acq_id: None,
            channel_id: None,
            date_id: None,
            pos_id: None,
            slice_id: None,
        }
    }

    /// Set the acquisition number
    pub fn with_acq_id(mut self, acq_id: u32) -> Self {
        self.acq_id = Some(acq_id);
        self
    }

    /// Set the channel identifier
    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Set the stage position
    pub fn with_position(mut self, pos_id: Position) -> Self {
        self.pos_id = Some(pos_id);
        self
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix)?;
        if let Some(acq) = self.acq_id {
            write!(f, "/acq={}", acq)?;
        }
        if let Some(channel) = &self.channel_id {
            write!(f, "/ch={}", channel)?;
        }
        if let Some(date) = &self.date_id {
            write!(f, "/date={}", date)?;
        }
        if let Some(pos) = &self.pos_id {
            write!(f, "/pos={}", pos)?;
        }
        if let Some(slice) = self.slice_id {
            write!(f, "/slice={}", slice)?;
        }
        Ok(())
    }
}
