use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation;

const ORGANIC_RISK_FACTOR: f64 = 0.8;
const MEDICAL_RISK_FACTOR: f64 = 1.5;
const HAZARDOUS_RISK_FACTOR: f64 = 2.0;

/// Identifier wrapper for registered waste items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WasteId(pub String);

impl WasteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WasteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WasteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WasteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Lifecycle status of a waste item.
///
/// `Registered` moves to `Transporting` through the transport service. The
/// three processed statuses are reached only by processing and are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum WasteStatus {
    Registered,
    Transporting,
    Recycled,
    Destroyed,
    SpeciallyProcessed,
}

impl WasteStatus {
    pub const fn label(self) -> &'static str {
        match self {
            WasteStatus::Registered => "Registered",
            WasteStatus::Transporting => "Transporting",
            WasteStatus::Recycled => "Recycled",
            WasteStatus::Destroyed => "Destroyed",
            WasteStatus::SpeciallyProcessed => "SpeciallyProcessed",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            WasteStatus::Recycled | WasteStatus::Destroyed | WasteStatus::SpeciallyProcessed
        )
    }
}

impl fmt::Display for WasteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fieldless tag for the closed set of waste kinds, used for grouping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WasteCategory {
    Organic,
    Medical,
    Hazardous,
}

impl WasteCategory {
    pub const fn label(self) -> &'static str {
        match self {
            WasteCategory::Organic => "organic",
            WasteCategory::Medical => "medical",
            WasteCategory::Hazardous => "hazardous",
        }
    }
}

/// Kind-specific severity attribute carried by each waste item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum WasteKind {
    Organic { decay_level: u32 },
    Medical { infection_level: u32 },
    /// B3 (hazardous and toxic) waste.
    Hazardous { chemical_content: String },
}

impl WasteKind {
    pub fn category(&self) -> WasteCategory {
        match self {
            WasteKind::Organic { .. } => WasteCategory::Organic,
            WasteKind::Medical { .. } => WasteCategory::Medical,
            WasteKind::Hazardous { .. } => WasteCategory::Hazardous,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            WasteKind::Organic { .. } => "OrganicWaste",
            WasteKind::Medical { .. } => "MedicalWaste",
            WasteKind::Hazardous { .. } => "HazardousWaste",
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            WasteKind::Organic { decay_level } => {
                validation::level("decay_level", i64::from(*decay_level)).map(|_| ())
            }
            WasteKind::Medical { infection_level } => {
                validation::level("infection_level", i64::from(*infection_level)).map(|_| ())
            }
            WasteKind::Hazardous { chemical_content } => {
                validation::non_blank("chemical_content", chemical_content)
            }
        }
    }
}

/// A registered unit of waste.
///
/// Fields are private so that `volume > 0` holds for the item's whole
/// lifetime and `status` only changes through [`WasteItem::process`] and
/// [`WasteItem::start_transport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteItem {
    id: WasteId,
    volume: f64,
    status: WasteStatus,
    kind: WasteKind,
}

impl WasteItem {
    pub fn new(id: WasteId, volume: f64, kind: WasteKind) -> Result<Self, ValidationError> {
        validation::non_blank("waste_id", id.as_str())?;
        validation::volume(volume)?;
        kind.validate()?;

        Ok(Self {
            id,
            volume,
            status: WasteStatus::Registered,
            kind,
        })
    }

    pub fn organic(
        id: impl Into<WasteId>,
        volume: f64,
        decay_level: u32,
    ) -> Result<Self, ValidationError> {
        Self::new(id.into(), volume, WasteKind::Organic { decay_level })
    }

    pub fn medical(
        id: impl Into<WasteId>,
        volume: f64,
        infection_level: u32,
    ) -> Result<Self, ValidationError> {
        Self::new(id.into(), volume, WasteKind::Medical { infection_level })
    }

    pub fn hazardous(
        id: impl Into<WasteId>,
        volume: f64,
        chemical_content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            id.into(),
            volume,
            WasteKind::Hazardous {
                chemical_content: chemical_content.into(),
            },
        )
    }

    pub fn id(&self) -> &WasteId {
        &self.id
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn status(&self) -> WasteStatus {
        self.status
    }

    pub fn kind(&self) -> &WasteKind {
        &self.kind
    }

    pub fn category(&self) -> WasteCategory {
        self.kind.category()
    }

    pub fn set_volume(&mut self, volume: f64) -> Result<(), ValidationError> {
        validation::volume(volume)?;
        self.volume = volume;
        Ok(())
    }

    /// Risk score for this item. Pure; never touches status.
    pub fn compute_risk(&self) -> f64 {
        match &self.kind {
            WasteKind::Organic { decay_level } => {
                self.volume * f64::from(*decay_level) * ORGANIC_RISK_FACTOR
            }
            WasteKind::Medical { infection_level } => {
                self.volume * f64::from(*infection_level) * MEDICAL_RISK_FACTOR
            }
            WasteKind::Hazardous { .. } => self.volume * HAZARDOUS_RISK_FACTOR,
        }
    }

    /// Runs the kind-specific treatment, moving the item to its terminal
    /// status. Re-running it lands on the same status and message.
    pub fn process(&mut self) -> String {
        let (status, message) = match &self.kind {
            WasteKind::Organic { .. } => (
                WasteStatus::Recycled,
                "organic waste converted to compost".to_string(),
            ),
            WasteKind::Medical { .. } => (
                WasteStatus::Destroyed,
                "medical waste destroyed via incinerator".to_string(),
            ),
            WasteKind::Hazardous { chemical_content } => (
                WasteStatus::SpeciallyProcessed,
                format!(
                    "hazardous waste containing {chemical_content} handled by certified facility"
                ),
            ),
        };

        self.status = status;
        message
    }

    /// Moves the item into transport unless it has already been processed.
    pub fn start_transport(&mut self) -> Result<(), ValidationError> {
        if self.status.is_terminal() {
            return Err(ValidationError::TerminalStatus {
                id: self.id.clone(),
                status: self.status,
            });
        }

        self.status = WasteStatus::Transporting;
        Ok(())
    }
}

impl fmt::Display for WasteItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(id={}, volume={:?}, status={}, ",
            self.kind.type_name(),
            self.id,
            self.volume,
            self.status
        )?;
        match &self.kind {
            WasteKind::Organic { decay_level } => write!(f, "decay_level={decay_level})"),
            WasteKind::Medical { infection_level } => {
                write!(f, "infection_level={infection_level})")
            }
            WasteKind::Hazardous { chemical_content } => {
                write!(f, "chemical_content={chemical_content})")
            }
        }
    }
}

/// Malformed input or an illegal status transition. Operations failing with
/// this error leave the registry untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required and must not be blank")]
    Blank { field: &'static str },
    #[error("volume must be a number greater than zero (got {value})")]
    NonPositiveVolume { value: f64 },
    #[error("{field} must be an integer between 1 and 4294967295 (got {value})")]
    LevelOutOfRange { field: &'static str, value: i64 },
    #[error("waste '{id}' was already processed (status: {status}) and cannot be transported")]
    TerminalStatus { id: WasteId, status: WasteStatus },
    #[error("waste id '{id}' is already registered")]
    DuplicateId { id: WasteId },
}
