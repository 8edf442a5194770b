//! Contextual records attached to operations for display. Neither is stored
//! against a waste item.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::domain::ValidationError;
use super::validation;

/// Disaster site a batch of waste was collected from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    id: String,
    name: String,
    disaster_type: String,
}

impl Location {
    /// Trims every field and rejects blank ones.
    pub fn new(id: &str, name: &str, disaster_type: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: validation::trimmed("location_id", id)?,
            name: validation::trimmed("location_name", name)?,
            disaster_type: validation::trimmed("disaster_type", disaster_type)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn disaster_type(&self) -> &str {
        &self.disaster_type
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validation::trimmed("location_name", name)?;
        Ok(())
    }

    pub fn set_disaster_type(&mut self, disaster_type: &str) -> Result<(), ValidationError> {
        self.disaster_type = validation::trimmed("disaster_type", disaster_type)?;
        Ok(())
    }

    pub fn info(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("disaster_type", self.disaster_type.clone()),
        ])
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Location(id={}, name={}, disaster_type={})",
            self.id, self.name, self.disaster_type
        )
    }
}

/// Field officer accountable for a transport run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Officer {
    id: String,
    name: String,
    expertise: String,
}

impl Officer {
    pub fn new(id: &str, name: &str, expertise: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: validation::trimmed("officer_id", id)?,
            name: validation::trimmed("officer_name", name)?,
            expertise: validation::trimmed("expertise", expertise)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expertise(&self) -> &str {
        &self.expertise
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validation::trimmed("officer_name", name)?;
        Ok(())
    }

    pub fn set_expertise(&mut self, expertise: &str) -> Result<(), ValidationError> {
        self.expertise = validation::trimmed("expertise", expertise)?;
        Ok(())
    }

    pub fn info(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("id", self.id.clone()),
            ("name", self.name.clone()),
            ("expertise", self.expertise.clone()),
        ])
    }
}

impl fmt::Display for Officer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Officer(id={}, name={}, expertise={})",
            self.id, self.name, self.expertise
        )
    }
}
