use serde::{Deserialize, Serialize};

use crate::domain::{
    cage::{CageDraft, CageStatus},
    dinosaur::{DinosaurDraft, Species},
    errors::{DomainError, FieldError},
};

/// Incoming dinosaur write. Absent fields default so that validation, not
/// JSON decoding, reports them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DinosaurRequest {
    pub id: i64,
    pub cage_id: i64,
    pub dino_name: String,
    pub dino_species: String,
}

impl DinosaurRequest {
    pub fn validate(&self) -> Result<DinosaurDraft, DomainError> {
        let mut errors = Vec::new();

        if self.cage_id == 0 {
            errors.push(FieldError::new("cage_id", "is required"));
        }

        if self.dino_name.is_empty() {
            errors.push(FieldError::new("dino_name", "is required"));
        }

        let species = match self.dino_species.parse::<Species>() {
            Ok(species) => Some(species),
            Err(_) => {
                errors.push(FieldError::new(
                    "dino_species",
                    format!("must be one of {}", species_list()),
                ));
                None
            }
        };

        match species {
            Some(species) if errors.is_empty() => Ok(DinosaurDraft {
                name: self.dino_name.clone(),
                species,
                cage_id: self.cage_id,
            }),
            _ => Err(DomainError::validation(errors)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CageRequest {
    pub id: i64,
    pub cage_name: String,
    pub cage_status: String,
}

impl CageRequest {
    pub fn validate(&self) -> Result<CageDraft, DomainError> {
        let mut errors = Vec::new();

        if self.cage_name.is_empty() {
            errors.push(FieldError::new("cage_name", "is required"));
        }

        let status = self.cage_status.parse::<CageStatus>().ok();
        if status.is_none() {
            errors.push(FieldError::new("cage_status", "must be one of ACTIVE, DOWN"));
        }

        match status {
            Some(status) if errors.is_empty() => Ok(CageDraft {
                name: self.cage_name.clone(),
                status,
            }),
            _ => Err(DomainError::validation(errors)),
        }
    }
}

/// Body of successful writes. The store-assigned id is not echoed.
#[derive(Debug, Default, Serialize)]
pub struct WriteAck {}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

fn species_list() -> String {
    Species::ALL
        .iter()
        .map(|species| species.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
