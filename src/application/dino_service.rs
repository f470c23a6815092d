use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    application::dto::{CageRequest, DinosaurRequest},
    domain::{
        cage::Cage,
        dinosaur::{Dinosaur, Species},
        errors::{DomainError, ErrorKind},
        policy::is_placement_allowed,
    },
    infrastructure::DinoRepository,
};

/// Read and write access to dinosaur and cage records.
///
/// Stateless over its repository, so clones are cheap and share nothing
/// mutable. Placement is check-then-write without a transaction: two
/// concurrent writes into the same cage can both pass against the same
/// occupant snapshot.
#[derive(Clone)]
pub struct DinoService {
    repository: Arc<dyn DinoRepository>,
}

impl DinoService {
    pub fn new(repository: Arc<dyn DinoRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_dinosaurs(&self) -> Result<Vec<Dinosaur>, DomainError> {
        self.repository.list_dinosaurs().await
    }

    pub async fn get_dinosaur(&self, id: i64) -> Result<Dinosaur, DomainError> {
        let Some(dino) = self.repository.get_dinosaur(id).await? else {
            return Err(DomainError::not_found(format!("dinosaur {id} not found")));
        };
        Ok(dino)
    }

    /// Fails with `NotFound` for an empty cage as well as for an unknown one.
    pub async fn list_dinosaurs_by_cage(&self, cage_id: i64) -> Result<Vec<Dinosaur>, DomainError> {
        let dinos = self.repository.list_dinosaurs_by_cage(cage_id).await?;
        if dinos.is_empty() {
            return Err(DomainError::not_found(format!(
                "no dinosaurs found in cage {cage_id}"
            )));
        }
        Ok(dinos)
    }

    pub async fn get_cage(&self, id: i64) -> Result<Cage, DomainError> {
        let Some(cage) = self.repository.get_cage(id).await? else {
            return Err(DomainError::not_found(format!("cage {id} not found")));
        };
        Ok(cage)
    }

    pub async fn list_cages(&self) -> Result<Vec<Cage>, DomainError> {
        self.repository.list_cages().await
    }

    pub async fn create_dinosaur(&self, request: DinosaurRequest) -> Result<(), DomainError> {
        let draft = request.validate()?;
        self.ensure_placement(draft.species, draft.cage_id).await?;

        self.repository.insert_dinosaur(draft).await?;
        debug!(cage_id = request.cage_id, "dinosaur created");
        Ok(())
    }

    /// Only name and cage assignment are written. The request species is
    /// validated and used for the placement check but never stored.
    pub async fn update_dinosaur(&self, request: DinosaurRequest) -> Result<(), DomainError> {
        let draft = request.validate()?;
        self.ensure_placement(draft.species, draft.cage_id).await?;

        let affected = self
            .repository
            .update_dinosaur(request.id, &draft.name, draft.cage_id)
            .await?;
        if affected == 0 {
            warn!(dino_id = request.id, "dinosaur update matched no rows");
        }
        Ok(())
    }

    pub async fn create_cage(&self, request: CageRequest) -> Result<(), DomainError> {
        let draft = request.validate()?;
        self.repository.insert_cage(draft).await
    }

    pub async fn update_cage(&self, request: CageRequest) -> Result<(), DomainError> {
        let draft = request.validate()?;

        let affected = self.repository.update_cage(request.id, draft).await?;
        if affected == 0 {
            warn!(cage_id = request.id, "cage update matched no rows");
        }
        Ok(())
    }

    async fn ensure_placement(&self, species: Species, cage_id: i64) -> Result<(), DomainError> {
        let occupants = match self.list_dinosaurs_by_cage(cage_id).await {
            Ok(occupants) => occupants,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err),
        };

        if is_placement_allowed(species, &occupants) {
            return Ok(());
        }

        info!(
            cage_id,
            species = %species,
            resident = ?occupants.first().map(|dino| dino.species),
            "dinosaur placement rejected"
        );
        Err(DomainError::placement_rejected())
    }
}
