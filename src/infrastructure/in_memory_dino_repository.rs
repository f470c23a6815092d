use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        cage::{Cage, CageDraft},
        dinosaur::{Dinosaur, DinosaurDraft},
        errors::DomainError,
    },
    infrastructure::DinoRepository,
};

/// Process-local store with serial ids, for tests and database-free runs.
#[derive(Default)]
pub struct InMemoryDinoRepository {
    dinosaurs: RwLock<Table<Dinosaur>>,
    cages: RwLock<Table<Cage>>,
}

struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl InMemoryDinoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DinoRepository for InMemoryDinoRepository {
    async fn list_dinosaurs(&self) -> Result<Vec<Dinosaur>, DomainError> {
        Ok(self.dinosaurs.read().await.rows.values().cloned().collect())
    }

    async fn get_dinosaur(&self, id: i64) -> Result<Option<Dinosaur>, DomainError> {
        Ok(self.dinosaurs.read().await.rows.get(&id).cloned())
    }

    async fn list_dinosaurs_by_cage(&self, cage_id: i64) -> Result<Vec<Dinosaur>, DomainError> {
        Ok(self
            .dinosaurs
            .read()
            .await
            .rows
            .values()
            .filter(|dino| dino.cage_id == cage_id)
            .cloned()
            .collect())
    }

    async fn insert_dinosaur(&self, dinosaur: DinosaurDraft) -> Result<(), DomainError> {
        let mut table = self.dinosaurs.write().await;
        let id = table.allocate_id();
        table.rows.insert(
            id,
            Dinosaur {
                id,
                name: dinosaur.name,
                species: dinosaur.species,
                cage_id: dinosaur.cage_id,
            },
        );
        Ok(())
    }

    async fn update_dinosaur(
        &self,
        id: i64,
        name: &str,
        cage_id: i64,
    ) -> Result<u64, DomainError> {
        let mut table = self.dinosaurs.write().await;
        let Some(dino) = table.rows.get_mut(&id) else {
            return Ok(0);
        };

        dino.name = name.to_string();
        dino.cage_id = cage_id;
        Ok(1)
    }

    async fn list_cages(&self) -> Result<Vec<Cage>, DomainError> {
        Ok(self.cages.read().await.rows.values().cloned().collect())
    }

    async fn get_cage(&self, id: i64) -> Result<Option<Cage>, DomainError> {
        Ok(self.cages.read().await.rows.get(&id).cloned())
    }

    async fn insert_cage(&self, cage: CageDraft) -> Result<(), DomainError> {
        let mut table = self.cages.write().await;
        let id = table.allocate_id();
        table.rows.insert(
            id,
            Cage {
                id,
                name: cage.name,
                status: cage.status,
            },
        );
        Ok(())
    }

    async fn update_cage(&self, id: i64, cage: CageDraft) -> Result<u64, DomainError> {
        let mut table = self.cages.write().await;
        let Some(existing) = table.rows.get_mut(&id) else {
            return Ok(0);
        };

        existing.name = cage.name;
        existing.status = cage.status;
        Ok(1)
    }
}
