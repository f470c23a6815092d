use async_trait::async_trait;

use crate::domain::{
    cage::{Cage, CageDraft},
    dinosaur::{Dinosaur, DinosaurDraft},
    errors::DomainError,
};

pub mod in_memory_dino_repository;
pub mod postgres_dino_repository;

/// Narrow gateway over the `dinosaur` and `cage` tables.
///
/// Every method is a single statement. Errors are always
/// `DomainError::Persistence`; absence is reported as `None` or an empty vec.
#[async_trait]
pub trait DinoRepository: Send + Sync {
    /// All dinosaurs in ascending id order.
    async fn list_dinosaurs(&self) -> Result<Vec<Dinosaur>, DomainError>;
    async fn get_dinosaur(&self, id: i64) -> Result<Option<Dinosaur>, DomainError>;
    /// Occupants of `cage_id` in ascending id order.
    async fn list_dinosaurs_by_cage(&self, cage_id: i64) -> Result<Vec<Dinosaur>, DomainError>;
    async fn insert_dinosaur(&self, dinosaur: DinosaurDraft) -> Result<(), DomainError>;
    /// Rewrites name and cage assignment only. Returns the affected row count.
    async fn update_dinosaur(&self, id: i64, name: &str, cage_id: i64)
    -> Result<u64, DomainError>;

    async fn list_cages(&self) -> Result<Vec<Cage>, DomainError>;
    async fn get_cage(&self, id: i64) -> Result<Option<Cage>, DomainError>;
    async fn insert_cage(&self, cage: CageDraft) -> Result<(), DomainError>;
    async fn update_cage(&self, id: i64, cage: CageDraft) -> Result<u64, DomainError>;
}
