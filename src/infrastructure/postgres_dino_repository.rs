use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    domain::{
        cage::{Cage, CageDraft, CageStatus},
        dinosaur::{Dinosaur, DinosaurDraft, Species},
        errors::DomainError,
    },
    infrastructure::DinoRepository,
};

// `serial` and `integer` columns are INT4; they are widened in every SELECT
// so rows decode into i64 ids.
const SELECT_DINOSAURS: &str = r#"
    SELECT id::BIGINT AS id, dino_name, dino_species, cage_id::BIGINT AS cage_id
    FROM dinosaur
"#;

const SELECT_CAGES: &str = r#"
    SELECT id::BIGINT AS id, cage_name, cage_status
    FROM cage
"#;

#[derive(Clone)]
pub struct PostgresDinoRepository {
    pool: PgPool,
}

impl PostgresDinoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DinosaurRow {
    id: i64,
    dino_name: String,
    dino_species: String,
    cage_id: i64,
}

impl TryFrom<DinosaurRow> for Dinosaur {
    type Error = DomainError;

    fn try_from(row: DinosaurRow) -> Result<Self, Self::Error> {
        let species = row.dino_species.parse::<Species>().map_err(|err| {
            DomainError::persistence(format!("dinosaur {} has {err}", row.id))
        })?;

        Ok(Dinosaur {
            id: row.id,
            name: row.dino_name,
            species,
            cage_id: row.cage_id,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CageRow {
    id: i64,
    cage_name: String,
    cage_status: String,
}

impl TryFrom<CageRow> for Cage {
    type Error = DomainError;

    fn try_from(row: CageRow) -> Result<Self, Self::Error> {
        let status = row
            .cage_status
            .parse::<CageStatus>()
            .map_err(|err| DomainError::persistence(format!("cage {} has {err}", row.id)))?;

        Ok(Cage {
            id: row.id,
            name: row.cage_name,
            status,
        })
    }
}

#[async_trait]
impl DinoRepository for PostgresDinoRepository {
    async fn list_dinosaurs(&self) -> Result<Vec<Dinosaur>, DomainError> {
        let rows = sqlx::query_as::<_, DinosaurRow>(&format!("{SELECT_DINOSAURS} ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(Dinosaur::try_from).collect()
    }

    async fn get_dinosaur(&self, id: i64) -> Result<Option<Dinosaur>, DomainError> {
        let maybe_row =
            sqlx::query_as::<_, DinosaurRow>(&format!("{SELECT_DINOSAURS} WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        maybe_row.map(Dinosaur::try_from).transpose()
    }

    async fn list_dinosaurs_by_cage(&self, cage_id: i64) -> Result<Vec<Dinosaur>, DomainError> {
        let rows = sqlx::query_as::<_, DinosaurRow>(&format!(
            "{SELECT_DINOSAURS} WHERE cage_id = $1 ORDER BY id ASC"
        ))
        .bind(cage_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Dinosaur::try_from).collect()
    }

    async fn insert_dinosaur(&self, dinosaur: DinosaurDraft) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO dinosaur (dino_name, dino_species, cage_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(dinosaur.name)
        .bind(dinosaur.species.as_str())
        .bind(dinosaur.cage_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn update_dinosaur(
        &self,
        id: i64,
        name: &str,
        cage_id: i64,
    ) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE dinosaur
            SET dino_name = $1, cage_id = $2
            WHERE id = $3
            "#,
        )
        .bind(name)
        .bind(cage_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn list_cages(&self) -> Result<Vec<Cage>, DomainError> {
        let rows = sqlx::query_as::<_, CageRow>(SELECT_CAGES)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(Cage::try_from).collect()
    }

    async fn get_cage(&self, id: i64) -> Result<Option<Cage>, DomainError> {
        let maybe_row = sqlx::query_as::<_, CageRow>(&format!("{SELECT_CAGES} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        maybe_row.map(Cage::try_from).transpose()
    }

    async fn insert_cage(&self, cage: CageDraft) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO cage (cage_name, cage_status) VALUES ($1, $2)")
            .bind(cage.name)
            .bind(cage.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn update_cage(&self, id: i64, cage: CageDraft) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE cage
            SET cage_status = $1, cage_name = $2
            WHERE id = $3
            "#,
        )
        .bind(cage.status.as_str())
        .bind(cage.name)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}

fn map_sqlx_error(error: sqlx::Error) -> DomainError {
    match error {
        sqlx::Error::Database(db_error) => DomainError::persistence(match db_error.code() {
            Some(code) => format!("database error {code}: {db_error}"),
            None => db_error.to_string(),
        }),
        other => DomainError::persistence(other.to_string()),
    }
}
