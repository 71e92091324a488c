//! `PostgreSQL` repository implementation for chore catalogue storage.

use super::{
    models::{ChoreRow, NewChoreRow},
    schema::chores,
};
use crate::chore::{
    domain::{Chore, ChoreId, ChoreName, PersistedChoreData},
    ports::{ChoreRepository, ChoreRepositoryError, ChoreRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by chore adapters.
pub type ChorePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed chore repository.
#[derive(Debug, Clone)]
pub struct PostgresChoreRepository {
    pool: ChorePgPool,
}

impl PostgresChoreRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ChorePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ChoreRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ChoreRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ChoreRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ChoreRepositoryError::persistence)?
    }
}

#[async_trait]
impl ChoreRepository for PostgresChoreRepository {
    async fn create(&self, chore: &Chore) -> ChoreRepositoryResult<()> {
        let new_row = NewChoreRow {
            id: chore.id().into_inner(),
            name: chore.name().as_str().to_owned(),
            description: chore.description().to_owned(),
            created_at: chore.created_at(),
        };
        let name = chore.name().clone();

        self.run_blocking(move |connection| {
            diesel::insert_into(chores::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ChoreRepositoryError::DuplicateName(name.clone())
                    }
                    _ => ChoreRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find(&self, id: ChoreId) -> ChoreRepositoryResult<Option<Chore>> {
        self.run_blocking(move |connection| {
            let row = chores::table
                .filter(chores::id.eq(id.into_inner()))
                .select(ChoreRow::as_select())
                .first::<ChoreRow>(connection)
                .optional()
                .map_err(ChoreRepositoryError::persistence)?;
            row.map(row_to_chore).transpose()
        })
        .await
    }

    async fn list(&self) -> ChoreRepositoryResult<Vec<Chore>> {
        self.run_blocking(move |connection| {
            let rows = chores::table
                .order(chores::name.asc())
                .select(ChoreRow::as_select())
                .load::<ChoreRow>(connection)
                .map_err(ChoreRepositoryError::persistence)?;
            rows.into_iter().map(row_to_chore).collect()
        })
        .await
    }
}

fn row_to_chore(row: ChoreRow) -> ChoreRepositoryResult<Chore> {
    let name = ChoreName::new(row.name).map_err(ChoreRepositoryError::persistence)?;

    Ok(Chore::from_persisted(PersistedChoreData {
        id: ChoreId::from_uuid(row.id),
        name,
        description: row.description,
        created_at: row.created_at,
    }))
}
