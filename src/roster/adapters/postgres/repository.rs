//! `PostgreSQL` repository implementation for roster storage.

use super::{
    models::{NewParticipantRow, ParticipantRow},
    schema::participants,
};
use crate::roster::{
    domain::{Participant, ParticipantId, ParticipantName, PersistedParticipantData, RosterOrdinal},
    ports::{RosterRepository, RosterRepositoryError, RosterRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::dsl::max;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by roster adapters.
pub type RosterPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed roster repository.
#[derive(Debug, Clone)]
pub struct PostgresRosterRepository {
    pool: RosterPgPool,
}

impl PostgresRosterRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: RosterPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RosterRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RosterRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RosterRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RosterRepositoryError::persistence)?
    }
}

#[async_trait]
impl RosterRepository for PostgresRosterRepository {
    async fn register(
        &self,
        name: ParticipantName,
        registered_at: DateTime<Utc>,
    ) -> RosterRepositoryResult<Participant> {
        self.run_blocking(move |connection| {
            connection
                .transaction(|connection| {
                    let highest: Option<i32> = participants::table
                        .select(max(participants::ordinal))
                        .first(connection)?;
                    let ordinal = highest.map_or(0, |value| value + 1);

                    let new_row = NewParticipantRow {
                        id: ParticipantId::new().into_inner(),
                        username: name.as_str().to_owned(),
                        ordinal,
                        active: true,
                        registered_at,
                    };
                    diesel::insert_into(participants::table)
                        .values(&new_row)
                        .get_result::<ParticipantRow>(connection)
                })
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if info.constraint_name() == Some("participants_username_key") =>
                    {
                        RosterRepositoryError::DuplicateName(name.clone())
                    }
                    _ => RosterRepositoryError::persistence(err),
                })
                .and_then(row_to_participant)
        })
        .await
    }

    async fn find(&self, id: ParticipantId) -> RosterRepositoryResult<Option<Participant>> {
        self.run_blocking(move |connection| {
            let row = participants::table
                .filter(participants::id.eq(id.into_inner()))
                .select(ParticipantRow::as_select())
                .first::<ParticipantRow>(connection)
                .optional()
                .map_err(RosterRepositoryError::persistence)?;
            row.map(row_to_participant).transpose()
        })
        .await
    }

    async fn list_active(&self) -> RosterRepositoryResult<Vec<Participant>> {
        self.run_blocking(move |connection| {
            let rows = participants::table
                .filter(participants::active.eq(true))
                .order(participants::ordinal.asc())
                .select(ParticipantRow::as_select())
                .load::<ParticipantRow>(connection)
                .map_err(RosterRepositoryError::persistence)?;
            rows.into_iter().map(row_to_participant).collect()
        })
        .await
    }

    async fn deactivate(&self, id: ParticipantId) -> RosterRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                participants::table.filter(participants::id.eq(id.into_inner())),
            )
            .set(participants::active.eq(false))
            .execute(connection)
            .map_err(RosterRepositoryError::persistence)?;

            if updated == 0 {
                return Err(RosterRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_participant(row: ParticipantRow) -> RosterRepositoryResult<Participant> {
    let name = ParticipantName::new(row.username).map_err(RosterRepositoryError::persistence)?;
    let ordinal = RosterOrdinal::new(row.ordinal).map_err(RosterRepositoryError::persistence)?;

    Ok(Participant::from_persisted(PersistedParticipantData {
        id: ParticipantId::from_uuid(row.id),
        name,
        ordinal,
        active: row.active,
        registered_at: row.registered_at,
    }))
}
