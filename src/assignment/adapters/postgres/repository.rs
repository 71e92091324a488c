//! `PostgreSQL` repository implementation for assignment storage.
//!
//! State transitions run inside a single transaction that locks the open row
//! with `SELECT ... FOR UPDATE`, validates against the freshly-read state,
//! and writes the result, so two concurrent transitions for the same chore
//! serialize against the unique open row.

use super::{
    models::{AssignmentRow, NewAssignmentRow},
    schema::assignments,
};
use crate::assignment::{
    domain::{
        Assignment, AssignmentDomainError, AssignmentId, PersistedAssignmentData, ReviewState,
    },
    ports::{AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult},
};
use crate::chore::domain::ChoreId;
use crate::roster::domain::ParticipantId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by assignment adapters.
pub type AssignmentPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed assignment repository.
#[derive(Debug, Clone)]
pub struct PostgresAssignmentRepository {
    pool: AssignmentPgPool,
}

impl PostgresAssignmentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AssignmentPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AssignmentRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AssignmentRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AssignmentRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AssignmentRepositoryError::persistence)?
    }
}

/// Transaction-internal error that keeps Diesel rollback plumbing out of the
/// port error type.
enum TxError {
    Repo(AssignmentRepositoryError),
    Db(DieselError),
}

impl From<DieselError> for TxError {
    fn from(err: DieselError) -> Self {
        Self::Db(err)
    }
}

impl TxError {
    fn into_repository_error(self) -> AssignmentRepositoryError {
        match self {
            Self::Repo(err) => err,
            Self::Db(err) => AssignmentRepositoryError::persistence(err),
        }
    }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
    async fn create(&self, assignment: &Assignment) -> AssignmentRepositoryResult<()> {
        let chore_id = assignment.chore_id();
        let new_row = to_new_row(assignment);

        self.run_blocking(move |connection| {
            diesel::insert_into(assignments::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_open_unique_violation(info.as_ref()) =>
                    {
                        AssignmentRepositoryError::OpenAssignmentExists(chore_id)
                    }
                    _ => AssignmentRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_open(
        &self,
        chore_id: ChoreId,
    ) -> AssignmentRepositoryResult<Option<Assignment>> {
        self.run_blocking(move |connection| {
            let row = assignments::table
                .filter(assignments::chore_id.eq(chore_id.into_inner()))
                .filter(assignments::review_state.ne(ReviewState::Approved.as_str()))
                .select(AssignmentRow::as_select())
                .first::<AssignmentRow>(connection)
                .optional()
                .map_err(AssignmentRepositoryError::persistence)?;
            row.map(row_to_assignment).transpose()
        })
        .await
    }

    async fn find_latest(
        &self,
        chore_id: ChoreId,
    ) -> AssignmentRepositoryResult<Option<Assignment>> {
        self.run_blocking(move |connection| {
            let row = assignments::table
                .filter(assignments::chore_id.eq(chore_id.into_inner()))
                .order((assignments::assigned_at.desc(), assignments::id.desc()))
                .select(AssignmentRow::as_select())
                .first::<AssignmentRow>(connection)
                .optional()
                .map_err(AssignmentRepositoryError::persistence)?;
            row.map(row_to_assignment).transpose()
        })
        .await
    }

    async fn list_open(&self) -> AssignmentRepositoryResult<Vec<Assignment>> {
        self.run_blocking(move |connection| {
            let rows = assignments::table
                .filter(assignments::review_state.ne(ReviewState::Approved.as_str()))
                .order((assignments::assigned_at.asc(), assignments::id.asc()))
                .select(AssignmentRow::as_select())
                .load::<AssignmentRow>(connection)
                .map_err(AssignmentRepositoryError::persistence)?;
            rows.into_iter().map(row_to_assignment).collect()
        })
        .await
    }

    async fn update_open<F>(
        &self,
        chore_id: ChoreId,
        apply: F,
    ) -> AssignmentRepositoryResult<Assignment>
    where
        F: FnOnce(&mut Assignment) -> Result<(), AssignmentDomainError> + Send + 'static,
    {
        self.run_blocking(move |connection| {
            connection
                .transaction::<Assignment, TxError, _>(|connection| {
                    let row = assignments::table
                        .filter(assignments::chore_id.eq(chore_id.into_inner()))
                        .filter(assignments::review_state.ne(ReviewState::Approved.as_str()))
                        .for_update()
                        .select(AssignmentRow::as_select())
                        .first::<AssignmentRow>(connection)
                        .optional()?
                        .ok_or(TxError::Repo(AssignmentRepositoryError::NoOpenAssignment(
                            chore_id,
                        )))?;

                    let mut assignment = row_to_assignment(row).map_err(TxError::Repo)?;
                    apply(&mut assignment).map_err(|err| {
                        TxError::Repo(AssignmentRepositoryError::InvalidTransition(err))
                    })?;

                    diesel::update(
                        assignments::table
                            .filter(assignments::id.eq(assignment.id().into_inner())),
                    )
                    .set((
                        assignments::completed_at.eq(assignment.completed_at()),
                        assignments::review_state.eq(assignment.review_state().as_str()),
                        assignments::completion_notes
                            .eq(assignment.completion_notes().map(str::to_owned)),
                        assignments::reviewed_at.eq(assignment.reviewed_at()),
                        assignments::review_reason
                            .eq(assignment.review_reason().map(str::to_owned)),
                    ))
                    .execute(connection)?;

                    Ok(assignment)
                })
                .map_err(TxError::into_repository_error)
        })
        .await
    }
}

fn to_new_row(assignment: &Assignment) -> NewAssignmentRow {
    NewAssignmentRow {
        id: assignment.id().into_inner(),
        chore_id: assignment.chore_id().into_inner(),
        assignee_id: assignment.assignee_id().into_inner(),
        assigned_at: assignment.assigned_at(),
        completed_at: assignment.completed_at(),
        review_state: assignment.review_state().as_str().to_owned(),
        completion_notes: assignment.completion_notes().map(str::to_owned),
        reviewed_at: assignment.reviewed_at(),
        review_reason: assignment.review_reason().map(str::to_owned),
    }
}

fn row_to_assignment(row: AssignmentRow) -> AssignmentRepositoryResult<Assignment> {
    let review_state = ReviewState::try_from(row.review_state.as_str())
        .map_err(AssignmentRepositoryError::persistence)?;

    Ok(Assignment::from_persisted(PersistedAssignmentData {
        id: AssignmentId::from_uuid(row.id),
        chore_id: ChoreId::from_uuid(row.chore_id),
        assignee_id: ParticipantId::from_uuid(row.assignee_id),
        assigned_at: row.assigned_at,
        completed_at: row.completed_at,
        review_state,
        completion_notes: row.completion_notes,
        reviewed_at: row.reviewed_at,
        review_reason: row.review_reason,
    }))
}

fn is_open_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "idx_assignments_open_unique")
}
