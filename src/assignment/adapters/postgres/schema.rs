//! Diesel schema for assignment persistence.
//!
//! A partial unique index (`idx_assignments_open_unique`, see the
//! migrations) restricts each chore to one row whose `review_state` is not
//! `approved`. Diesel's `table!` macro cannot express partial indexes, so the
//! constraint lives in raw SQL and is mapped by name in the repository.

diesel::table! {
    /// Chore assignments with completion and review state.
    assignments (id) {
        /// Assignment identifier.
        id -> Uuid,
        /// Chore this assignment belongs to.
        chore_id -> Uuid,
        /// Participant responsible for the work.
        assignee_id -> Uuid,
        /// When the assignment was created.
        assigned_at -> Timestamptz,
        /// When the work was last completed, if ever.
        completed_at -> Nullable<Timestamptz>,
        /// Review verdict: pending, approved, or rejected.
        #[max_length = 50]
        review_state -> Varchar,
        /// Notes recorded at completion.
        completion_notes -> Nullable<Text>,
        /// When the verdict was recorded, if any.
        reviewed_at -> Nullable<Timestamptz>,
        /// Reason recorded with the verdict.
        review_reason -> Nullable<Text>,
    }
}
