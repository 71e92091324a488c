//! Diesel schema for chore catalogue persistence.

diesel::table! {
    /// Recurring chores with unique names.
    chores (id) {
        /// Chore identifier.
        id -> Uuid,
        /// Unique chore name.
        #[max_length = 255]
        name -> Varchar,
        /// What the chore involves.
        description -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
