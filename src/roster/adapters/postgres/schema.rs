//! Diesel schema for roster persistence.

diesel::table! {
    /// Roster participants with stable rotation ordinals.
    participants (id) {
        /// Participant identifier.
        id -> Uuid,
        /// Unique participant name.
        #[max_length = 255]
        username -> Varchar,
        /// Stable rotation ordinal, unique and never reused.
        ordinal -> Int4,
        /// Whether the participant is eligible for rotation.
        active -> Bool,
        /// Registration timestamp.
        registered_at -> Timestamptz,
    }
}
