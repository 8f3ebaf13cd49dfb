/// Timestamp type used for every `generatedAt` / `startedAt` value.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current wall-clock time as a [`Timestamp`].
pub fn now() -> Timestamp {
    chrono::Utc::now()
}
