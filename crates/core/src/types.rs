/// Event and notification primary keys are UUID v4.
pub type EventId = uuid::Uuid;

/// See [`EventId`].
pub type NotificationId = uuid::Uuid;

/// User ids are caller-supplied opaque strings. The pipeline treats any
/// non-empty string as a valid user id and never verifies existence.
pub type UserId = String;

/// Sequence counters and dead-letter keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
