use uuid::Uuid;

/// Generate a snippet identifier: a random v4 UUID in the uppercase
/// hyphenated form Alfred uses in its own snippet files.
///
/// Uniqueness within a run rests on the v4 collision bound; no explicit
/// bookkeeping is needed.
pub fn generate() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}
