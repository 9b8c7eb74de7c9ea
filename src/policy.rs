//! Pluggable ID and version policies, injected at store construction.

/// Computes the identity for the next inserted record from the keys
/// currently occupied in the store.
///
/// Required at construction; no default is safe across arbitrary key
/// types. A policy that returns an occupied key surfaces as a
/// `DuplicateId` error on insert rather than overwriting data.
pub type NextId<K> = Box<dyn Fn(&[K]) -> K + Send + Sync>;

/// Rotates a version token after a successful version-checked update.
pub type IncrementVersion = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Default version policy: tokens never advance.
///
/// The conflict check still runs under this policy, but every caller
/// holding the original token keeps passing it. Callers that want stale
/// updates detected supply their own policy or [`numeric_version`].
pub fn keep_version() -> IncrementVersion {
    Box::new(|version| version.to_string())
}

/// Parses the token as an unsigned integer and increments it.
/// Non-numeric tokens pass through unchanged.
pub fn numeric_version() -> IncrementVersion {
    Box::new(|version| match version.parse::<u64>() {
        Ok(n) => (n + 1).to_string(),
        Err(_) => version.to_string(),
    })
}
