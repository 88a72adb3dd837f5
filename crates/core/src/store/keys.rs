/// Builds the storage key for one user's collection.
///
/// Per-user data is isolated by key convention: `<namespace>_<user>_<collection>`.
pub fn collection_key(namespace: &str, username: &str, collection: &str) -> String {
    format!("{}_{}_{}", namespace, username, collection)
}
