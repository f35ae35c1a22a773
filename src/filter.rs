use crate::models::Repository;

/// Repositories whose name contains `query`, ignoring case, in their original
/// order. An empty query keeps everything.
pub fn filter(repos: &[Repository], query: &str) -> Vec<Repository> {
    let query = query.to_lowercase();
    repos
        .iter()
        .filter(|repo| repo.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
