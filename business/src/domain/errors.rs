/// Failures reported by repository adapters.
/// Messages are code-style identifiers so clients can translate them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
}
