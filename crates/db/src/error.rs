/// Failure of a [`PoemStore`](crate::repositories::PoemStore) operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request was rejected before reaching the database.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The database (or the pool in front of it) failed.
    #[error("Failed to {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    /// Wrap a sqlx error with the name of the operation that produced it.
    ///
    /// Meant for `map_err(StoreError::database("list poems"))`.
    pub fn database(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Database { operation, source }
    }

    /// True when no pooled connection became free within the acquire timeout.
    pub fn is_pool_timeout(&self) -> bool {
        matches!(
            self,
            Self::Database {
                source: sqlx::Error::PoolTimedOut,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_names_the_operation() {
        let err = StoreError::database("delete poem")(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Failed to delete poem: "));
        assert!(!err.is_pool_timeout());
    }

    #[test]
    fn pool_timeout_is_detected() {
        let err = StoreError::database("count poems")(sqlx::Error::PoolTimedOut);
        assert!(err.is_pool_timeout());
    }
}
