use sea_orm::DatabaseConnection;

/// Shared application state. The pool is cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
