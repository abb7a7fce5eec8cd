//! Per-request database session.
//!
//! Handlers call [`Session::begin`] only after every extractor, the request
//! body included, has finished, so a pooled connection is never held while a
//! client is still uploading. The handler passes `session.conn()` to the
//! service layer and calls [`Session::commit`] once. A session that is dropped
//! uncommitted (error path, client gone) rolls back and hands its connection
//! back to the pool.

use sea_orm::{DatabaseTransaction, DbErr, TransactionTrait};
use tracing::trace;

use crate::state::ServerState;

pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    pub async fn begin(state: &ServerState) -> Result<Self, DbErr> {
        let txn = state.db.begin().await?;
        trace!("session opened");
        Ok(Self { txn })
    }

    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await?;
        trace!("session committed");
        Ok(())
    }
}
