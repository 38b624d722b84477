use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseBackend, Statement, TransactionTrait};
use tokio::sync::Mutex;
use typed_builder::TypedBuilder;

use super::Database;

/// Request scoped repository.
///
/// Writes to runtime rows are buffered as statements and committed together in one
/// transaction by [`OrmRepo::save_changed`]. Every repository of a scope shares one
/// `OrmRepo`, so one `save_changed` commits everything the scope wrote.
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
    #[builder(default)]
    pub statements: Arc<Mutex<Vec<Statement>>>,
    #[builder(default = AtomicBool::new(true))]
    pub can_drop: AtomicBool,
}

impl OrmRepo {
    pub fn backend(&self) -> DatabaseBackend {
        self.db.get_connection().get_database_backend()
    }

    pub async fn push(&self, stmts: impl IntoIterator<Item = Statement>) {
        let mut buffer = self.statements.lock().await;
        buffer.extend(stmts);
        self.can_drop.store(false, Ordering::Relaxed);
    }

    pub async fn save_changed(&self) -> anyhow::Result<bool> {
        if self.can_drop.load(Ordering::Relaxed) {
            return Ok(false);
        }
        let mut stmts = self.statements.lock().await;
        let trans = self.db.get_connection().begin().await?;
        for stmt in stmts.iter() {
            if let Err(e) = trans.execute(stmt.clone()).await {
                trans.rollback().await?;
                stmts.clear();
                self.can_drop.store(true, Ordering::Relaxed);
                anyhow::bail!(e);
            }
        }
        trans.commit().await?;
        self.can_drop.store(true, Ordering::Relaxed);
        stmts.clear();
        Ok(true)
    }
}

impl Drop for OrmRepo {
    fn drop(&mut self) {
        if self.can_drop.load(Ordering::Relaxed) {
            return;
        }
        if let Ok(stmts) = self.statements.try_lock() {
            let sqls = stmts.iter().map(|x| x.to_string()).collect::<Vec<String>>().join("\n");
            tracing::trace!("Unused sql statements:\n{sqls}")
        }
    }
}
