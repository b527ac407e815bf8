//! Database layer: pool, migrations and PostgreSQL stores.

mod entries;
mod pool;
mod users;

pub use entries::{EntryRow, PgEntryRepository};
pub use pool::{create_pool, run_migrations, DbPool};
pub use users::{PgUserRepository, UserRow};
