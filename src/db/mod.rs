use sea_orm::{ConnectionTrait, DbBackend, EntityTrait, QuerySelect, Select};

pub mod category;
pub mod chat;
pub mod course;
pub mod database_service;
pub mod lesson;
pub mod user;

/// `SELECT ... FOR UPDATE` where the backend has row locks. SQLite has none and
/// already serializes writers, so the query is left as is there.
pub(crate) fn for_update<E: EntityTrait, C: ConnectionTrait>(db: &C, select: Select<E>) -> Select<E> {
    match db.get_database_backend() {
        DbBackend::Sqlite => select,
        _ => select.lock_exclusive(),
    }
}
