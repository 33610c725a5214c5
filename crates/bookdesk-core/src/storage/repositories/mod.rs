mod book_repository;
mod memory_repository;

pub use book_repository::{BookRepository, SqliteBookRepository};
pub use memory_repository::InMemoryBookRepository;

use crate::error::Result;

pub trait Repository {
    type Entity;
    type Id: ?Sized;

    fn find_by_id(&self, id: &Self::Id) -> Result<Option<Self::Entity>>;
    /// Insert, or replace the entity with the same id in place.
    fn save(&self, entity: &Self::Entity) -> Result<()>;
    fn delete(&self, id: &Self::Id) -> Result<bool>;
}
