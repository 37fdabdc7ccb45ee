//! Mock collaborators for service and handler tests.

mod mock_repository;
mod mock_storage;

pub use mock_repository::InMemoryVideoRepository;
pub use mock_storage::MockStorage;
