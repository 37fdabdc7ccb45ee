//! Clipstore Database Library
//!
//! Persistence for video metadata: the repository contract, the flat row
//! representation with its entity mapper, and the Postgres implementation.

pub mod mapper;
pub mod repository;
pub mod videos;

pub use mapper::VideoRow;
pub use repository::VideoRepository;
pub use videos::PgVideoRepository;
