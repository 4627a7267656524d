// Service exports
pub mod cache;
pub mod directory;
pub mod matching;
pub mod memory;
pub mod postgres;

pub use cache::{CachedDirectory, CacheKey};
pub use directory::{DirectoryError, MentorDirectory};
pub use matching::{MatchError, MatchingService};
pub use memory::MemoryDirectory;
pub use postgres::PostgresDirectory;
