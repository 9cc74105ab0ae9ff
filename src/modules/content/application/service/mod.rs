pub mod blog_slug_service;
pub mod collection_service;
pub mod singleton_service;

pub use blog_slug_service::FindBlogBySlugService;
pub use collection_service::CollectionService;
pub use singleton_service::SingletonService;

use crate::content::application::ports::incoming::use_cases::ContentError;
use crate::content::application::ports::outgoing::RepositoryError;

impl From<RepositoryError> for ContentError {
    fn from(e: RepositoryError) -> Self {
        ContentError::PersistenceError(e.to_string())
    }
}
