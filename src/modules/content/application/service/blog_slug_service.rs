use async_trait::async_trait;

use crate::content::application::domain::entities::Blog;
use crate::content::application::domain::record::Record;
use crate::content::application::ports::incoming::use_cases::{
    ContentError, FindBlogBySlugUseCase,
};
use crate::content::application::ports::outgoing::CollectionRepository;

pub struct FindBlogBySlugService<R>
where
    R: CollectionRepository<Blog>,
{
    repository: R,
}

impl<R> FindBlogBySlugService<R>
where
    R: CollectionRepository<Blog>,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> FindBlogBySlugUseCase for FindBlogBySlugService<R>
where
    R: CollectionRepository<Blog>,
{
    /// Slugs are not unique; the first match in stored order wins.
    async fn execute(&self, slug: &str) -> Result<Record<Blog>, ContentError> {
        self.repository
            .load()
            .await?
            .into_iter()
            .find(|record| record.fields.slug == slug)
            .ok_or(ContentError::NotFound)
    }
}
