use crate::blog_actor::BlogError;
use crate::model::{BlogCreate, BlogPost};
use async_trait::async_trait;
use storefront_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Blog actor.
#[derive(Clone)]
pub struct BlogClient {
    inner: ResourceClient<BlogPost>,
}

impl BlogClient {
    pub fn new(inner: ResourceClient<BlogPost>) -> Self {
        Self { inner }
    }

    /// Publishes a post and returns it as stored, id included.
    #[instrument(skip(self, post), fields(title = %post.title))]
    pub async fn create_post(&self, post: BlogCreate) -> Result<BlogPost, BlogError> {
        debug!("Sending request");
        let id = self.inner.create(post).await.map_err(Self::map_error)?;
        self.get(id).await?.ok_or_else(|| {
            BlogError::ActorCommunicationError(format!("{id} missing after create"))
        })
    }

    /// All stored posts, ordered by id.
    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, BlogError> {
        self.list().await
    }
}

#[async_trait]
impl ActorClient<BlogPost> for BlogClient {
    type Error = BlogError;

    fn inner(&self) -> &ResourceClient<BlogPost> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<BlogError>()
            .unwrap_or_else(|e| BlogError::ActorCommunicationError(e.to_string()))
    }
}
