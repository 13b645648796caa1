use crate::model::{Profile, ProfileCreate};
use crate::profile_actor::ProfileError;
use async_trait::async_trait;
use storefront_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Profile actor.
#[derive(Clone)]
pub struct ProfileClient {
    inner: ResourceClient<Profile>,
}

impl ProfileClient {
    pub fn new(inner: ResourceClient<Profile>) -> Self {
        Self { inner }
    }

    /// Validates the form, stores the avatar and returns the saved profile.
    #[instrument(
        skip(self, profile),
        fields(email = %profile.email, file = %profile.avatar.file_name)
    )]
    pub async fn upload_profile(&self, profile: ProfileCreate) -> Result<Profile, ProfileError> {
        debug!("Sending request");
        let id = self.inner.create(profile).await.map_err(Self::map_error)?;
        self.get(id).await?.ok_or_else(|| {
            ProfileError::ActorCommunicationError(format!("{id} missing after create"))
        })
    }
}

#[async_trait]
impl ActorClient<Profile> for ProfileClient {
    type Error = ProfileError;

    fn inner(&self) -> &ResourceClient<Profile> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<ProfileError>()
            .unwrap_or_else(|e| ProfileError::ActorCommunicationError(e.to_string()))
    }
}
