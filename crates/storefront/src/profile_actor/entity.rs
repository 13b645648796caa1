//! ActorEntity implementation for [`Profile`].
//!
//! All form checks run in `from_create_params`, so nothing touches the disk for a
//! rejected upload. `on_create` writes the avatar and records where it went.

use super::avatar_store::AvatarStore;
use super::error::ProfileError;
use super::{AVATAR_EXTENSIONS, MAX_AVATAR_BYTES};
use crate::model::{AvatarUpload, Profile, ProfileCreate, ProfileId};
use crate::validation::is_valid_email;
use async_trait::async_trait;
use std::path::PathBuf;
use storefront_actor::ActorEntity;

fn check_avatar(avatar: &AvatarUpload) -> Result<(), ProfileError> {
    let extension = avatar.extension().to_lowercase();
    if avatar.bytes.len() > MAX_AVATAR_BYTES || !AVATAR_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ProfileError::InvalidAvatar {
            file_name: avatar.file_name.clone(),
            size: avatar.bytes.len(),
            extension: avatar.extension().to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Profile {
    type Id = ProfileId;
    type Create = ProfileCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = AvatarStore;
    type Error = ProfileError;

    fn from_create_params(id: ProfileId, params: ProfileCreate) -> Result<Self, Self::Error> {
        let length = params.name.chars().count();
        if !(2..=30).contains(&length) {
            return Err(ProfileError::InvalidName { length });
        }
        if !is_valid_email(&params.email) {
            return Err(ProfileError::InvalidEmail {
                email: params.email,
            });
        }
        check_avatar(&params.avatar)?;

        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            avatar_path: PathBuf::new(),
            pending_avatar: Some(params.avatar),
        })
    }

    async fn on_create(&mut self, store: &AvatarStore) -> Result<(), Self::Error> {
        if let Some(upload) = self.pending_avatar.take() {
            self.avatar_path = store.save(&upload).await?;
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &AvatarStore) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &AvatarStore) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, email: &str, file_name: &str, size: usize) -> ProfileCreate {
        ProfileCreate {
            name: name.to_string(),
            email: email.to_string(),
            avatar: AvatarUpload {
                file_name: file_name.to_string(),
                bytes: vec![0; size],
            },
        }
    }

    #[test]
    fn name_length_is_bounded() {
        let short = Profile::from_create_params(ProfileId(1), create("a", "a@b.io", "a.png", 1));
        assert_eq!(short.unwrap_err(), ProfileError::InvalidName { length: 1 });

        let long = "x".repeat(31);
        let long = Profile::from_create_params(ProfileId(1), create(&long, "a@b.io", "a.png", 1));
        assert_eq!(long.unwrap_err(), ProfileError::InvalidName { length: 31 });

        let multibyte =
            Profile::from_create_params(ProfileId(1), create("Zoë", "a@b.io", "a.png", 1));
        assert!(multibyte.is_ok());
    }

    #[test]
    fn email_must_be_valid() {
        let result = Profile::from_create_params(ProfileId(1), create("Ada", "nope", "a.png", 1));
        assert!(matches!(result, Err(ProfileError::InvalidEmail { .. })));
    }

    #[test]
    fn avatar_limits() {
        let at_limit =
            Profile::from_create_params(ProfileId(1), create("Ada", "a@b.io", "a.JPEG", 300_000));
        assert!(at_limit.is_ok());

        let too_big =
            Profile::from_create_params(ProfileId(1), create("Ada", "a@b.io", "a.png", 300_001));
        assert!(matches!(
            too_big,
            Err(ProfileError::InvalidAvatar { size: 300_001, .. })
        ));

        let wrong_type =
            Profile::from_create_params(ProfileId(1), create("Ada", "a@b.io", "a.gif", 10));
        assert_eq!(
            wrong_type.unwrap_err(),
            ProfileError::InvalidAvatar {
                file_name: "a.gif".to_string(),
                size: 10,
                extension: "gif".to_string(),
            }
        );
    }

    #[test]
    fn dotless_file_name_is_reported_whole() {
        let err = Profile::from_create_params(ProfileId(1), create("Ada", "a@b.io", "avatar", 10))
            .unwrap_err();
        assert_eq!(err.detail()["uploaded_extention"], "avatar");
    }

    #[tokio::test]
    async fn on_create_stores_the_avatar() {
        let root = tempfile::tempdir().unwrap();
        let store = AvatarStore::new(root.path().join("image"));

        let params = create("Ada", "ada@example.com", "me.png", 64);
        let mut profile = Profile::from_create_params(ProfileId(3), params).unwrap();
        profile.on_create(&store).await.unwrap();

        assert!(profile.pending_avatar.is_none());
        assert_eq!(profile.avatar_path.extension().unwrap(), "png");
        assert_eq!(tokio::fs::read(&profile.avatar_path).await.unwrap().len(), 64);
    }
}
