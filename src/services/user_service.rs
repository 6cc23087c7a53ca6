//! User service

use tracing::info;
use uuid::Uuid;

use crate::{
    access,
    db::{
        repositories::{CategoryRepository, PhotoRepository, UserRepository},
        Store,
    },
    error::{AppError, AppResult},
    handlers::{
        photos::response::PhotoResponse,
        users::response::{SelectedBadgesResponse, UserProfileResponse},
    },
    models::Photo,
    services::RankingService,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Build a user's profile as seen by `viewer`.
    ///
    /// Photos in private categories the viewer cannot see are left out.
    pub fn get_profile(
        store: &Store,
        user_id: &Uuid,
        viewer: Option<Uuid>,
    ) -> AppResult<UserProfileResponse> {
        let user = UserRepository::find_by_id(store, user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let is_owner = viewer == Some(user.id);
        let visible = |photo: &&Photo| {
            CategoryRepository::find_by_id(store, &photo.category_id)
                .is_none_or(|category| access::can_access(category, viewer))
        };

        let (archived, live): (Vec<&Photo>, Vec<&Photo>) =
            PhotoRepository::list_by_user(store, user_id)
                .into_iter()
                .filter(visible)
                .partition(|photo| photo.is_archived);

        let to_response = |photo: &Photo| PhotoResponse::from_photo(photo, viewer);

        Ok(UserProfileResponse {
            id: user.id,
            username: user.username.clone(),
            profile_picture: user.profile_picture.clone(),
            role: user.role.clone(),
            badges: user.badges.clone(),
            selected_badges: user.displayed_badges().into_iter().cloned().collect(),
            is_current_leader: RankingService::is_current_leader(store, user_id),
            photos: live.into_iter().map(to_response).collect(),
            archived_photos: if is_owner {
                archived.into_iter().map(to_response).collect()
            } else {
                Vec::new()
            },
            created_at: user.created_at,
        })
    }

    /// Replace the caller's displayed badges
    pub fn update_selected_badges(
        store: &mut Store,
        user_id: &Uuid,
        badge_ids: &[Uuid],
    ) -> AppResult<SelectedBadgesResponse> {
        let user = UserRepository::find_by_id_mut(store, user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        user.select_badges(badge_ids);
        info!(user_id = %user_id, selected = user.selected_badges.len(), "Badge selection updated");

        Ok(SelectedBadgesResponse {
            selected_badges: user.displayed_badges().into_iter().cloned().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Badge, BadgeKind, Category, CategoryKind},
        test_utils::fixtures::{member, photo_with_votes},
    };

    #[test]
    fn test_archived_photos_only_shown_to_owner() {
        let mut store = Store::new();
        let alex = member("alex_photo");
        let alex_id = alex.id;
        UserRepository::create(&mut store, alex.clone());
        let category_id = CategoryRepository::create(
            &mut store,
            Category::new("Hiking", CategoryKind::OfficialBasic, None),
        )
        .id;

        PhotoRepository::create(&mut store, photo_with_votes(&alex, category_id, 2, 0));
        let mut old = photo_with_votes(&alex, category_id, 1, 0);
        old.is_archived = true;
        PhotoRepository::create(&mut store, old);

        let public = UserService::get_profile(&store, &alex_id, None).unwrap();
        assert_eq!(public.photos.len(), 1);
        assert!(public.archived_photos.is_empty());

        let own = UserService::get_profile(&store, &alex_id, Some(alex_id)).unwrap();
        assert_eq!(own.photos.len(), 1);
        assert_eq!(own.archived_photos.len(), 1);
    }

    #[test]
    fn test_badge_selection_capped() {
        let mut store = Store::new();
        let mut alex = member("alex_photo");
        for rank in 1..=7 {
            alex.award_badge(Badge::new(BadgeKind::Leaderboard, "Hiking", rank, "Week of Dec 08"));
        }
        let mut ids: Vec<Uuid> = alex.badges.iter().map(|badge| badge.id).collect();
        ids.push(Uuid::new_v4());
        ids.insert(0, ids[0]);
        let alex_id = alex.id;
        UserRepository::create(&mut store, alex);

        let selected = UserService::update_selected_badges(&mut store, &alex_id, &ids).unwrap();
        let ranks: Vec<u32> = selected.selected_badges.iter().map(|badge| badge.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);

        let profile = UserService::get_profile(&store, &alex_id, None).unwrap();
        assert_eq!(profile.badges.len(), 7);
        assert_eq!(profile.selected_badges.len(), 5);
    }

    #[test]
    fn test_unknown_user() {
        let store = Store::new();
        let err = UserService::get_profile(&store, &Uuid::new_v4(), None).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
