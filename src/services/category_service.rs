//! Category service

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    access,
    constants::{ARCHIVED_WEEKLY_DISPLAY_LIMIT, BADGE_AWARD_RANKS, SHARE_CODE_MAX_ATTEMPTS},
    db::{
        repositories::{CategoryRepository, PhotoRepository, UserRepository},
        Store,
    },
    error::{AppError, AppResult},
    handlers::{
        categories::{
            request::{CreateCategoryRequest, NewCategoryKind},
            response::{
                ArchiveCategoryResponse, AwardedBadge, CategoriesListResponse,
                CategoryDetailResponse, CategoryResponse,
            },
        },
        photos::response::PhotoResponse,
    },
    middleware::auth::AuthenticatedUser,
    models::{Badge, BadgeKind, Category, CategoryKind},
    ranking::{compute_leaderboard, sort_photos, PhotoSort},
    utils::{generate_share_code, normalize_share_code, validation::sanitize_string, week_label},
};

/// Category service for business logic
pub struct CategoryService;

impl CategoryService {
    /// List the categories a viewer can see, grouped for the home page
    pub fn list_categories(store: &Store, viewer: Option<Uuid>) -> CategoriesListResponse {
        let mut list = CategoriesListResponse::default();

        for category in CategoryRepository::list(store) {
            if !access::can_access(category, viewer) {
                continue;
            }

            let response = CategoryResponse::from_category(category);
            match &category.kind {
                CategoryKind::OfficialWeekly { .. } if category.is_archived => {
                    list.archived_weekly.push(response)
                }
                CategoryKind::Private { .. } => list.private.push(response),
                _ if !category.is_active => {}
                CategoryKind::OfficialBasic => list.official_basic.push(response),
                CategoryKind::OfficialWeekly { .. } => list.official_weekly.push(response),
                CategoryKind::UserCreated => list.user_created.push(response),
            }
        }

        list
    }

    /// Create a category.
    ///
    /// Anyone signed in may create user-created and private categories;
    /// official ones are reserved for admins.
    pub fn create_category(
        store: &mut Store,
        creator: &AuthenticatedUser,
        payload: CreateCategoryRequest,
    ) -> AppResult<CategoryResponse> {
        let name = sanitize_string(&payload.name);
        if name.is_empty() {
            return Err(AppError::Validation("Category name is required".to_string()));
        }

        let kind = match payload.kind {
            NewCategoryKind::OfficialBasic | NewCategoryKind::OfficialWeekly
                if !creator.is_admin() =>
            {
                return Err(AppError::Forbidden(
                    "Only admins can create official categories".to_string(),
                ));
            }
            NewCategoryKind::OfficialBasic => CategoryKind::OfficialBasic,
            NewCategoryKind::OfficialWeekly => {
                let week_ending = payload.week_ending.ok_or_else(|| {
                    AppError::Validation("Weekly categories need a week_ending date".to_string())
                })?;
                CategoryKind::OfficialWeekly { week_ending }
            }
            NewCategoryKind::UserCreated => CategoryKind::UserCreated,
            NewCategoryKind::Private => CategoryKind::Private {
                share_code: Self::unique_share_code(store)?,
                members: vec![creator.id],
            },
        };

        let category =
            CategoryRepository::create(store, Category::new(&name, kind, Some(creator.id)));
        info!(
            category_id = %category.id,
            kind = %category.kind,
            created_by = %creator.id,
            "Category created"
        );

        Ok(CategoryResponse::from_category(category))
    }

    /// Category page with its live photos in the requested order
    pub fn get_category(
        store: &Store,
        category_id: &Uuid,
        viewer: Option<Uuid>,
        sort: PhotoSort,
        now: DateTime<Utc>,
    ) -> AppResult<CategoryDetailResponse> {
        let category = CategoryRepository::find_by_id(store, category_id)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        access::require_access(category, viewer)?;

        let mut photos = PhotoRepository::list_live_by_category(store, category_id);
        sort_photos(&mut photos, sort, now);

        if category.is_weekly() && category.is_archived {
            photos.truncate(ARCHIVED_WEEKLY_DISPLAY_LIMIT);
        }

        Ok(CategoryDetailResponse {
            category: CategoryResponse::from_category(category),
            sort,
            photos: photos
                .into_iter()
                .map(|photo| PhotoResponse::from_photo(photo, viewer))
                .collect(),
        })
    }

    /// Join a private category by share code
    pub fn join_private_category(
        store: &mut Store,
        share_code: &str,
        user_id: &Uuid,
    ) -> AppResult<CategoryResponse> {
        let code = normalize_share_code(share_code);

        if !access::join_private_category(&mut store.categories, code, *user_id) {
            warn!(user_id = %user_id, "Join attempted with unknown share code");
            return Err(AppError::NotFound("Invalid share code".to_string()));
        }

        let category = store
            .categories
            .iter()
            .find(|category| category.share_code() == Some(code))
            .ok_or_else(|| AppError::NotFound("Invalid share code".to_string()))?;

        info!(category_id = %category.id, user_id = %user_id, "User joined private category");

        Ok(CategoryResponse::from_category(category))
    }

    /// Close a weekly category and award badges to the top of its leaderboard
    pub fn archive_category(
        store: &mut Store,
        category_id: &Uuid,
        admin: &AuthenticatedUser,
    ) -> AppResult<ArchiveCategoryResponse> {
        if !admin.is_admin() {
            return Err(AppError::Forbidden(
                "Only admins can archive categories".to_string(),
            ));
        }

        let category = CategoryRepository::find_by_id(store, category_id)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let week_ending = category.week_ending().ok_or_else(|| {
            AppError::InvalidInput("Only weekly categories can be archived".to_string())
        })?;

        if category.is_archived {
            return Err(AppError::Conflict("Category is already archived".to_string()));
        }

        let category_name = category.name.clone();
        let period = week_label(week_ending);

        let winners: Vec<(Uuid, u32)> =
            compute_leaderboard(PhotoRepository::list_live_by_category(store, category_id))
                .into_iter()
                .take(BADGE_AWARD_RANKS)
                .map(|entry| (entry.user_id, entry.rank))
                .collect();

        let mut awarded = Vec::with_capacity(winners.len());
        for (user_id, rank) in winners {
            let Some(user) = UserRepository::find_by_id_mut(store, &user_id) else {
                continue;
            };
            user.award_badge(Badge::new(BadgeKind::Leaderboard, &category_name, rank, &period));
            awarded.push(AwardedBadge {
                user_id,
                username: user.username.clone(),
                rank,
                period: period.clone(),
            });
        }

        let category = CategoryRepository::find_by_id_mut(store, category_id)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
        category.archive();

        info!(
            category_id = %category_id,
            awarded = awarded.len(),
            "Weekly category archived"
        );

        Ok(ArchiveCategoryResponse {
            category: CategoryResponse::from_category(category),
            awarded,
        })
    }

    fn unique_share_code(store: &Store) -> AppResult<String> {
        for _ in 0..SHARE_CODE_MAX_ATTEMPTS {
            let code = generate_share_code();
            if !CategoryRepository::share_code_exists(store, &code) {
                return Ok(code);
            }
        }

        Err(AppError::Internal(anyhow::anyhow!(
            "Could not generate a unique share code"
        )))
    }
}
