//! Ranking service

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::{
    access,
    constants::BADGE_AWARD_RANKS,
    db::{
        repositories::{CategoryRepository, PhotoRepository, UserRepository},
        Store,
    },
    error::{AppError, AppResult},
    handlers::{
        categories::response::{AwardedBadge, LeaderboardResponse},
        hall_of_fame::response::{HallOfFameResponse, MonthlyAwardResponse},
    },
    middleware::auth::AuthenticatedUser,
    models::{Badge, BadgeKind},
    ranking::{compute_hall_of_fame, compute_leaderboard, HallOfFameScope},
    utils::{month_label, now_utc},
};

/// Leaderboards and hall of fame
pub struct RankingService;

impl RankingService {
    /// Current leaderboard of one category
    pub fn get_leaderboard(
        store: &Store,
        category_id: &Uuid,
        viewer: Option<Uuid>,
    ) -> AppResult<LeaderboardResponse> {
        let category = CategoryRepository::find_by_id(store, category_id)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        access::require_access(category, viewer)?;

        let entries =
            compute_leaderboard(PhotoRepository::list_live_by_category(store, category_id));

        Ok(LeaderboardResponse {
            category_id: category.id,
            category_name: category.name.clone(),
            entries,
            updated_at: now_utc(),
        })
    }

    /// Hall of fame for a scope.
    ///
    /// Photos from private categories the viewer cannot see are left out
    /// before ranking.
    pub fn get_hall_of_fame(
        store: &Store,
        scope: HallOfFameScope,
        viewer: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> AppResult<HallOfFameResponse> {
        let category_id = match scope {
            HallOfFameScope::Overall => None,
            HallOfFameScope::Monthly(category_id) => category_id,
            HallOfFameScope::Category(category_id) => Some(category_id),
        };

        if let Some(id) = category_id {
            let category = CategoryRepository::find_by_id(store, &id)
                .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
            access::require_access(category, viewer)?;
        }

        let categories = CategoryRepository::list(store);
        let visible = store.photos.iter().filter(|photo| {
            categories
                .iter()
                .find(|category| category.id == photo.category_id)
                .is_none_or(|category| access::can_access(category, viewer))
        });

        Ok(HallOfFameResponse {
            scope: scope.as_str(),
            category_id,
            period: scope.period_label(now),
            entries: compute_hall_of_fame(scope, visible, categories),
        })
    }

    /// Award hall of fame badges for the month containing `now`.
    ///
    /// The top photos of the monthly scope earn their owners a badge. Photos
    /// in private categories are not eligible, and each month is awarded
    /// once.
    pub fn award_monthly_badges(
        store: &mut Store,
        admin: &AuthenticatedUser,
        now: DateTime<Utc>,
    ) -> AppResult<MonthlyAwardResponse> {
        if !admin.is_admin() {
            return Err(AppError::Forbidden(
                "Only admins can award hall of fame badges".to_string(),
            ));
        }

        let period = month_label(now);
        if store.awarded_months.contains(&period) {
            return Err(AppError::Conflict(format!(
                "Hall of fame for {} was already awarded",
                period
            )));
        }

        let categories = CategoryRepository::list(store);
        let eligible = store.photos.iter().filter(|photo| {
            categories
                .iter()
                .find(|category| category.id == photo.category_id)
                .is_some_and(|category| !category.is_private())
        });

        let winners: Vec<(Uuid, u32, String)> =
            compute_hall_of_fame(HallOfFameScope::Monthly(None), eligible, categories)
                .into_iter()
                .take(BADGE_AWARD_RANKS)
                .map(|entry| (entry.user_id, entry.rank, entry.category_name))
                .collect();

        let mut awarded = Vec::with_capacity(winners.len());
        for (user_id, rank, category_name) in winners {
            let Some(user) = UserRepository::find_by_id_mut(store, &user_id) else {
                continue;
            };
            user.award_badge(Badge::new(BadgeKind::HallOfFame, &category_name, rank, &period));
            awarded.push(AwardedBadge {
                user_id,
                username: user.username.clone(),
                rank,
                period: period.clone(),
            });
        }

        store.awarded_months.push(period.clone());
        info!(period = %period, awarded = awarded.len(), "Monthly hall of fame awarded");

        Ok(MonthlyAwardResponse { period, awarded })
    }

    /// Whether the user owns the top photo of any open weekly category
    pub fn is_current_leader(store: &Store, user_id: &Uuid) -> bool {
        CategoryRepository::list(store)
            .iter()
            .filter(|category| category.is_weekly() && category.accepts_submissions())
            .any(|category| {
                compute_leaderboard(PhotoRepository::list_live_by_category(store, &category.id))
                    .first()
                    .is_some_and(|leader| leader.user_id == *user_id)
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;
    use crate::{
        constants::roles,
        models::{Category, CategoryKind},
        test_utils::fixtures::{member, photo_with_votes},
    };

    fn admin() -> AuthenticatedUser {
        AuthenticatedUser {
            id: Uuid::new_v4(),
            username: "admin".to_string(),
            role: roles::ADMIN.to_string(),
        }
    }

    fn weekly(name: &str) -> Category {
        Category::new(
            name,
            CategoryKind::OfficialWeekly {
                week_ending: NaiveDate::from_ymd_opt(2024, 12, 8).unwrap(),
            },
            None,
        )
    }

    #[test]
    fn test_leaderboard_scenario() {
        let mut store = Store::new();
        let alex = member("alex_photo");
        let category_id = CategoryRepository::create(
            &mut store,
            Category::new("Night Out", CategoryKind::OfficialBasic, None),
        )
        .id;

        // Store keeps newest first, so insert in reverse to get (10,1),(5,0),(5,5)
        for (likes, dislikes) in [(5, 5), (5, 0), (10, 1)] {
            PhotoRepository::create(
                &mut store,
                photo_with_votes(&alex, category_id, likes, dislikes),
            );
        }

        let board = RankingService::get_leaderboard(&store, &category_id, None).unwrap();
        let rows: Vec<(i64, u32, u32)> = board
            .entries
            .iter()
            .map(|entry| (entry.score, entry.rank, entry.points))
            .collect();
        assert_eq!(rows, vec![(9, 1, 100), (5, 2, 75), (0, 3, 50)]);
    }

    #[test]
    fn test_private_leaderboard_forbidden_for_outsiders() {
        let mut store = Store::new();
        let creator = Uuid::new_v4();
        let category_id = CategoryRepository::create(
            &mut store,
            Category::new(
                "Squad",
                CategoryKind::Private {
                    share_code: "SQUAD2024".to_string(),
                    members: vec![creator],
                },
                Some(creator),
            ),
        )
        .id;

        assert!(RankingService::get_leaderboard(&store, &category_id, Some(creator)).is_ok());
        assert!(matches!(
            RankingService::get_leaderboard(&store, &category_id, None),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_hall_of_fame_hides_private_photos() {
        let mut store = Store::new();
        let alex = member("alex_photo");
        let public_id = CategoryRepository::create(
            &mut store,
            Category::new("Hiking", CategoryKind::OfficialBasic, None),
        )
        .id;
        let private_id = CategoryRepository::create(
            &mut store,
            Category::new(
                "Squad",
                CategoryKind::Private {
                    share_code: "SQUAD2024".to_string(),
                    members: vec![alex.id],
                },
                Some(alex.id),
            ),
        )
        .id;
        PhotoRepository::create(&mut store, photo_with_votes(&alex, public_id, 2, 0));
        PhotoRepository::create(&mut store, photo_with_votes(&alex, private_id, 7, 0));

        let outsider =
            RankingService::get_hall_of_fame(&store, HallOfFameScope::Overall, None, now_utc())
                .unwrap();
        assert_eq!(outsider.entries.len(), 1);
        assert_eq!(outsider.entries[0].category_name, "Hiking");
        assert_eq!(outsider.period, "All time");

        let owner = RankingService::get_hall_of_fame(
            &store,
            HallOfFameScope::Overall,
            Some(alex.id),
            now_utc(),
        )
        .unwrap();
        assert_eq!(owner.entries[0].likes, 7);
        assert_eq!(owner.entries[0].category_name, "Squad");

        let scoped = RankingService::get_hall_of_fame(
            &store,
            HallOfFameScope::Category(private_id),
            None,
            now_utc(),
        );
        assert!(matches!(scoped, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_current_leader_only_counts_open_weekly() {
        let mut store = Store::new();
        let alex = member("alex_photo");
        let sarah = member("sarah_snaps");

        let open = CategoryRepository::create(&mut store, weekly("Best Holiday Decor")).id;
        let mut closed = weekly("Cozy Winter Vibes");
        closed.archive();
        let closed = CategoryRepository::create(&mut store, closed).id;
        let basic = CategoryRepository::create(
            &mut store,
            Category::new("Family", CategoryKind::OfficialBasic, None),
        )
        .id;

        PhotoRepository::create(&mut store, photo_with_votes(&alex, open, 4, 0));
        PhotoRepository::create(&mut store, photo_with_votes(&sarah, open, 2, 0));
        PhotoRepository::create(&mut store, photo_with_votes(&sarah, closed, 9, 0));
        PhotoRepository::create(&mut store, photo_with_votes(&sarah, basic, 9, 0));

        assert!(RankingService::is_current_leader(&store, &alex.id));
        assert!(!RankingService::is_current_leader(&store, &sarah.id));
    }

    #[test]
    fn test_monthly_award_gives_hall_of_fame_badges() {
        let mut store = Store::new();
        let owners: Vec<_> = ["alex_photo", "sarah_snaps", "mike_lens", "emma_pics"]
            .into_iter()
            .map(member)
            .collect();
        for owner in &owners {
            UserRepository::create(&mut store, owner.clone());
        }

        let hiking = CategoryRepository::create(
            &mut store,
            Category::new("Hiking", CategoryKind::OfficialBasic, None),
        )
        .id;
        let squad = CategoryRepository::create(
            &mut store,
            Category::new(
                "Squad",
                CategoryKind::Private {
                    share_code: "SQUAD2024".to_string(),
                    members: vec![owners[3].id],
                },
                Some(owners[3].id),
            ),
        )
        .id;

        for (owner, likes) in owners.iter().take(3).zip([4, 8, 2]) {
            PhotoRepository::create(&mut store, photo_with_votes(owner, hiking, likes, 0));
        }
        PhotoRepository::create(&mut store, photo_with_votes(&owners[3], squad, 50, 0));

        let now = Utc.with_ymd_and_hms(2024, 11, 30, 12, 0, 0).unwrap();
        let result = RankingService::award_monthly_badges(&mut store, &admin(), now).unwrap();
        assert_eq!(result.period, "November 2024");

        let winners: Vec<(&str, u32)> = result
            .awarded
            .iter()
            .map(|badge| (badge.username.as_str(), badge.rank))
            .collect();
        assert_eq!(winners, vec![("sarah_snaps", 1), ("alex_photo", 2), ("mike_lens", 3)]);

        let sarah = UserRepository::find_by_id(&store, &owners[1].id).unwrap();
        assert_eq!(sarah.badges[0].kind, BadgeKind::HallOfFame);
        assert_eq!(sarah.badges[0].category_name, "Hiking");
        assert!(UserRepository::find_by_id(&store, &owners[3].id).unwrap().badges.is_empty());

        let again = RankingService::award_monthly_badges(&mut store, &admin(), now);
        assert!(matches!(again, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_monthly_award_requires_admin() {
        let mut store = Store::new();
        let alex = member("alex_photo");
        let caller = AuthenticatedUser {
            id: alex.id,
            username: alex.username.clone(),
            role: alex.role.clone(),
        };

        let err = RankingService::award_monthly_badges(&mut store, &caller, now_utc());
        assert!(matches!(err, Err(AppError::Forbidden(_))));
        assert!(store.awarded_months.is_empty());
    }
}
