//! Category access gate
//!
//! Private categories are only visible to their creator and members.
//! Everything else is open to any caller, signed in or not.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Category,
};

/// Check whether a (possibly anonymous) user may see a category
pub fn can_access(category: &Category, user_id: Option<Uuid>) -> bool {
    if !category.is_private() {
        return true;
    }

    match user_id {
        Some(user_id) => {
            category.created_by == Some(user_id) || category.members().contains(&user_id)
        }
        None => false,
    }
}

/// Join the private category whose share code matches `code` exactly.
///
/// Returns false, leaving every category untouched, when no private
/// category carries that code.
pub fn join_private_category(categories: &mut [Category], code: &str, user_id: Uuid) -> bool {
    categories
        .iter_mut()
        .find(|category| category.share_code() == Some(code))
        .is_some_and(|category| category.add_member(user_id))
}

/// Fail with `Forbidden` unless the user may see the category
pub fn require_access(category: &Category, user_id: Option<Uuid>) -> AppResult<()> {
    if can_access(category, user_id) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "This category is private".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryKind;

    fn squad(creator: Uuid) -> Category {
        Category::new(
            "Squad Goals",
            CategoryKind::Private {
                share_code: "SQUAD2024".to_string(),
                members: vec![creator],
            },
            Some(creator),
        )
    }

    #[test]
    fn test_public_categories_open_to_everyone() {
        let category = Category::new("Night Out", CategoryKind::OfficialBasic, None);
        assert!(can_access(&category, None));
        assert!(can_access(&category, Some(Uuid::new_v4())));
    }

    #[test]
    fn test_private_category_requires_membership() {
        let creator = Uuid::new_v4();
        let category = squad(creator);

        assert!(can_access(&category, Some(creator)));
        assert!(!can_access(&category, Some(Uuid::new_v4())));
        assert!(!can_access(&category, None));
    }

    #[test]
    fn test_creator_keeps_access_without_membership() {
        let creator = Uuid::new_v4();
        let category = Category::new(
            "Secret",
            CategoryKind::Private {
                share_code: "SECRET01".to_string(),
                members: vec![],
            },
            Some(creator),
        );
        assert!(can_access(&category, Some(creator)));
    }

    #[test]
    fn test_bad_code_changes_nothing() {
        let creator = Uuid::new_v4();
        let mut categories = vec![squad(creator)];

        assert!(!join_private_category(&mut categories, "BADCODE", Uuid::new_v4()));
        assert_eq!(categories[0].members(), &[creator]);
    }

    #[test]
    fn test_join_grants_access() {
        let creator = Uuid::new_v4();
        let outsider = Uuid::new_v4();
        let mut categories = vec![
            Category::new("Night Out", CategoryKind::OfficialBasic, None),
            squad(creator),
        ];

        assert!(!can_access(&categories[1], Some(outsider)));
        assert!(join_private_category(&mut categories, "SQUAD2024", outsider));
        assert!(can_access(&categories[1], Some(outsider)));
        assert!(require_access(&categories[1], Some(outsider)).is_ok());
    }

    #[test]
    fn test_code_match_is_exact() {
        let mut categories = vec![squad(Uuid::new_v4())];
        assert!(!join_private_category(&mut categories, "squad2024", Uuid::new_v4()));
        assert!(!join_private_category(&mut categories, "SQUAD", Uuid::new_v4()));
    }
}
