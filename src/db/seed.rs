//! Demo catalog seeding

use chrono::NaiveDate;
use tracing::info;

use crate::{
    db::{repositories::CategoryRepository, Store},
    models::{Category, CategoryKind},
};

const BASIC_CATEGORIES: &[&str] = &["Night Out", "Soft Launch", "Photobooth", "Hiking", "Family"];

const WEEKLY_CATEGORIES: &[(&str, (i32, u32, u32))] = &[
    ("Best Holiday Decor", (2024, 12, 8)),
    ("Cozy Winter Vibes", (2024, 12, 8)),
];

/// Add the official basic and weekly categories.
///
/// Categories whose name is already present are skipped, so seeding twice
/// is harmless.
pub fn seed_official_catalog(store: &mut Store) {
    let mut added = 0;

    for name in BASIC_CATEGORIES {
        if CategoryRepository::find_by_name(store, name).is_none() {
            CategoryRepository::create(
                store,
                Category::new(name, CategoryKind::OfficialBasic, None),
            );
            added += 1;
        }
    }

    for (name, (year, month, day)) in WEEKLY_CATEGORIES {
        let Some(week_ending) = NaiveDate::from_ymd_opt(*year, *month, *day) else {
            continue;
        };
        if CategoryRepository::find_by_name(store, name).is_none() {
            CategoryRepository::create(
                store,
                Category::new(name, CategoryKind::OfficialWeekly { week_ending }, None),
            );
            added += 1;
        }
    }

    info!(added, "Seeded official category catalog");
}
