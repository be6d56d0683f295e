//! Streak and totals computation over a user's meal history.
//!
//! Both functions are total: any finite meal slice produces a result, and an
//! empty slice produces all zeroes. The policy of reporting "not found" for a
//! user without meals belongs to the API layer, not here.

use serde::Serialize;

use crate::Meal;

/// Consecutive on-diet run lengths over a meal sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    /// Length of the on-diet run ending at the last meal processed.
    pub current_streak: u32,
    /// Longest on-diet run seen anywhere in the sequence.
    pub highest_streak: u32,
}

/// Computes the current and highest consecutive on-diet streaks.
///
/// Single left-to-right pass in the order given. The result is
/// order-sensitive: the caller decides the ordering, and the store lists
/// meals in insertion order rather than sorting by `meal_date_time`.
pub fn diet_streaks(meals: &[Meal]) -> StreakSummary {
    let mut current = 0u32;
    let mut highest = 0u32;

    for meal in meals {
        if meal.is_included_on_diet {
            current += 1;
            highest = highest.max(current);
        } else {
            current = 0;
        }
    }

    StreakSummary {
        current_streak: current,
        highest_streak: highest,
    }
}

/// Meal counts for a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MealTotals {
    /// Total number of meals.
    pub total: u32,
    /// Meals with `is_included_on_diet` set.
    pub on_diet: u32,
    /// Meals without `is_included_on_diet` set.
    pub off_diet: u32,
}

/// Counts total, on-diet and off-diet meals.
///
/// The counts always satisfy `on_diet + off_diet == total`.
pub fn meal_totals(meals: &[Meal]) -> MealTotals {
    let mut totals = MealTotals::default();

    for meal in meals {
        totals.total += 1;
        if meal.is_included_on_diet {
            totals.on_diet += 1;
        } else {
            totals.off_diet += 1;
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn meals(flags: &[bool]) -> Vec<Meal> {
        flags
            .iter()
            .map(|&on_diet| {
                Meal::new(Uuid::new_v4(), "Lunch", "Grilled chicken", Utc::now(), on_diet)
            })
            .collect()
    }

    #[test]
    fn test_streaks_empty_sequence() {
        assert_eq!(diet_streaks(&[]), StreakSummary::default());
    }

    #[test]
    fn test_streaks_single_on_diet_meal() {
        let summary = diet_streaks(&meals(&[true]));

        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.highest_streak, 1);
    }

    #[test]
    fn test_streaks_all_off_diet() {
        let summary = diet_streaks(&meals(&[false, false, false]));

        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.highest_streak, 0);
    }

    #[test]
    fn test_streak_resets_on_off_diet_meal() {
        let summary = diet_streaks(&meals(&[true, true, false]));

        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.highest_streak, 2);
    }

    #[test]
    fn test_highest_streak_tracks_earlier_run() {
        let summary = diet_streaks(&meals(&[true, true, false, true, false]));

        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.highest_streak, 2);
    }

    #[test]
    fn test_current_streak_reflects_tail_of_sequence() {
        let summary = diet_streaks(&meals(&[false, true, true, true]));

        assert_eq!(summary.current_streak, 3);
        assert_eq!(summary.highest_streak, 3);
    }

    #[test]
    fn test_streak_bounds_hold() {
        let sequences: &[&[bool]] = &[
            &[],
            &[true],
            &[false],
            &[true, false, true, true],
            &[true, true, true, false, false, true],
        ];

        for flags in sequences {
            let input = meals(flags);
            let summary = diet_streaks(&input);

            assert!(summary.highest_streak >= summary.current_streak);
            assert!(summary.highest_streak as usize <= input.len());
        }
    }

    #[test]
    fn test_totals_empty_sequence() {
        assert_eq!(meal_totals(&[]), MealTotals::default());
    }

    #[test]
    fn test_totals_mixed_sequence() {
        let totals = meal_totals(&meals(&[true, true, false, true, false]));

        assert_eq!(totals.total, 5);
        assert_eq!(totals.on_diet, 3);
        assert_eq!(totals.off_diet, 2);
    }

    #[test]
    fn test_totals_counts_are_consistent() {
        let sequences: &[&[bool]] = &[
            &[],
            &[true],
            &[false],
            &[true, false, false, true, true, false],
        ];

        for flags in sequences {
            let totals = meal_totals(&meals(flags));
            assert_eq!(totals.on_diet + totals.off_diet, totals.total);
        }
    }
}
