use super::repo_types::Meal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MealSummary {
    pub total_meals: u64,
    pub on_diet_meals: u64,
    pub off_diet_meals: u64,
    pub best_streak: u64,
}

/// Counts meals and finds the longest run of consecutive on-diet meals.
///
/// `meals` must already be in ascending `occurred_at` order. The input is
/// not sorted here: whatever order is given is the order that gets counted.
pub fn summarize(meals: &[Meal]) -> MealSummary {
    summarize_flags(meals.iter().map(|m| m.is_on_diet))
}

pub(crate) fn summarize_flags(flags: impl IntoIterator<Item = bool>) -> MealSummary {
    let mut on_diet_meals = 0;
    let mut off_diet_meals = 0;
    let mut best_streak = 0;
    let mut current_streak = 0;

    for on_diet in flags {
        if on_diet {
            on_diet_meals += 1;
            current_streak += 1;
        } else {
            off_diet_meals += 1;
            best_streak = best_streak.max(current_streak);
            current_streak = 0;
        }
    }
    // a streak still running at the end of history
    best_streak = best_streak.max(current_streak);

    MealSummary {
        total_meals: on_diet_meals + off_diet_meals,
        on_diet_meals,
        off_diet_meals,
        best_streak,
    }
}
