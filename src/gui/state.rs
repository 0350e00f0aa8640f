//! State types for the LearnAble GUI

use chrono::{DateTime, Duration, Local};

/// Current tab/view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Convert,
    Games,
    Settings,
}

/// Display-only summary card shown on the Home screen.
///
/// Not backed by storage and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub title: String,
    pub description: String,
    pub icon: &'static str,
}

const ACTIVITY_ICONS: [&str; 3] = ["📄", "📖", "🔤"];

/// The three recent-activity summaries, relative to the given moment.
///
/// Index 1 references yesterday, index 2 two days ago, index 3 three days
/// ago.
pub fn recent_activities_at(now: DateTime<Local>) -> Vec<ActivityRecord> {
    (1..=3)
        .map(|index: i64| {
            let date = now - Duration::days(index);
            ActivityRecord {
                title: format!("Activity {}", index),
                description: format!(
                    "You completed a learning session on {}",
                    date.format("%b %-d, %Y")
                ),
                icon: ACTIVITY_ICONS[(index - 1) as usize],
            }
        })
        .collect()
}

/// The three recent-activity summaries as of now
pub fn recent_activities() -> Vec<ActivityRecord> {
    recent_activities_at(Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_exactly_three_activities() {
        assert_eq!(recent_activities().len(), 3);
    }

    #[test]
    fn test_activity_dates_strictly_decrease() {
        let now = Local.with_ymd_and_hms(2025, 4, 24, 12, 0, 0).unwrap();
        let activities = recent_activities_at(now);

        assert_eq!(activities.len(), 3);
        assert!(activities[0].description.contains("Apr 23, 2025"));
        assert!(activities[1].description.contains("Apr 22, 2025"));
        assert!(activities[2].description.contains("Apr 21, 2025"));
    }

    #[test]
    fn test_activity_titles_and_icons() {
        let activities = recent_activities();
        assert_eq!(activities[0].title, "Activity 1");
        assert_eq!(activities[2].title, "Activity 3");
        // Each card carries its own icon
        assert_eq!(activities.iter().map(|a| a.icon).collect::<std::collections::HashSet<_>>().len(), 3);
    }

    #[test]
    fn test_month_boundary_formatting() {
        let now = Local.with_ymd_and_hms(2025, 3, 2, 8, 30, 0).unwrap();
        let activities = recent_activities_at(now);

        assert!(activities[0].description.contains("Mar 1, 2025"));
        assert!(activities[1].description.contains("Feb 28, 2025"));
    }
}
