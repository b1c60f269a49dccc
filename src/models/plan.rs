use serde::{Deserialize, Serialize};

use super::goal::Dimension;

/// Category tag for a scheduled task. Covers the seven dimensions plus the
/// two planner-only buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    Physical,
    Mental,
    Financial,
    Family,
    Professional,
    Social,
    Spiritual,
    Preventive,
    Personal,
}

impl TaskCategory {
    pub fn all() -> [TaskCategory; 9] {
        [
            TaskCategory::Physical,
            TaskCategory::Mental,
            TaskCategory::Financial,
            TaskCategory::Family,
            TaskCategory::Professional,
            TaskCategory::Social,
            TaskCategory::Spiritual,
            TaskCategory::Preventive,
            TaskCategory::Personal,
        ]
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl From<Dimension> for TaskCategory {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Physical => TaskCategory::Physical,
            Dimension::Mental => TaskCategory::Mental,
            Dimension::Financial => TaskCategory::Financial,
            Dimension::Family => TaskCategory::Family,
            Dimension::Professional => TaskCategory::Professional,
            Dimension::Social => TaskCategory::Social,
            Dimension::Spiritual => TaskCategory::Spiritual,
        }
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TaskCategory::Physical => "Physical",
            TaskCategory::Mental => "Mental",
            TaskCategory::Financial => "Financial",
            TaskCategory::Family => "Family",
            TaskCategory::Professional => "Professional",
            TaskCategory::Social => "Social",
            TaskCategory::Spiritual => "Spiritual",
            TaskCategory::Preventive => "Preventive",
            TaskCategory::Personal => "Personal",
        };
        write!(f, "{}", s)
    }
}

/// One time block in a daily plan. Times are "HH:MM" strings, which sort
/// correctly with plain string comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub category: TaskCategory,
}

impl ScheduledTask {
    pub fn time_range(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time)
    }
}

/// The plan for one calendar day, stored under a per-date key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyPlan {
    pub tasks: Vec<ScheduledTask>,
}

impl DailyPlan {
    /// Template seeded into any date that has no saved plan yet.
    pub fn template() -> Self {
        let seeds: &[(&str, &str, &str, TaskCategory)] = &[
            ("06:00", "06:30", "Wake up, hydration and meditation", TaskCategory::Mental),
            ("06:30", "07:30", "Physical exercise", TaskCategory::Physical),
            ("07:30", "08:30", "Nutritious breakfast", TaskCategory::Preventive),
            ("08:30", "09:00", "Plan the day (pick 3 priorities)", TaskCategory::Professional),
            ("09:00", "10:30", "Focused work block 1", TaskCategory::Professional),
            ("10:30", "10:45", "Short break (coffee, stretching)", TaskCategory::Physical),
            ("10:45", "12:00", "Focused work block 2", TaskCategory::Professional),
            ("12:00", "13:00", "Mindful lunch, no screens", TaskCategory::Mental),
            ("13:00", "15:00", "Focused work or meetings", TaskCategory::Professional),
            ("15:00", "15:15", "Meditation or breathing break", TaskCategory::Mental),
            ("15:15", "17:00", "Administrative tasks and email", TaskCategory::Professional),
            ("17:00", "17:30", "Work shutdown ritual", TaskCategory::Mental),
            ("17:30", "19:00", "Free time, hobby or social", TaskCategory::Personal),
            ("19:00", "20:00", "Dinner and family connection", TaskCategory::Family),
            ("20:00", "21:00", "Learning (reading, course)", TaskCategory::Professional),
            ("21:00", "22:00", "Wind down, no screens", TaskCategory::Mental),
            ("22:00", "22:15", "Gratitude journal, review of the day", TaskCategory::Spiritual),
        ];

        let tasks = seeds
            .iter()
            .enumerate()
            .map(|(i, (start, end, desc, cat))| ScheduledTask {
                id: (i + 1).to_string(),
                start_time: (*start).to_string(),
                end_time: (*end).to_string(),
                description: (*desc).to_string(),
                completed: false,
                category: *cat,
            })
            .collect();

        DailyPlan { tasks }
    }

    /// Completed-task percentage, rounded. Empty plans count as 0.
    pub fn completion_percent(&self) -> u8 {
        if self.tasks.is_empty() {
            return 0;
        }
        let done = self.tasks.iter().filter(|t| t.completed).count();
        ((done as f64 / self.tasks.len() as f64) * 100.0).round() as u8
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_shape() {
        let plan = DailyPlan::template();
        assert_eq!(plan.tasks.len(), 17);
        assert_eq!(plan.tasks[0].start_time, "06:00");
        assert_eq!(plan.tasks[16].end_time, "22:15");
        assert!(plan.tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_completion_percent() {
        let mut plan = DailyPlan::template();
        assert_eq!(plan.completion_percent(), 0);
        for task in plan.tasks.iter_mut().take(8) {
            task.completed = true;
        }
        assert_eq!(plan.completion_percent(), 47); // 8/17
        for task in plan.tasks.iter_mut() {
            task.completed = true;
        }
        assert_eq!(plan.completion_percent(), 100);
        assert_eq!(DailyPlan::default().completion_percent(), 0);
    }

    #[test]
    fn test_category_cycle() {
        assert_eq!(TaskCategory::Physical.next(), TaskCategory::Mental);
        assert_eq!(TaskCategory::Personal.next(), TaskCategory::Physical); // Wraps around
        assert_eq!(TaskCategory::Physical.prev(), TaskCategory::Personal);
    }
}
