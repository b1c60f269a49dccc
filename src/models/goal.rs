use serde::{Deserialize, Serialize};

/// A single entry in an ordered goal list.
///
/// `id` is opaque and unique within its list: seeded defaults carry stable
/// slug ids, user-created goals carry millisecond-timestamp ids. List order
/// is user-controlled and must round-trip through the store unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Goal {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
            time: None,
        }
    }
}

/// The seven tracked life dimensions. Each owns one goal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Physical,
    Mental,
    Financial,
    Family,
    Professional,
    Social,
    Spiritual,
}

impl Dimension {
    pub fn all() -> [Dimension; 7] {
        [
            Dimension::Physical,
            Dimension::Mental,
            Dimension::Financial,
            Dimension::Family,
            Dimension::Professional,
            Dimension::Social,
            Dimension::Spiritual,
        ]
    }

    /// Short lowercase key used in storage keys and medal records.
    pub fn slug(&self) -> &'static str {
        match self {
            Dimension::Physical => "physical",
            Dimension::Mental => "mental",
            Dimension::Financial => "financial",
            Dimension::Family => "family",
            Dimension::Professional => "professional",
            Dimension::Social => "social",
            Dimension::Spiritual => "spiritual",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Physical => "Physical Health",
            Dimension::Mental => "Mental Health",
            Dimension::Financial => "Financial Health",
            Dimension::Family => "Family Health",
            Dimension::Professional => "Professional Health",
            Dimension::Social => "Social Health",
            Dimension::Spiritual => "Spiritual Health",
        }
    }

    /// Seed list used when the store has no saved goals for this dimension.
    pub fn default_goals(&self) -> Vec<Goal> {
        let seeds: &[(&str, &str)] = match self {
            Dimension::Physical => &[
                ("physical-1", "Do 30-45 minutes of cardiovascular exercise"),
                ("physical-2", "Strength-train the major muscle groups"),
                ("physical-3", "Spend 10 minutes on stretching and mobility"),
                ("physical-4", "Take one deliberate relaxation or breathing break"),
                ("physical-5", "Keep hydration steady through the day"),
            ],
            Dimension::Mental => &[
                ("mental-1", "Practice 5-10 minutes of mindfulness meditation"),
                ("mental-2", "Name three emotions felt today"),
                ("mental-3", "Apply the dichotomy of control to one current worry"),
                ("mental-4", "Plan one self-care activity"),
                ("mental-5", "Pick tomorrow's three most important tasks tonight"),
            ],
            Dimension::Financial => &[
                ("financial-1", "Record every expense of the day"),
                ("financial-2", "Review the weekly budget and adjust"),
                ("financial-3", "Move something into the emergency fund"),
                ("financial-4", "Study one investment type for 15 minutes"),
            ],
            Dimension::Family => &[
                ("family-1", "Practice active listening in one family conversation"),
                ("family-2", "Schedule distraction-free quality time"),
                ("family-3", "Express appreciation to a family member"),
                ("family-4", "Practice one love language with someone close"),
            ],
            Dimension::Professional => &[
                ("professional-1", "Spend 30 minutes deliberately practicing a key skill"),
                ("professional-2", "Run an energy audit at the end of the workday"),
                ("professional-3", "Keep a start-of-work and end-of-work ritual"),
                ("professional-4", "Check one current task against long-term goals"),
            ],
            Dimension::Social => &[
                ("social-1", "Message a close friend"),
                ("social-2", "Call someone you have not spoken to in a while"),
                ("social-3", "Look up a local group or event for a hobby"),
                ("social-4", "Offer one small kindness to a stranger"),
            ],
            Dimension::Spiritual => &[
                ("spiritual-1", "Practice 10 minutes of quiet meditation"),
                ("spiritual-2", "Write down three things to be grateful for"),
                ("spiritual-3", "Set a clear intention for the day"),
                ("spiritual-4", "Spend time in nature noticing small details"),
            ],
        };
        seeds.iter().map(|(id, text)| Goal::new(*id, *text)).collect()
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Physical => write!(f, "Physical"),
            Dimension::Mental => write!(f, "Mental"),
            Dimension::Financial => write!(f, "Financial"),
            Dimension::Family => write!(f, "Family"),
            Dimension::Professional => write!(f, "Professional"),
            Dimension::Social => write!(f, "Social"),
            Dimension::Spiritual => write!(f, "Spiritual"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_serde_round_trip() {
        let goal = Goal {
            id: "1730000000000".to_string(),
            text: "Drink water".to_string(),
            completed: true,
            time: Some("08:00".to_string()),
        };
        let json = serde_json::to_string(&goal).unwrap();
        let back: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(goal, back);
    }

    #[test]
    fn test_goal_missing_optional_fields() {
        // Older records may lack `completed` and `time`
        let back: Goal = serde_json::from_str(r#"{"id":"x","text":"walk"}"#).unwrap();
        assert!(!back.completed);
        assert_eq!(back.time, None);
    }

    #[test]
    fn test_dimension_defaults_have_unique_ids() {
        for dim in Dimension::all() {
            let goals = dim.default_goals();
            assert!(!goals.is_empty());
            for (i, a) in goals.iter().enumerate() {
                for b in goals.iter().skip(i + 1) {
                    assert_ne!(a.id, b.id);
                }
                assert!(a.id.starts_with(dim.slug()));
                assert!(!a.completed);
            }
        }
    }
}
