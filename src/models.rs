use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty of a card. `None` is the unset sentinel and never a valid rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    None,
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn weight(self) -> f64 {
        match self {
            Difficulty::None => 0.0,
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 2.0,
            Difficulty::Hard => 3.0,
        }
    }

    /// True for the three difficulties a user can actually report.
    pub const fn is_rating(self) -> bool {
        !matches!(self, Difficulty::None)
    }

    /// Maps numeric rating buttons (1..=3) to a difficulty.
    pub fn from_int(rating: i32) -> Option<Difficulty> {
        match rating {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::None => "NONE",
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown difficulty '{0}', expected one of none, easy, medium, hard")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Difficulty::None),
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub repetition: u32,
    #[serde(default)]
    pub next_review: Option<String>, // YYYY-MM-DD, no time component
}

impl Flashcard {
    pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            image_url: None,
            difficulty: Difficulty::default(),
            repetition: 0,
            next_review: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Flashcard>,
}

impl Deck {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cards: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    pub due: usize,
    pub unscheduled: usize,
    pub scheduled: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_weights() {
        assert_eq!(Difficulty::None.weight(), 0.0);
        assert_eq!(Difficulty::Easy.weight(), 1.0);
        assert_eq!(Difficulty::Medium.weight(), 2.0);
        assert_eq!(Difficulty::Hard.weight(), 3.0);
    }

    #[test]
    fn test_difficulty_from_int() {
        assert_eq!(Difficulty::from_int(1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_int(2), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_int(3), Some(Difficulty::Hard));

        assert_eq!(Difficulty::from_int(0), None);
        assert_eq!(Difficulty::from_int(4), None);
        assert_eq!(Difficulty::from_int(-1), None);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("none".parse::<Difficulty>(), Ok(Difficulty::None));
        assert!("trivial".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_only_none_is_not_a_rating() {
        assert!(!Difficulty::None.is_rating());
        assert!(Difficulty::Easy.is_rating());
        assert!(Difficulty::Medium.is_rating());
        assert!(Difficulty::Hard.is_rating());
    }

    #[test]
    fn test_new_flashcard_defaults() {
        let card = Flashcard::new("c1", "hello", "cześć");
        assert_eq!(card.difficulty, Difficulty::Easy);
        assert_eq!(card.repetition, 0);
        assert_eq!(card.next_review, None);
    }

    #[test]
    fn test_flashcard_json_shape() {
        let mut card = Flashcard::new("c1", "Q", "A");
        card.next_review = Some("2024-03-01".to_string());

        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["difficulty"], "EASY");
        assert_eq!(value["nextReview"], "2024-03-01");
        assert!(value.get("imageUrl").is_none());
    }

    #[test]
    fn test_flashcard_missing_scheduling_fields_use_defaults() {
        let card: Flashcard = serde_json::from_str(r#"{"id":"c9","question":"Q","answer":"A"}"#).unwrap();
        assert_eq!(card.difficulty, Difficulty::Easy);
        assert_eq!(card.repetition, 0);
        assert!(card.next_review.is_none());
    }
}
