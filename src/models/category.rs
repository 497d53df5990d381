//! Expense categories and label classification
//!
//! The category set is closed. Free-text labels are mapped onto it by an
//! ordered list of substring rules; the first rule that matches wins, so
//! overlaps such as "Car insurance" resolve by rule order rather than by the
//! longest match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending category of an expense line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Housing,
    Utilities,
    Food,
    Transport,
    Insurance,
    Health,
    Subscriptions,
    Entertainment,
    Personal,
    #[default]
    Other,
}

/// Ordered substring rules. Earlier entries take priority.
const RULES: &[(ExpenseCategory, &[&str])] = &[
    (
        ExpenseCategory::Housing,
        &["rent", "mortgage", "hous", "strata", "council"],
    ),
    (
        ExpenseCategory::Utilities,
        &[
            "electric", "power", "gas", "water", "internet", "phone", "mobile", "utilit",
        ],
    ),
    (
        ExpenseCategory::Food,
        &[
            "grocer",
            "food",
            "dining",
            "restaurant",
            "takeaway",
            "coffee",
            "supermarket",
        ],
    ),
    (
        ExpenseCategory::Transport,
        &[
            "car", "fuel", "petrol", "transport", "uber", "bus", "train", "parking", "rego",
            "toll",
        ],
    ),
    (ExpenseCategory::Insurance, &["insur"]),
    (
        ExpenseCategory::Health,
        &["health", "medical", "doctor", "dental", "pharmac", "gym"],
    ),
    (
        ExpenseCategory::Subscriptions,
        &["subscri", "netflix", "spotify", "stream"],
    ),
    (
        ExpenseCategory::Entertainment,
        &[
            "entertain", "movie", "game", "concert", "hobby", "travel", "holiday",
        ],
    ),
    (
        ExpenseCategory::Personal,
        &["cloth", "personal", "hair", "shopping", "gift"],
    ),
];

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 10] = [
        Self::Housing,
        Self::Utilities,
        Self::Food,
        Self::Transport,
        Self::Insurance,
        Self::Health,
        Self::Subscriptions,
        Self::Entertainment,
        Self::Personal,
        Self::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Utilities => "utilities",
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Insurance => "insurance",
            Self::Health => "health",
            Self::Subscriptions => "subscriptions",
            Self::Entertainment => "entertainment",
            Self::Personal => "personal",
            Self::Other => "other",
        }
    }

    /// Human-readable label for tables
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Food => "Food & Dining",
            Self::Transport => "Transport",
            Self::Insurance => "Insurance",
            Self::Health => "Health",
            Self::Subscriptions => "Subscriptions",
            Self::Entertainment => "Entertainment",
            Self::Personal => "Personal",
            Self::Other => "Other",
        }
    }

    /// Exact, case-insensitive match against the canonical names
    pub fn from_canonical(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }

    /// Classify a category name or expense label
    pub fn classify(input: &str) -> Self {
        if let Some(category) = Self::from_canonical(input) {
            return category;
        }

        let text = input.to_lowercase();
        RULES
            .iter()
            .find(|(_, needles)| needles.iter().any(|needle| text.contains(needle)))
            .map(|(category, _)| *category)
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s).ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
            format!(
                "Unknown category: '{}' (expected one of: {})",
                s,
                names.join(", ")
            )
        })
    }
}
