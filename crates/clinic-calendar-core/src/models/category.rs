//! Treatment categories and their legend colours.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Treatment category of an appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Emergency,
    Examination,
    Consultation,
    #[serde(rename = "Routine Checkup")]
    RoutineCheckup,
    #[serde(rename = "Sick Visit")]
    SickVisit,
}

impl Category {
    /// All categories in legend order.
    pub const ALL: [Category; 5] = [
        Category::Emergency,
        Category::Examination,
        Category::Consultation,
        Category::RoutineCheckup,
        Category::SickVisit,
    ];

    /// Display name, also the value the booking form submits.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Emergency => "Emergency",
            Category::Examination => "Examination",
            Category::Consultation => "Consultation",
            Category::RoutineCheckup => "Routine Checkup",
            Category::SickVisit => "Sick Visit",
        }
    }

    /// Background class used by the web shell.
    pub fn color_class(&self) -> &'static str {
        match self {
            Category::Emergency => "bg-blue-400",
            Category::Examination => "bg-yellow-400",
            Category::Consultation => "bg-purple-400",
            Category::RoutineCheckup => "bg-red-400",
            Category::SickVisit => "bg-sky-400",
        }
    }

    /// Same colour as an RGB hex string, for native hosts.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Category::Emergency => "#60a5fa",
            Category::Examination => "#facc15",
            Category::Consultation => "#c084fc",
            Category::RoutineCheckup => "#f87171",
            Category::SickVisit => "#38bdf8",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a category name outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One row of the category legend.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LegendEntry {
    pub category: Category,
    pub name: &'static str,
    pub color_class: &'static str,
    pub color_hex: &'static str,
}

/// The category legend in display order.
pub fn legend() -> Vec<LegendEntry> {
    Category::ALL
        .into_iter()
        .map(|category| LegendEntry {
            category,
            name: category.name(),
            color_class: category.color_class(),
            color_hex: category.color_hex(),
        })
        .collect()
}
