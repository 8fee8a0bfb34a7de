//! Catalog record types.

use std::fmt;

/// One of the two item kinds a lineup is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Individual drivers (first category).
    Driver,
    /// Constructor teams (second category).
    Team,
}

impl Category {
    /// Both categories in enumeration order.
    pub const ALL: [Category; 2] = [Category::Driver, Category::Team];

    /// Lowercase label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Category::Driver => "driver",
            Category::Team => "team",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A priced, scored catalog entry.
///
/// `name` is unique within its category. Cost is in currency-million units,
/// score in points. Both are non-negative and finite once the item is part
/// of a [`Catalog`](super::Catalog).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Display identity.
    pub name: String,
    /// Price.
    pub cost: f64,
    /// Points.
    pub score: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, cost: f64, score: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            score,
        }
    }

    /// Points per unit of cost; `0.0` for free items.
    pub fn value_ratio(&self) -> f64 {
        if self.cost > 0.0 {
            self.score / self.cost
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        assert_eq!(Category::Driver.to_string(), "driver");
        assert_eq!(Category::Team.label(), "team");
        assert_eq!(Category::ALL, [Category::Driver, Category::Team]);
    }

    #[test]
    fn test_value_ratio() {
        let item = Item::new("Alonso", 8.0, 70.0);
        assert!((item.value_ratio() - 8.75).abs() < 1e-10);

        let free = Item::new("Free", 0.0, 10.0);
        assert_eq!(free.value_ratio(), 0.0);
    }
}
