use std::collections::HashMap;
use std::fmt;

use crate::io::configuration::{
    CATEGORY_SYMBOLS, CATEGORY_TENSIONS, IDENTICAL_SYMBOL_TENSION, SPACE,
};
use crate::io::error::{Result, SnowError, invalid_parameter};

/// Visual weight class of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Light flakes such as `.` and `` ` ``
    Small,
    /// Heavy flakes such as `*` and `•`
    Large,
    /// Blank cells
    Space,
}

impl Category {
    /// Every category, in catalog order
    pub const ALL: [Self; 3] = [Self::Small, Self::Large, Self::Space];

    /// Lowercase name used in messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
            Self::Space => "space",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated mapping from symbols to categories and categories to tension weights
///
/// Each symbol belongs to exactly one category. Members keep the order in
/// which they first appeared in the configuration literal, so repeated
/// characters inside one literal collapse into a single member.
#[derive(Debug, Clone)]
pub struct Catalog {
    members: Vec<(Category, Vec<char>)>,
    lookup: HashMap<char, Category>,
    tensions: HashMap<Category, f64>,
}

impl Catalog {
    /// Build a catalog from ordered symbol literals and per-category tension weights
    ///
    /// # Errors
    ///
    /// Returns [`SnowError::DuplicateSymbol`] if a symbol is claimed by two
    /// categories, or an invalid parameter error if a category with members
    /// has no tension weight or a weight is listed twice.
    pub fn new(symbols: &[(Category, &str)], tensions: &[(Category, f64)]) -> Result<Self> {
        let mut members: Vec<(Category, Vec<char>)> = Vec::new();
        let mut lookup = HashMap::new();

        for &(category, literal) in symbols {
            for symbol in literal.chars() {
                if let Some(&first) = lookup.get(&symbol) {
                    if first != category {
                        return Err(SnowError::DuplicateSymbol {
                            symbol,
                            first,
                            second: category,
                        });
                    }
                    continue;
                }
                lookup.insert(symbol, category);

                match members.iter_mut().find(|(c, _)| *c == category) {
                    Some((_, list)) => list.push(symbol),
                    None => members.push((category, vec![symbol])),
                }
            }
        }

        let mut weights = HashMap::new();
        for &(category, weight) in tensions {
            if weights.insert(category, weight).is_some() {
                return Err(invalid_parameter(
                    "tension",
                    &category,
                    &"tension weight listed more than once",
                ));
            }
        }

        for (category, _) in &members {
            if !weights.contains_key(category) {
                return Err(invalid_parameter(
                    "tension",
                    category,
                    &"category has symbols but no tension weight",
                ));
            }
        }

        Ok(Self {
            members,
            lookup,
            tensions: weights,
        })
    }

    /// The fixed snow catalog
    ///
    /// # Errors
    ///
    /// Only fails if the configured literals overlap
    pub fn standard() -> Result<Self> {
        Self::new(&CATEGORY_SYMBOLS, &CATEGORY_TENSIONS)
    }

    /// Category owning `symbol`, if any
    pub fn category_of(&self, symbol: char) -> Option<Category> {
        self.lookup.get(&symbol).copied()
    }

    /// Members of a category in configuration order
    pub fn members(&self, category: Category) -> &[char] {
        self.members
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    /// Categories that own at least one symbol, in configuration order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.members.iter().map(|(c, _)| *c)
    }

    /// Total number of distinct symbols
    pub fn symbol_count(&self) -> usize {
        self.lookup.len()
    }

    /// Tension weight of a category, zero when not configured
    pub fn tension_weight(&self, category: Category) -> f64 {
        self.tensions.get(&category).copied().unwrap_or(0.0)
    }

    /// Tension between two symbols
    ///
    /// Identical non-space symbols repel the most. Otherwise symbols of the same
    /// category share that category's weight and unrelated symbols are neutral.
    pub fn tension(&self, c1: char, c2: char) -> f64 {
        if c1 == c2 && c1 != SPACE {
            return IDENTICAL_SYMBOL_TENSION;
        }

        match (self.category_of(c1), self.category_of(c2)) {
            (Some(a), Some(b)) if a == b => self.tension_weight(a),
            _ => 0.0,
        }
    }
}
