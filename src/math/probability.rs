//! Category frequency resolution and per-symbol probability tables

use std::collections::BTreeMap;

use crate::catalog::{Catalog, Category};
use crate::io::configuration::{CATEGORY_FREQUENCIES, PROBABILITY_TOLERANCE};
use crate::io::error::{Result, invalid_frequencies};

/// Resolve target frequencies, splitting leftover mass over unspecified categories
///
/// Specified frequencies must be non-negative and sum to at most one. Every
/// `None` entry receives `(1 - specified_sum) / unspecified_count`. When all
/// entries are specified they must already sum to one.
///
/// # Errors
///
/// Returns an invalid frequencies error if a category repeats, a value is
/// negative or not finite, or the total cannot be made to sum to one.
pub fn resolve_frequencies(
    frequencies: &[(Category, Option<f64>)],
) -> Result<Vec<(Category, f64)>> {
    let mut specified_sum = 0.0;
    let mut unspecified = 0_usize;

    for (i, &(category, frequency)) in frequencies.iter().enumerate() {
        if frequencies
            .iter()
            .take(i)
            .any(|&(earlier, _)| earlier == category)
        {
            return Err(invalid_frequencies(&format!(
                "category '{category}' listed more than once"
            )));
        }

        match frequency {
            Some(f) if !f.is_finite() || f < 0.0 => {
                return Err(invalid_frequencies(&format!(
                    "frequency {f} for '{category}' must be a non-negative number"
                )));
            }
            Some(f) => specified_sum += f,
            None => unspecified += 1,
        }
    }

    if specified_sum > 1.0 + PROBABILITY_TOLERANCE {
        return Err(invalid_frequencies(&format!(
            "specified frequencies sum to {specified_sum}, more than 1.0"
        )));
    }

    if unspecified == 0 && (specified_sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(invalid_frequencies(&format!(
            "frequencies sum to {specified_sum} and none is left to fill the remainder"
        )));
    }

    let remainder = if unspecified == 0 {
        0.0
    } else {
        (1.0 - specified_sum).max(0.0) / unspecified as f64
    };

    Ok(frequencies
        .iter()
        .map(|&(category, frequency)| (category, frequency.unwrap_or(remainder)))
        .collect())
}

/// Probability of drawing each symbol, ordered by symbol
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    entries: BTreeMap<char, f64>,
}

impl ProbabilityTable {
    /// Spread each category's frequency evenly over its member symbols
    ///
    /// # Errors
    ///
    /// Returns an invalid frequencies error if the frequencies do not resolve,
    /// if they name a category the catalog lacks (with non-zero mass) or omit
    /// one it has, or if the resulting table does not sum to one.
    pub fn from_frequencies(
        catalog: &Catalog,
        frequencies: &[(Category, Option<f64>)],
    ) -> Result<Self> {
        let resolved = resolve_frequencies(frequencies)?;

        for category in catalog.categories() {
            if !resolved.iter().any(|&(c, _)| c == category) {
                return Err(invalid_frequencies(&format!(
                    "no frequency given for category '{category}'"
                )));
            }
        }

        let mut entries = BTreeMap::new();
        for (category, frequency) in resolved {
            let members = catalog.members(category);
            if members.is_empty() {
                if frequency > PROBABILITY_TOLERANCE {
                    return Err(invalid_frequencies(&format!(
                        "category '{category}' has frequency {frequency} but no symbols"
                    )));
                }
                continue;
            }

            let share = frequency / members.len() as f64;
            for &symbol in members {
                *entries.entry(symbol).or_insert(0.0) += share;
            }
        }

        let table = Self { entries };
        let total = table.total();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(invalid_frequencies(&format!(
                "symbol probabilities sum to {total}"
            )));
        }

        Ok(table)
    }

    /// Table for the fixed snow frequencies
    ///
    /// # Errors
    ///
    /// Fails only if the configured frequencies disagree with the catalog
    pub fn standard(catalog: &Catalog) -> Result<Self> {
        Self::from_frequencies(catalog, &CATEGORY_FREQUENCIES)
    }

    /// Probability of `symbol`, zero if absent
    pub fn probability(&self, symbol: char) -> f64 {
        self.entries.get(&symbol).copied().unwrap_or(0.0)
    }

    /// Symbols in table order
    pub fn symbols(&self) -> Vec<char> {
        self.entries.keys().copied().collect()
    }

    /// Probabilities aligned with [`Self::symbols`]
    pub fn weights(&self) -> Vec<f64> {
        self.entries.values().copied().collect()
    }

    /// Number of symbols in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no symbols
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all probabilities
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }
}
