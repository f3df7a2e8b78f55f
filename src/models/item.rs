use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::PlannerError;

/// Minimum Jaro-Winkler score for an unknown name to earn a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// One of the six fixed food categories on the grill.
///
/// The first four are meats and share the scenario meat pool; the last two
/// are plant-based and only ever get a per-item boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Manzo,
    Pollo,
    Salsiccia,
    Maiale,
    Tofu,
    Verdure,
}

impl Item {
    pub const ALL: [Item; 6] = [
        Item::Manzo,
        Item::Pollo,
        Item::Salsiccia,
        Item::Maiale,
        Item::Tofu,
        Item::Verdure,
    ];

    pub const MEATS: [Item; 4] = [Item::Manzo, Item::Pollo, Item::Salsiccia, Item::Maiale];

    pub const PLANTS: [Item; 2] = [Item::Tofu, Item::Verdure];

    pub fn is_meat(self) -> bool {
        !matches!(self, Item::Tofu | Item::Verdure)
    }

    /// Stable lowercase identifier, used for parsing and persistence.
    pub fn key(self) -> &'static str {
        match self {
            Item::Manzo => "manzo",
            Item::Pollo => "pollo",
            Item::Salsiccia => "salsiccia",
            Item::Maiale => "maiale",
            Item::Tofu => "tofu",
            Item::Verdure => "verdure",
        }
    }

    /// Human-readable name shown in tables and exports.
    pub fn label(self) -> &'static str {
        match self {
            Item::Manzo => "Manzo",
            Item::Pollo => "Pollo",
            Item::Salsiccia => "Salsiccia",
            Item::Maiale => "Maiale",
            Item::Tofu => "Tofu",
            Item::Verdure => "Verdure grigliate",
        }
    }

    /// Closest known item to a misspelled name, if any is close enough.
    pub fn suggest(input: &str) -> Option<Item> {
        let needle = input.trim().to_lowercase();
        Item::ALL
            .into_iter()
            .map(|item| (item, jaro_winkler(item.key(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(item, _)| item)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Item {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if let Some(item) = Item::ALL.into_iter().find(|item| item.key() == needle) {
            return Ok(item);
        }

        let message = match Item::suggest(s) {
            Some(item) => format!("'{}' (did you mean '{}'?)", s, item.key()),
            None => format!("'{}'", s),
        };
        Err(PlannerError::UnknownItem(message))
    }
}

/// A value for every item.
///
/// Each item has its own field, so a mapping can never be missing an entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemMap<T> {
    pub manzo: T,
    pub pollo: T,
    pub salsiccia: T,
    pub maiale: T,
    pub tofu: T,
    pub verdure: T,
}

impl<T> ItemMap<T> {
    /// Build a mapping by evaluating `f` once per item.
    pub fn from_fn(mut f: impl FnMut(Item) -> T) -> Self {
        Self {
            manzo: f(Item::Manzo),
            pollo: f(Item::Pollo),
            salsiccia: f(Item::Salsiccia),
            maiale: f(Item::Maiale),
            tofu: f(Item::Tofu),
            verdure: f(Item::Verdure),
        }
    }

    pub fn get(&self, item: Item) -> &T {
        match item {
            Item::Manzo => &self.manzo,
            Item::Pollo => &self.pollo,
            Item::Salsiccia => &self.salsiccia,
            Item::Maiale => &self.maiale,
            Item::Tofu => &self.tofu,
            Item::Verdure => &self.verdure,
        }
    }

    pub fn get_mut(&mut self, item: Item) -> &mut T {
        match item {
            Item::Manzo => &mut self.manzo,
            Item::Pollo => &mut self.pollo,
            Item::Salsiccia => &mut self.salsiccia,
            Item::Maiale => &mut self.maiale,
            Item::Tofu => &mut self.tofu,
            Item::Verdure => &mut self.verdure,
        }
    }

    /// Iterate entries in `Item::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Item, &T)> + '_ {
        Item::ALL.into_iter().map(move |item| (item, self.get(item)))
    }
}

/// Per-item portion sizes, overridable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemParameters {
    pub base_adult_grams: f64,
    pub base_child_grams: f64,
    pub enabled: bool,
}

impl ItemParameters {
    /// Grams needed for a group of adults and children at multiplier 1.0.
    #[inline]
    pub fn grams_for(&self, adults: u32, children: u32) -> f64 {
        adults as f64 * self.base_adult_grams + children as f64 * self.base_child_grams
    }

    /// Gram values must be finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.base_adult_grams.is_finite()
            && self.base_child_grams.is_finite()
            && self.base_adult_grams >= 0.0
            && self.base_child_grams >= 0.0
    }
}

pub type ParameterTable = ItemMap<ItemParameters>;
