//! Breeding configuration — tunables and the inheritance table.
//!
//! Everything the resolver, blender and prediction engine need to agree on
//! lives here, so a prediction made with a config always describes what
//! breeding with that same config can produce.
//!
//! ```
//! use menagerie_logic::config::{validate_config, BreedingConfig};
//!
//! let config = BreedingConfig::default();
//! assert_eq!(config.mutation_chance, 0.05);
//! assert!(validate_config(&config).is_empty());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::genetics::{Dominance, Rarity};

/// Minimum parent health required to breed.
pub const DEFAULT_MIN_BREEDING_HEALTH: f32 = 0.5;

/// Chance that an offspring carries one mutation.
pub const DEFAULT_MUTATION_CHANCE: f32 = 0.05;

/// Half-width of the uniform jitter added to the parents' mean personality.
pub const DEFAULT_PERSONALITY_JITTER: f32 = 0.15;

/// Magnitude of a personality-shift mutation.
pub const DEFAULT_PERSONALITY_SHIFT: f32 = 0.1;

/// Widest allowed deviation of an offspring slider from the parent mean.
pub const MAX_PERSONALITY_DEVIATION: f32 = 0.3;

/// Newborns are always happier than this.
pub const NEWBORN_HAPPINESS_FLOOR: f32 = 0.8;

/// Probability that a trait carried by both parents is inherited.
pub const SHARED_TRAIT_PROBABILITY: f32 = 1.0;

/// Probability that a trait carried by only one parent is inherited,
/// indexed by rarity (common first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InheritanceTable {
    pub dominant: [f32; 5],
    pub recessive: [f32; 5],
}

impl Default for InheritanceTable {
    fn default() -> Self {
        Self {
            //          common uncommon rare  epic  legendary
            dominant: [0.50, 0.45, 0.40, 0.35, 0.30],
            recessive: [0.25, 0.22, 0.20, 0.15, 0.10],
        }
    }
}

impl InheritanceTable {
    pub fn probability(&self, dominance: Dominance, rarity: Rarity) -> f32 {
        let row = match dominance {
            Dominance::Dominant => &self.dominant,
            Dominance::Recessive => &self.recessive,
        };
        row[rarity.index()]
    }
}

/// Tunables for a [`crate::breeding::BreedingSystem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedingConfig {
    /// Parents below this health are rejected.
    pub min_breeding_health: f32,
    /// Chance of one mutation per offspring.
    pub mutation_chance: f32,
    /// Uniform jitter bound applied to each blended slider.
    pub personality_jitter: f32,
    /// Slider change caused by a personality-shift mutation.
    pub personality_shift: f32,
    /// Newborn happiness is drawn from this range.
    pub newborn_happiness_min: f32,
    pub newborn_happiness_max: f32,
    pub inheritance: InheritanceTable,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            min_breeding_health: DEFAULT_MIN_BREEDING_HEALTH,
            mutation_chance: DEFAULT_MUTATION_CHANCE,
            personality_jitter: DEFAULT_PERSONALITY_JITTER,
            personality_shift: DEFAULT_PERSONALITY_SHIFT,
            newborn_happiness_min: 0.85,
            newborn_happiness_max: 1.0,
            inheritance: InheritanceTable::default(),
        }
    }
}

impl BreedingConfig {
    /// Largest distance a blended slider can end up from the parents' mean.
    pub fn personality_spread(&self) -> f32 {
        self.personality_jitter + self.personality_shift
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },
    #[error("newborn happiness range {min}..={max} is empty")]
    EmptyHappinessRange { min: f32, max: f32 },
    #[error("newborn happiness minimum {0} must be above 0.8")]
    NewbornHappinessTooLow(f32),
    #[error("personality jitter plus shift ({0}) exceeds 0.3")]
    PersonalitySpreadTooWide(f32),
}

/// Validate a breeding configuration, returning all errors found.
pub fn validate_config(config: &BreedingConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let mut unit = |field: &'static str, value: f32| {
        if !(0.0..=1.0).contains(&value) {
            errors.push(ConfigError::OutOfUnitRange { field, value });
        }
    };
    unit("min_breeding_health", config.min_breeding_health);
    unit("mutation_chance", config.mutation_chance);
    unit("personality_jitter", config.personality_jitter);
    unit("personality_shift", config.personality_shift);
    unit("newborn_happiness_min", config.newborn_happiness_min);
    unit("newborn_happiness_max", config.newborn_happiness_max);
    for (i, p) in config.inheritance.dominant.iter().enumerate() {
        unit(dominant_field(i), *p);
    }
    for (i, p) in config.inheritance.recessive.iter().enumerate() {
        unit(recessive_field(i), *p);
    }

    if config.newborn_happiness_min > config.newborn_happiness_max {
        errors.push(ConfigError::EmptyHappinessRange {
            min: config.newborn_happiness_min,
            max: config.newborn_happiness_max,
        });
    }
    if config.newborn_happiness_min <= NEWBORN_HAPPINESS_FLOOR {
        errors.push(ConfigError::NewbornHappinessTooLow(
            config.newborn_happiness_min,
        ));
    }

    let spread = config.personality_spread();
    if spread > MAX_PERSONALITY_DEVIATION {
        errors.push(ConfigError::PersonalitySpreadTooWide(spread));
    }

    errors
}

fn dominant_field(index: usize) -> &'static str {
    [
        "inheritance.dominant.common",
        "inheritance.dominant.uncommon",
        "inheritance.dominant.rare",
        "inheritance.dominant.epic",
        "inheritance.dominant.legendary",
    ][index]
}

fn recessive_field(index: usize) -> &'static str {
    [
        "inheritance.recessive.common",
        "inheritance.recessive.uncommon",
        "inheritance.recessive.rare",
        "inheritance.recessive.epic",
        "inheritance.recessive.legendary",
    ][index]
}
