//! Species and life stages.
//!
//! Species is a closed set; breeding is only allowed within a species, so the
//! offspring's species is always the shared species of its parents. Each
//! species carries two dominant/common base traits and a baseline
//! personality used when seeding generation-0 founders.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::genetics::{Dominance, GeneticTrait, Rarity};
use crate::personality::PersonalityProfile;

/// Creature species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Luminos,
    Fluffkins,
    Crystalites,
    Aquarians,
    Shadowlings,
}

impl Species {
    /// All species variants for iteration.
    pub fn all() -> &'static [Species] {
        &[
            Species::Luminos,
            Species::Fluffkins,
            Species::Crystalites,
            Species::Aquarians,
            Species::Shadowlings,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Species::Luminos => "Luminos",
            Species::Fluffkins => "Fluffkins",
            Species::Crystalites => "Crystalites",
            Species::Aquarians => "Aquarians",
            Species::Shadowlings => "Shadowlings",
        }
    }

    /// The two traits every founder of this species is born with.
    pub fn base_traits(self) -> [GeneticTrait; 2] {
        let (first, second) = match self {
            Species::Luminos => ("Bioluminescence", "Light Affinity"),
            Species::Fluffkins => ("Dense Fur", "Soft Coat"),
            Species::Crystalites => ("Crystalline Structure", "Geometric Form"),
            Species::Aquarians => ("Fluid Movement", "Translucent Body"),
            Species::Shadowlings => ("Shadow Form", "Stealth"),
        };
        [
            GeneticTrait::new(first, Dominance::Dominant, Rarity::Common),
            GeneticTrait::new(second, Dominance::Dominant, Rarity::Common),
        ]
    }

    /// Species temperament that founder personalities are scattered around.
    pub fn base_personality(self) -> PersonalityProfile {
        match self {
            // Outgoing and bright
            Species::Luminos => PersonalityProfile::new(0.75, 0.55, 0.5),
            // Affectionate, very attached to their keeper
            Species::Fluffkins => PersonalityProfile::new(0.6, 0.8, 0.45),
            Species::Crystalites => PersonalityProfile::new(0.35, 0.5, 0.8),
            Species::Aquarians => PersonalityProfile::new(0.55, 0.6, 0.6),
            // Reserved, observant
            Species::Shadowlings => PersonalityProfile::new(0.3, 0.45, 0.7),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Age in days at which a creature leaves the baby stage.
pub const JUVENILE_AGE_DAYS: f64 = 30.0;
/// Age in days at which a creature becomes an adult (and may breed).
pub const ADULT_AGE_DAYS: f64 = 90.0;
/// Age in days at which a creature becomes an elder.
pub const ELDER_AGE_DAYS: f64 = 365.0;

/// Life stage, ordered from youngest to oldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    /// Age < 30 days.
    Baby,
    /// Age 30..90 days.
    Juvenile,
    /// Age 90..365 days. The only stage allowed to breed.
    Adult,
    /// Age >= 365 days.
    Elder,
}

impl LifeStage {
    pub fn for_age_days(days: f64) -> Self {
        if days >= ELDER_AGE_DAYS {
            Self::Elder
        } else if days >= ADULT_AGE_DAYS {
            Self::Adult
        } else if days >= JUVENILE_AGE_DAYS {
            Self::Juvenile
        } else {
            Self::Baby
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LifeStage::Baby => "Baby",
            LifeStage::Juvenile => "Juvenile",
            LifeStage::Adult => "Adult",
            LifeStage::Elder => "Elder",
        }
    }

    /// Whether creatures at this stage are old enough to breed.
    pub fn can_breed(self) -> bool {
        matches!(self, Self::Adult)
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
