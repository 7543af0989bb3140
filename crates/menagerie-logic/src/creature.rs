//! Creature records — the snapshots the engine reads and produces.
//!
//! Records are owned by the host's creature store. The engine only borrows
//! parents and hands back freshly built offspring.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::BreedingConfig;
use crate::genetics::GeneticProfile;
use crate::personality::PersonalityProfile;
use crate::species::{LifeStage, Species};

/// Unique creature identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreatureId(Uuid);

impl CreatureId {
    /// A fresh identifier, distinct from every other id ever generated.
    pub fn new() -> Self {
        CreatureId(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        CreatureId(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A creature snapshot. Vital stats are all in [0.0, 1.0];
/// `hunger` of 1.0 means fully fed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: CreatureId,
    pub name: String,
    pub species: Species,
    pub life_stage: LifeStage,
    pub birth: DateTime<Utc>,
    pub health: f32,
    pub happiness: f32,
    pub energy: f32,
    pub hunger: f32,
    pub genetics: GeneticProfile,
    pub personality: PersonalityProfile,
}

impl CreatureRecord {
    /// A generation-0 creature born now, with default stats and the
    /// species baseline personality. Use the `with_*` setters to adjust.
    pub fn founder(name: impl Into<String>, species: Species) -> Self {
        Self {
            id: CreatureId::new(),
            name: name.into(),
            species,
            life_stage: LifeStage::Baby,
            birth: Utc::now(),
            health: 1.0,
            happiness: 0.8,
            energy: 1.0,
            hunger: 1.0,
            genetics: GeneticProfile::new(0, species.base_traits()),
            personality: species.base_personality(),
        }
    }

    pub fn with_id(mut self, id: CreatureId) -> Self {
        self.id = id;
        self
    }

    pub fn with_life_stage(mut self, stage: LifeStage) -> Self {
        self.life_stage = stage;
        self
    }

    /// Set the birth time and derive the life stage from the resulting age.
    pub fn born_days_ago(mut self, days: i64) -> Self {
        let now = Utc::now();
        self.birth = now - Duration::days(days);
        self.life_stage = LifeStage::for_age_days(self.age_in_days(now));
        self
    }

    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health.clamp(0.0, 1.0);
        self
    }

    pub fn with_happiness(mut self, happiness: f32) -> Self {
        self.happiness = happiness.clamp(0.0, 1.0);
        self
    }

    pub fn with_genetics(mut self, genetics: GeneticProfile) -> Self {
        self.genetics = genetics;
        self
    }

    pub fn with_personality(mut self, personality: PersonalityProfile) -> Self {
        self.personality = personality;
        self
    }

    /// Age in (fractional) days at `now`. Never negative.
    pub fn age_in_days(&self, now: DateTime<Utc>) -> f64 {
        let seconds = (now - self.birth).num_seconds().max(0);
        seconds as f64 / 86_400.0
    }

    /// Recompute the life stage from age at `now`.
    pub fn update_life_stage(&mut self, now: DateTime<Utc>) {
        self.life_stage = LifeStage::for_age_days(self.age_in_days(now));
    }

    /// Whether this creature alone meets the stage and health requirements.
    /// Pair checks (species, identity) are done by eligibility validation.
    pub fn can_breed(&self, config: &BreedingConfig) -> bool {
        self.life_stage.can_breed() && self.health >= config.min_breeding_health
    }
}
