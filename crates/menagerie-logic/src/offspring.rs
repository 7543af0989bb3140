//! Offspring assembly — turns resolved genetics and blended personality
//! into a brand-new creature record.

use chrono::Utc;
use rand::Rng;

use crate::config::BreedingConfig;
use crate::creature::{CreatureId, CreatureRecord};
use crate::genetics::GeneticProfile;
use crate::names::generate_name;
use crate::personality::PersonalityProfile;
use crate::species::{LifeStage, Species};

/// Build a newborn: fresh id, generated name, baby stage, born now,
/// full health/energy/hunger and high happiness.
pub fn assemble(
    species: Species,
    genetics: GeneticProfile,
    personality: PersonalityProfile,
    config: &BreedingConfig,
    rng: &mut impl Rng,
) -> CreatureRecord {
    let happiness = if config.newborn_happiness_min < config.newborn_happiness_max {
        rng.gen_range(config.newborn_happiness_min..=config.newborn_happiness_max)
    } else {
        config.newborn_happiness_max
    };

    CreatureRecord {
        id: CreatureId::new(),
        name: generate_name(species, rng),
        species,
        life_stage: LifeStage::Baby,
        birth: Utc::now(),
        health: 1.0,
        happiness: happiness.clamp(0.0, 1.0),
        energy: 1.0,
        hunger: 1.0,
        genetics,
        personality,
    }
}
