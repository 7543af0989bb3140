//! Pure breeding and genetics logic for Menagerie.
//!
//! This crate contains the creature breeding engine independent of any
//! storage, UI, or runtime. Functions take plain data plus a caller-owned
//! random source and return results, making them unit-testable and
//! reproducible under a seeded RNG.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`blending`] | Personality blending and personality-shift mutations |
//! | [`breeding`] | `BreedingSystem` coordinator: validate, resolve, blend, assemble |
//! | [`config`] | Tunable breeding constants, inheritance table, and validation |
//! | [`creature`] | Creature identity and record (vitals, genetics, personality) |
//! | [`eligibility`] | Ordered breeding eligibility checks |
//! | [`error`] | `BreedingError` rejection reasons |
//! | [`genetics`] | Traits, rarity tiers, mutations, and the novel-trait pool |
//! | [`inheritance`] | Trait inheritance resolver and shared probability rule |
//! | [`names`] | Species-flavored newborn names |
//! | [`offspring`] | Newborn record assembly |
//! | [`personality`] | Playfulness / loyalty / intelligence sliders |
//! | [`prediction`] | Non-committing offspring forecasts |
//! | [`species`] | Species catalog, base traits, and life stages |

pub mod blending;
pub mod breeding;
pub mod config;
pub mod creature;
pub mod eligibility;
pub mod error;
pub mod genetics;
pub mod inheritance;
pub mod names;
pub mod offspring;
pub mod personality;
pub mod prediction;
pub mod species;

pub use breeding::BreedingSystem;
pub use config::BreedingConfig;
pub use creature::{CreatureId, CreatureRecord};
pub use eligibility::Readiness;
pub use error::BreedingError;
pub use genetics::{Dominance, GeneticProfile, GeneticTrait, Mutation, MutationEffect, Rarity};
pub use personality::{PersonalityProfile, Slider};
pub use prediction::BreedingPrediction;
pub use species::{LifeStage, Species};
