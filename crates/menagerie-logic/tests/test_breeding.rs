//! Integration tests for the full breeding pipeline.
//!
//! Exercises: validate → resolve traits → blend personality → assemble,
//! plus the non-committing prediction path, through the public
//! `BreedingSystem` API only.

use std::collections::HashSet;

use menagerie_logic::genetics::{Dominance, GeneticProfile, GeneticTrait, Rarity};
use menagerie_logic::{
    BreedingConfig, BreedingError, BreedingSystem, CreatureRecord, LifeStage, PersonalityProfile,
    Readiness, Slider, Species,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ── Helpers ────────────────────────────────────────────────────────────

fn adult(name: &str, species: Species) -> CreatureRecord {
    CreatureRecord::founder(name, species)
        .with_life_stage(LifeStage::Adult)
        .with_health(0.9)
}

fn with_traits(creature: CreatureRecord, traits: &[(&str, Dominance, Rarity)]) -> CreatureRecord {
    let genetics = GeneticProfile::new(
        0,
        traits.iter().map(|(n, d, r)| GeneticTrait::new(*n, *d, *r)),
    );
    creature.with_genetics(genetics)
}

fn blue_eyed_pair() -> (CreatureRecord, CreatureRecord) {
    let blue = [("Blue Eyes", Dominance::Dominant, Rarity::Common)];
    (
        with_traits(adult("Nova", Species::Luminos), &blue),
        with_traits(adult("Vega", Species::Luminos), &blue),
    )
}

// ── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn blue_eyed_luminos_pair_passes_on_blue_eyes() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let mut rng = StdRng::seed_from_u64(42);

    let child = system.breed(&a, &b, &mut rng).unwrap();
    assert_eq!(child.genetics.generation, 1);
    assert!(child.genetics.has_trait("Blue Eyes"));
    assert_eq!(child.species, Species::Luminos);
}

#[test]
fn baby_and_adult_rejected_for_life_stage() {
    let system = BreedingSystem::default();
    let baby = CreatureRecord::founder("Pip", Species::Luminos);
    let grown = adult("Nova", Species::Luminos);

    let err = system
        .breed(&baby, &grown, &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert_eq!(err, BreedingError::WrongLifeStage("Pip".into(), LifeStage::Baby));
    assert!(err.to_string().contains("stage"));
}

#[test]
fn weak_parent_rejected_for_health() {
    let system = BreedingSystem::default();
    let weak = adult("Ailing", Species::Luminos).with_health(0.3);
    let strong = adult("Hale", Species::Luminos).with_health(0.9);

    let err = system
        .breed(&weak, &strong, &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert!(matches!(err, BreedingError::InsufficientHealth(ref n, _) if n == "Ailing"));
    assert!(err.to_string().contains("health"));
}

#[test]
fn mixed_species_rejected() {
    let system = BreedingSystem::default();
    let err = system
        .breed(
            &adult("Nova", Species::Luminos),
            &adult("Tuft", Species::Fluffkins),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap_err();
    assert_eq!(err, BreedingError::SpeciesMismatch);
}

// ── Eligibility ────────────────────────────────────────────────────────

#[test]
fn same_creature_rejected() {
    let system = BreedingSystem::default();
    let a = adult("Nova", Species::Luminos);
    let err = system
        .breed(&a, &a.clone(), &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert_eq!(err, BreedingError::SameParent);
}

#[test]
fn elder_cannot_breed() {
    let system = BreedingSystem::default();
    let elder = adult("Old", Species::Aquarians).born_days_ago(400);
    assert_eq!(elder.life_stage, LifeStage::Elder);
    let result = system.breed(
        &adult("Young", Species::Aquarians),
        &elder,
        &mut StdRng::seed_from_u64(1),
    );
    assert!(matches!(result, Err(BreedingError::WrongLifeStage(_, LifeStage::Elder))));
}

#[test]
fn readiness_flag_blocks_breeding() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let readiness = Readiness {
        parent1: Some(true),
        parent2: Some(false),
    };
    let err = system
        .breed_with_readiness(&a, &b, readiness, &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert_eq!(err, BreedingError::ParentNotReady("Vega".into()));

    assert!(system
        .breed_with_readiness(&a, &b, Readiness::both(true), &mut StdRng::seed_from_u64(1))
        .is_ok());
}

#[test]
fn health_threshold_is_inclusive() {
    let system = BreedingSystem::default();
    let a = adult("A", Species::Shadowlings).with_health(0.5);
    let b = adult("B", Species::Shadowlings).with_health(0.5);
    assert!(system.breed(&a, &b, &mut StdRng::seed_from_u64(1)).is_ok());
}

#[test]
fn stage_checked_before_health() {
    let system = BreedingSystem::default();
    let baby = CreatureRecord::founder("Pip", Species::Luminos).with_health(0.1);
    let err = system
        .breed(&adult("Nova", Species::Luminos), &baby, &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert!(matches!(err, BreedingError::WrongLifeStage(..)));
}

// ── Offspring ──────────────────────────────────────────────────────────

#[test]
fn offspring_starts_as_healthy_baby() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let child = system.breed(&a, &b, &mut rng).unwrap();
        assert_eq!(child.life_stage, LifeStage::Baby);
        assert_eq!(child.health, 1.0);
        assert_eq!(child.energy, 1.0);
        assert_eq!(child.hunger, 1.0);
        assert!(child.happiness > 0.8);
        assert_ne!(child.id, a.id);
        assert_ne!(child.id, b.id);
        assert_eq!(child.genetics.parent_ids, vec![a.id, b.id]);
    }
}

#[test]
fn repeated_breeding_yields_distinct_offspring() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let mut rng = StdRng::seed_from_u64(5);

    let first = system.breed(&a, &b, &mut rng).unwrap();
    let second = system.breed(&a, &b, &mut rng).unwrap();
    assert_ne!(first.id, second.id);
    assert_ne!(first.personality, second.personality);
}

#[test]
fn generation_follows_older_lineage() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let mut older = a.genetics.clone();
    older.generation = 4;
    let a = a.with_genetics(older);

    let child = system.breed(&a, &b, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(child.genetics.generation, 5);
}

#[test]
fn offspring_can_breed_once_grown() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let mut rng = StdRng::seed_from_u64(11);
    let c1 = system.breed(&a, &b, &mut rng).unwrap().born_days_ago(120);
    let c2 = system.breed(&a, &b, &mut rng).unwrap().born_days_ago(120);
    assert_eq!(c1.life_stage, LifeStage::Adult);

    let grandchild = system.breed(&c1, &c2, &mut rng).unwrap();
    assert_eq!(grandchild.genetics.generation, 2);
    assert!(grandchild.genetics.has_trait("Blue Eyes"));
}

#[test]
fn seeded_runs_are_reproducible_apart_from_identity() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let x = system.breed(&a, &b, &mut StdRng::seed_from_u64(77)).unwrap();
    let y = system.breed(&a, &b, &mut StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(x.name, y.name);
    assert_eq!(x.genetics.trait_names(), y.genetics.trait_names());
    assert_eq!(x.personality, y.personality);
    assert_ne!(x.id, y.id);
}

// ── Personality ────────────────────────────────────────────────────────

#[test]
fn personality_blends_around_parent_mean() {
    let system = BreedingSystem::new(BreedingConfig {
        mutation_chance: 0.0,
        ..BreedingConfig::default()
    })
    .unwrap();
    let a = adult("A", Species::Fluffkins).with_personality(PersonalityProfile::new(0.9, 0.8, 0.7));
    let b = adult("B", Species::Fluffkins).with_personality(PersonalityProfile::new(0.3, 0.4, 0.5));
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..500 {
        let child = system.breed(&a, &b, &mut rng).unwrap();
        for &s in Slider::all() {
            let v = child.personality.get(s);
            assert!((v - 0.6).abs() <= 0.3, "{} = {}", s.label(), v);
            assert!((0.0..=1.0).contains(&v));
        }
    }
}

// ── Mutations ──────────────────────────────────────────────────────────

#[test]
fn mutation_rate_near_configured_chance() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let mut rng = StdRng::seed_from_u64(2024);
    let trials = 4000;
    let mutated = (0..trials)
        .filter(|_| !system.breed(&a, &b, &mut rng).unwrap().genetics.mutations.is_empty())
        .count();
    let rate = mutated as f32 / trials as f32;
    assert!((rate - 0.05).abs() < 0.02, "mutation rate {}", rate);
}

#[test]
fn novel_traits_are_new_to_the_lineage() {
    let system = BreedingSystem::new(BreedingConfig {
        mutation_chance: 1.0,
        ..BreedingConfig::default()
    })
    .unwrap();
    let (a, b) = blue_eyed_pair();
    let parent_traits: HashSet<&str> = a
        .genetics
        .trait_names()
        .into_iter()
        .chain(b.genetics.trait_names())
        .collect();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..200 {
        let child = system.breed(&a, &b, &mut rng).unwrap();
        assert_eq!(child.genetics.mutations.len(), 1);
        for name in child.genetics.trait_names() {
            assert!(name == "Blue Eyes" || !parent_traits.contains(name));
        }
    }
}

#[test]
fn invalid_config_never_reaches_breeding() {
    let config = BreedingConfig {
        newborn_happiness_min: 0.1,
        newborn_happiness_max: 0.2,
        ..BreedingConfig::default()
    };
    assert!(BreedingSystem::new(config).is_err());

    let config = BreedingConfig {
        personality_jitter: f32::INFINITY,
        ..BreedingConfig::default()
    };
    assert!(BreedingSystem::new(config).is_err());
}

#[test]
fn corrupt_health_fails_the_gate() {
    let system = BreedingSystem::default();
    let (mut a, b) = blue_eyed_pair();
    a.health = f32::NAN;
    let err = system
        .breed(&a, &b, &mut StdRng::seed_from_u64(1))
        .unwrap_err();
    assert!(matches!(err, BreedingError::InsufficientHealth(ref n, _) if n == "Nova"));
}

// ── Prediction ─────────────────────────────────────────────────────────

#[test]
fn prediction_matches_breeding_constants() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let forecast = system.predict_offspring(&a, &b);
    assert_eq!(forecast.mutation_chance, system.config().mutation_chance);
    assert_eq!(forecast.mutation_chance, 0.05);
    assert_eq!(forecast.probability_of("Blue Eyes"), Some(1.0));
}

#[test]
fn prediction_consumes_no_randomness() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let mut rng = StdRng::seed_from_u64(8);
    let mut twin = StdRng::seed_from_u64(8);

    let _ = system.predict_offspring(&a, &b);
    let _ = system.predict_offspring(&b, &a);
    let x = system.breed(&a, &b, &mut rng).unwrap();
    let y = system.breed(&a, &b, &mut twin).unwrap();
    assert_eq!(x.personality, y.personality);
    assert_eq!(rng.gen::<u64>(), twin.gen::<u64>());
}

#[test]
fn prediction_ignores_eligibility() {
    let system = BreedingSystem::default();
    let baby = CreatureRecord::founder("Pip", Species::Luminos);
    let other = adult("Tuft", Species::Fluffkins);
    let forecast = system.predict_offspring(&baby, &other);
    assert!(!forecast.possible_traits.is_empty());
}

#[test]
fn single_parent_trait_frequency_tracks_prediction() {
    let system = BreedingSystem::new(BreedingConfig {
        mutation_chance: 0.0,
        ..BreedingConfig::default()
    })
    .unwrap();
    let a = with_traits(
        adult("A", Species::Crystalites),
        &[("Glowing Eyes", Dominance::Dominant, Rarity::Common)],
    );
    let b = with_traits(
        adult("B", Species::Crystalites),
        &[("Night Vision", Dominance::Recessive, Rarity::Common)],
    );
    let forecast = system.predict_offspring(&a, &b);
    let mut rng = StdRng::seed_from_u64(31);
    let trials = 4000;
    let mut dominant = 0;
    let mut recessive = 0;
    for _ in 0..trials {
        let child = system.breed(&a, &b, &mut rng).unwrap();
        dominant += child.genetics.has_trait("Glowing Eyes") as usize;
        recessive += child.genetics.has_trait("Night Vision") as usize;
    }

    let expected_dom = forecast.probability_of("Glowing Eyes").unwrap();
    let expected_rec = forecast.probability_of("Night Vision").unwrap();
    assert_eq!(expected_dom, 0.5);
    assert_eq!(expected_rec, 0.25);
    assert!((dominant as f32 / trials as f32 - expected_dom).abs() < 0.04);
    assert!((recessive as f32 / trials as f32 - expected_rec).abs() < 0.04);
}

#[test]
fn observed_personality_inside_predicted_range() {
    let system = BreedingSystem::default();
    let (a, b) = blue_eyed_pair();
    let forecast = system.predict_offspring(&a, &b);
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..300 {
        let child = system.breed(&a, &b, &mut rng).unwrap();
        for &s in Slider::all() {
            assert!(forecast.personality_range.get(s).contains(child.personality.get(s)));
        }
    }
}
