//! Menagerie Headless Breeding Harness
//!
//! Breeds a founder roster thousands of times and checks the statistical
//! behavior of the engine: eligibility, inheritance frequencies, mutation
//! rate, personality bounds, and lineage growth.
//! Runs entirely in-process — no storage, no UI.
//!
//! Usage:
//!   cargo run -p menagerie-simtest
//!   cargo run -p menagerie-simtest -- --verbose
//!   cargo run -p menagerie-simtest -- --seed 1234

use std::collections::{HashMap, HashSet};

use menagerie_logic::config::{validate_config, BreedingConfig};
use menagerie_logic::genetics::{GeneticProfile, GeneticTrait, MutationEffect, NOVEL_TRAIT_POOL};
use menagerie_logic::{
    BreedingError, BreedingSystem, CreatureRecord, LifeStage, PersonalityProfile, Slider, Species,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

// ── Founder roster ──────────────────────────────────────────────────────
const FOUNDERS_JSON: &str = include_str!("../data/founders.json");

const DEFAULT_SEED: u64 = 0x5EED;

/// Breeding trials per statistical sweep.
const TRIALS: usize = 4000;

#[derive(Debug, Deserialize)]
struct FounderSpec {
    name: String,
    species: Species,
    age_days: i64,
    health: f32,
    #[serde(default)]
    personality: Option<PersonalityProfile>,
    traits: Vec<GeneticTrait>,
}

impl FounderSpec {
    fn to_record(&self) -> CreatureRecord {
        let mut record = CreatureRecord::founder(self.name.clone(), self.species)
            .born_days_ago(self.age_days)
            .with_health(self.health)
            .with_genetics(GeneticProfile::new(0, self.traits.iter().cloned()));
        if let Some(p) = self.personality {
            record = record.with_personality(p);
        }
        record
    }
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let seed = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED);

    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    println!("=== Menagerie Breeding Harness (seed {}) ===\n", seed);
    log::info!("Harness starting with seed {}", seed);

    let mut results = Vec::new();

    // 1. Roster parse and coverage
    let founders = match load_founders(&mut results) {
        Some(f) => f,
        None => {
            report(&results, verbose);
            std::process::exit(1);
        }
    };

    // 2. Config validation
    results.extend(validate_configs(verbose));

    // 3. Pairwise eligibility matrix
    results.extend(validate_eligibility(&founders, verbose));

    // 4. Inheritance frequency vs prediction
    results.extend(validate_inheritance(&founders, seed, verbose));

    // 5. Mutation rate and novelty
    results.extend(validate_mutations(&founders, seed, verbose));

    // 6. Personality bounds
    results.extend(validate_personality(&founders, seed, verbose));

    // 7. Multi-generation lineage
    results.extend(validate_lineage(&founders, seed, verbose));

    if report(&results, verbose) > 0 {
        std::process::exit(1);
    }
}

/// Print the summary and return the number of failures.
fn report(results: &[TestResult], verbose: bool) -> usize {
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );
    failed
}

/// The first two breedable adults of `species` in roster order.
fn breeding_pair(
    founders: &[CreatureRecord],
    species: Species,
) -> Option<(&CreatureRecord, &CreatureRecord)> {
    let config = BreedingConfig::default();
    let mut adults = founders
        .iter()
        .filter(|c| c.species == species && c.can_breed(&config));
    Some((adults.next()?, adults.next()?))
}

// ── 1. Founder Roster ───────────────────────────────────────────────────

fn load_founders(results: &mut Vec<TestResult>) -> Option<Vec<CreatureRecord>> {
    println!("--- Founder Roster ---");

    let specs: Vec<FounderSpec> = match serde_json::from_str(FOUNDERS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "roster_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return None;
        }
    };
    let founders: Vec<CreatureRecord> = specs.iter().map(FounderSpec::to_record).collect();
    log::info!("Loaded {} founders from roster", founders.len());

    let names: HashSet<&str> = founders.iter().map(|c| c.name.as_str()).collect();
    results.push(TestResult {
        name: "roster_unique_names".into(),
        passed: names.len() == founders.len(),
        detail: format!("{} founders, {} unique names", founders.len(), names.len()),
    });

    let missing: Vec<&str> = Species::all()
        .iter()
        .filter(|&&s| breeding_pair(&founders, s).is_none())
        .map(|s| s.label())
        .collect();
    results.push(TestResult {
        name: "roster_breeding_pairs".into(),
        passed: missing.is_empty(),
        detail: if missing.is_empty() {
            "every species has a breedable pair".into()
        } else {
            format!("no breedable pair for {}", missing.join(", "))
        },
    });

    let stages: HashSet<LifeStage> = founders.iter().map(|c| c.life_stage).collect();
    results.push(TestResult {
        name: "roster_stage_coverage".into(),
        passed: stages.len() >= 3,
        detail: format!("{} distinct life stages", stages.len()),
    });

    Some(founders)
}

// ── 2. Config Validation ────────────────────────────────────────────────

fn validate_configs(verbose: bool) -> Vec<TestResult> {
    println!("--- Config Validation ---");
    let mut results = Vec::new();

    let default_errors = validate_config(&BreedingConfig::default());
    results.push(TestResult {
        name: "config_default_valid".into(),
        passed: default_errors.is_empty(),
        detail: format!("{} errors in default config", default_errors.len()),
    });

    let bad = BreedingConfig {
        mutation_chance: 1.5,
        min_breeding_health: -0.1,
        personality_jitter: 0.3,
        newborn_happiness_min: 0.5,
        ..BreedingConfig::default()
    };
    let errors = validate_config(&bad);
    if verbose {
        for e in &errors {
            println!("    rejected: {}", e);
        }
    }
    results.push(TestResult {
        name: "config_bad_values_caught".into(),
        passed: errors.len() >= 4,
        detail: format!("{} errors for a deliberately broken config", errors.len()),
    });

    let refused = BreedingSystem::new(bad.clone()).is_err();
    results.push(TestResult {
        name: "config_broken_system_refused".into(),
        passed: refused,
        detail: "BreedingSystem::new rejects the broken config".into(),
    });
    log::info!("Config sweep: {} errors reported for broken config", errors.len());

    results
}

// ── 3. Eligibility Matrix ───────────────────────────────────────────────

fn validate_eligibility(founders: &[CreatureRecord], verbose: bool) -> Vec<TestResult> {
    println!("--- Eligibility Matrix ---");
    let mut results = Vec::new();
    let system = BreedingSystem::default();
    let config = system.config().clone();
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);

    let mut mismatches = Vec::new();
    let mut outcomes: HashMap<&'static str, usize> = HashMap::new();
    for a in founders {
        for b in founders {
            let expected_ok = a.id != b.id
                && a.species == b.species
                && a.can_breed(&config)
                && b.can_breed(&config);
            let outcome = system.breed(a, b, &mut rng);
            let kind = match &outcome {
                Ok(_) => "ok",
                Err(BreedingError::SameParent) => "same_parent",
                Err(BreedingError::SpeciesMismatch) => "species",
                Err(BreedingError::WrongLifeStage(..)) => "stage",
                Err(BreedingError::InsufficientHealth(..)) => "health",
                Err(BreedingError::ParentNotReady(_)) => "not_ready",
            };
            *outcomes.entry(kind).or_default() += 1;
            log::trace!("{} x {} -> {}", a.name, b.name, kind);
            if outcome.is_ok() != expected_ok {
                mismatches.push(format!("{} x {} → {}", a.name, b.name, kind));
            }
        }
    }

    results.push(TestResult {
        name: "eligibility_matches_rules".into(),
        passed: mismatches.is_empty(),
        detail: if mismatches.is_empty() {
            format!("{} pairs agree with stage/health/species rules", founders.len().pow(2))
        } else {
            mismatches.join("; ")
        },
    });

    let every_kind = ["ok", "same_parent", "species", "stage", "health"]
        .iter()
        .all(|k| outcomes.contains_key(k));
    results.push(TestResult {
        name: "eligibility_outcome_coverage".into(),
        passed: every_kind,
        detail: format!("{:?}", outcomes),
    });

    if verbose {
        let mut kinds: Vec<_> = outcomes.iter().collect();
        kinds.sort();
        println!("  Pair outcomes:");
        for (kind, count) in kinds {
            println!("    {:12}: {}", kind, count);
        }
    }

    results
}

// ── 4. Inheritance Frequency ────────────────────────────────────────────

fn validate_inheritance(founders: &[CreatureRecord], seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Inheritance Frequency ---");
    let mut results = Vec::new();
    let system = match BreedingSystem::new(BreedingConfig {
        mutation_chance: 0.0,
        ..BreedingConfig::default()
    }) {
        Ok(system) => system,
        Err(errors) => {
            results.push(TestResult {
                name: "inheritance_config".into(),
                passed: false,
                detail: format!("mutation-free config rejected: {} errors", errors.len()),
            });
            return results;
        }
    };
    let mut rng = StdRng::seed_from_u64(seed);

    for &species in Species::all() {
        let Some((a, b)) = breeding_pair(founders, species) else {
            continue;
        };
        let forecast = system.predict_offspring(a, b);
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..TRIALS {
            if let Ok(child) = system.breed(a, b, &mut rng) {
                for t in child.genetics.traits() {
                    *counts.entry(t.name.clone()).or_default() += 1;
                }
            }
        }

        let mut worst = 0.0f32;
        for tp in &forecast.possible_traits {
            let seen = counts.get(&tp.genetic_trait.name).copied().unwrap_or(0);
            let observed = seen as f32 / TRIALS as f32;
            worst = worst.max((observed - tp.probability).abs());
            if verbose {
                println!(
                    "    {:12} {:22} predicted {:.2} observed {:.3}",
                    species.label(),
                    tp.genetic_trait.name,
                    tp.probability,
                    observed
                );
            }
        }

        log::debug!(
            "{} inheritance: {} x {} over {} trials, max deviation {:.3}",
            species.label(),
            a.name,
            b.name,
            TRIALS,
            worst
        );

        let unexpected: Vec<&String> = counts
            .keys()
            .filter(|name| forecast.probability_of(name).is_none())
            .collect();

        results.push(TestResult {
            name: format!("inheritance_{}", species.label().to_lowercase()),
            passed: worst < 0.04 && unexpected.is_empty(),
            detail: format!(
                "{} x {}: max deviation {:.3}, {} unexpected traits",
                a.name,
                b.name,
                worst,
                unexpected.len()
            ),
        });
    }

    results
}

// ── 5. Mutations ────────────────────────────────────────────────────────

fn validate_mutations(founders: &[CreatureRecord], seed: u64, _verbose: bool) -> Vec<TestResult> {
    println!("--- Mutations ---");
    let mut results = Vec::new();
    let system = BreedingSystem::default();
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    let Some((a, b)) = breeding_pair(founders, Species::Luminos) else {
        return results;
    };
    let forecast = system.predict_offspring(a, b);

    let mut mutated = 0;
    let mut effects: HashSet<MutationEffect> = HashSet::new();
    let mut foreign = Vec::new();
    for _ in 0..TRIALS {
        let Ok(child) = system.breed(a, b, &mut rng) else {
            continue;
        };
        if child.genetics.mutations.is_empty() {
            continue;
        }
        mutated += 1;
        effects.extend(child.genetics.mutations.iter().map(|m| m.effect));
        // Anything not predicted must have come from the novel pool.
        foreign.extend(
            child
                .genetics
                .traits()
                .iter()
                .filter(|t| forecast.probability_of(&t.name).is_none())
                .filter(|t| !NOVEL_TRAIT_POOL.iter().any(|(name, _, _)| *name == t.name))
                .map(|t| t.name.clone()),
        );
    }

    let rate = mutated as f32 / TRIALS as f32;
    log::debug!(
        "Mutation sweep: {} of {} offspring mutated, effects {:?}",
        mutated,
        TRIALS,
        effects
    );
    results.push(TestResult {
        name: "mutation_rate".into(),
        passed: (rate - forecast.mutation_chance).abs() < 0.015,
        detail: format!("observed {:.3}, predicted {:.3}", rate, forecast.mutation_chance),
    });

    results.push(TestResult {
        name: "mutation_effects_seen".into(),
        passed: effects.len() == 3,
        detail: format!("{} of 3 mutation effects observed", effects.len()),
    });

    results.push(TestResult {
        name: "mutation_novelty".into(),
        passed: foreign.is_empty(),
        detail: if foreign.is_empty() {
            "every unpredicted trait came from the novel pool".into()
        } else {
            format!("unexpected traits: {}", foreign.join(", "))
        },
    });

    results
}

// ── 6. Personality Bounds ───────────────────────────────────────────────

fn validate_personality(founders: &[CreatureRecord], seed: u64, _verbose: bool) -> Vec<TestResult> {
    println!("--- Personality Bounds ---");
    let mut results = Vec::new();
    let system = BreedingSystem::default();
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(2));

    let mut outside_range = 0;
    let mut outside_deviation = 0;
    let mut samples = 0;
    for &species in Species::all() {
        let Some((a, b)) = breeding_pair(founders, species) else {
            continue;
        };
        let forecast = system.predict_offspring(a, b);
        for _ in 0..TRIALS / 4 {
            let Ok(child) = system.breed(a, b, &mut rng) else {
                continue;
            };
            samples += 1;
            for &s in Slider::all() {
                let value = child.personality.get(s);
                let mean = (a.personality.get(s) + b.personality.get(s)) / 2.0;
                if !forecast.personality_range.get(s).contains(value) {
                    outside_range += 1;
                }
                if (value - mean).abs() > 0.3 {
                    outside_deviation += 1;
                }
            }
        }
    }

    log::debug!(
        "Personality sweep: {} offspring, {} out of range, {} beyond 0.3",
        samples,
        outside_range,
        outside_deviation
    );
    results.push(TestResult {
        name: "personality_within_prediction".into(),
        passed: outside_range == 0,
        detail: format!("{} of {} offspring outside predicted range", outside_range, samples),
    });
    results.push(TestResult {
        name: "personality_near_parent_mean".into(),
        passed: outside_deviation == 0,
        detail: format!("{} slider values deviate more than 0.3", outside_deviation),
    });

    results
}

// ── 7. Lineage ──────────────────────────────────────────────────────────

fn validate_lineage(founders: &[CreatureRecord], seed: u64, verbose: bool) -> Vec<TestResult> {
    println!("--- Lineage ---");
    let mut results = Vec::new();
    let system = BreedingSystem::default();
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(3));

    let Some((a, b)) = breeding_pair(founders, Species::Luminos) else {
        return results;
    };
    let shared: Vec<String> = a
        .genetics
        .traits()
        .iter()
        .filter(|t| b.genetics.has_trait(&t.name))
        .map(|t| t.name.clone())
        .collect();

    let mut pair = (a.clone(), b.clone());
    let mut generations_ok = true;
    let mut shared_kept = true;
    let mut ids = HashSet::new();
    for generation in 1..=6u32 {
        let mut grown = || -> Result<CreatureRecord, BreedingError> {
            let child = system.breed(&pair.0, &pair.1, &mut rng)?;
            Ok(child.born_days_ago(100))
        };
        let (c1, c2) = match (grown(), grown()) {
            (Ok(c1), Ok(c2)) => (c1, c2),
            (Err(e), _) | (_, Err(e)) => {
                results.push(TestResult {
                    name: "lineage_breeding".into(),
                    passed: false,
                    detail: format!("generation {} failed: {}", generation, e),
                });
                return results;
            }
        };
        generations_ok &=
            c1.genetics.generation == generation && c2.genetics.generation == generation;
        shared_kept &= shared
            .iter()
            .all(|n| c1.genetics.has_trait(n) && c2.genetics.has_trait(n));
        ids.insert(c1.id);
        ids.insert(c2.id);
        if verbose {
            println!(
                "    gen {}: {} [{}] x {} [{}]",
                generation,
                c1.name,
                c1.genetics.trait_names().join(", "),
                c2.name,
                c2.genetics.trait_names().join(", ")
            );
        }
        log::debug!("Lineage generation {} bred", generation);
        pair = (c1, c2);
    }

    results.push(TestResult {
        name: "lineage_generations".into(),
        passed: generations_ok,
        detail: "generation = max(parents) + 1 across 6 generations".into(),
    });
    results.push(TestResult {
        name: "lineage_shared_traits".into(),
        passed: shared_kept,
        detail: format!("shared founder traits kept: {}", shared.join(", ")),
    });
    results.push(TestResult {
        name: "lineage_unique_ids".into(),
        passed: ids.len() == 12,
        detail: format!("{} unique ids over 12 births", ids.len()),
    });

    results
}
