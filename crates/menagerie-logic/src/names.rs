//! Name generation for newborn creatures.

use rand::Rng;

use crate::species::Species;

/// Generate a display name: a species-flavored prefix joined to a common
/// ending, e.g. "Glimmerpip" or "Mossbun".
pub fn generate_name(species: Species, rng: &mut impl Rng) -> String {
    let prefixes = species_prefixes(species);
    let prefix = prefixes[rng.gen_range(0..prefixes.len())];
    let suffix = SUFFIXES[rng.gen_range(0..SUFFIXES.len())];
    format!("{}{}", prefix, suffix)
}

fn species_prefixes(species: Species) -> &'static [&'static str] {
    match species {
        Species::Luminos => LUMINOS_PREFIXES,
        Species::Fluffkins => FLUFFKINS_PREFIXES,
        Species::Crystalites => CRYSTALITE_PREFIXES,
        Species::Aquarians => AQUARIAN_PREFIXES,
        Species::Shadowlings => SHADOWLING_PREFIXES,
    }
}

static LUMINOS_PREFIXES: &[&str] = &[
    "Glimmer", "Spark", "Flick", "Shine", "Dawn", "Beam", "Glow", "Flare",
];

static FLUFFKINS_PREFIXES: &[&str] = &[
    "Fluff", "Moss", "Puff", "Cotton", "Snug", "Wool", "Downy", "Tuft",
];

static CRYSTALITE_PREFIXES: &[&str] = &[
    "Prism", "Quartz", "Facet", "Shard", "Geode", "Opal", "Gleam", "Rime",
];

static AQUARIAN_PREFIXES: &[&str] = &[
    "Ripple", "Tide", "Drift", "Brook", "Coral", "Misty", "Kelp", "Swirl",
];

static SHADOWLING_PREFIXES: &[&str] = &[
    "Umber", "Dusk", "Hush", "Murk", "Shade", "Gloam", "Wisp", "Soot",
];

static SUFFIXES: &[&str] = &[
    "pip", "bun", "let", "kin", "ling", "by", "o", "ette", "wick", "paw", "ie", "nook",
];
