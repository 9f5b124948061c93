// ABOUTME: Coaching cue catalog and the seeded variety picker for cosmetic workout choices
// ABOUTME: Unseeded requests always take the first option, so output stays deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use swim_core::models::SectionKind;

/// Easy continuous swim that opens the warm-up
pub const WARM_SWIM_CUES: &[&str] = &[
    "easy swim, mixed strokes",
    "easy freestyle, long strokes",
    "easy swim, alternate free and back by length",
];

/// Short builds that close the warm-up
pub const WARM_BUILD_CUES: &[&str] = &[
    "build each length",
    "build to moderate, 10s rest",
    "odds easy, evens moderate",
];

/// Technique drills
pub const DRILL_CUES: &[&str] = &[
    "drill/swim by length: catch-up",
    "drill/swim by length: fingertip drag",
    "drill/swim by length: single arm",
    "drill/swim by length: 6-kick switch",
];

/// Kick sets
pub const KICK_CUES: &[&str] = &[
    "kick with board, moderate",
    "kick on side, streamline",
    "kick, fast last length",
];

/// Pull sets
pub const PULL_CUES: &[&str] = &[
    "pull with buoy, focus on catch",
    "pull, breathe every 3",
    "pull with paddles, strong and long",
];

/// Builds into the main set
pub const PRE_MAIN_CUES: &[&str] = &[
    "descend 1 to 4",
    "build to threshold effort",
    "odds easy, evens fast",
];

/// Primary main-set block
pub const MAIN_PRIMARY_CUES: &[&str] = &[
    "freestyle at threshold effort",
    "hold threshold pace, 15s rest",
    "strong aerobic, negative split each",
];

/// Faster secondary main-set block
pub const MAIN_SECONDARY_CUES: &[&str] = &[
    "fast, hold form",
    "fast with 20s rest",
    "sprint first length, easy after",
];

/// Cool-down
pub const COOL_CUES: &[&str] = &[
    "easy choice",
    "easy backstroke and freestyle",
    "easy swim, stretch out",
];

/// Cue list for sections that only use one list
#[must_use]
pub const fn cues_for(kind: SectionKind) -> &'static [&'static str] {
    match kind {
        SectionKind::Warm => WARM_SWIM_CUES,
        SectionKind::Drill => DRILL_CUES,
        SectionKind::Kick => KICK_CUES,
        SectionKind::Pull => PULL_CUES,
        SectionKind::PreMain => PRE_MAIN_CUES,
        SectionKind::Main => MAIN_PRIMARY_CUES,
        SectionKind::Cool => COOL_CUES,
    }
}

/// Source of cosmetic choices
///
/// The seed is the only randomness in the planner. Without one every pick
/// returns the first option.
#[derive(Debug, Clone)]
pub struct Variety {
    rng: Option<ChaCha8Rng>,
}

impl Variety {
    /// Deterministic picker, or a `ChaCha8` stream when seeded
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seed.map(ChaCha8Rng::seed_from_u64),
        }
    }

    /// Whether picks are randomized
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.rng.is_some()
    }

    /// Pick one option, or `fallback` if `options` is empty
    pub fn pick<T: Copy>(&mut self, options: &[T], fallback: T) -> T {
        let index = match self.rng.as_mut() {
            Some(rng) if !options.is_empty() => rng.gen_range(0..options.len()),
            _ => 0,
        };
        options.get(index).copied().unwrap_or(fallback)
    }

    /// Pick a coaching cue as an owned string
    pub fn cue(&mut self, cues: &[&str]) -> String {
        self.pick(cues, "").to_owned()
    }
}
