use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::drill_engine::models::Prompt;

/// Return a uniformly shuffled copy of `prompts`. The input is left untouched.
pub fn shuffle<R: Rng>(prompts: &[Prompt], rng: &mut R) -> Vec<Prompt> {
    let mut deck = prompts.to_vec();

    // Fisher-Yates shuffle
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(i, j);
    }

    deck
}

/// Shuffle with a fresh `StdRng`: seeded when `seed` is given, entropy otherwise.
pub fn shuffle_seeded(prompts: &[Prompt], seed: Option<u64>) -> Vec<Prompt> {
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    shuffle(prompts, &mut rng)
}
