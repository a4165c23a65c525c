//! Pure helpers over an injected rng, so seeded sessions replay exactly.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Up to `amount` distinct items, in random order.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], amount: usize, rng: &mut R) -> Vec<T> {
    let mut picked: Vec<T> = items.choose_multiple(rng, amount).cloned().collect();
    // choose_multiple keeps no particular order
    picked.shuffle(rng);
    picked
}

pub fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}
