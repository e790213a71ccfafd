use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use rand::prelude::*;
use rand::rngs::OsRng;
#[allow(deprecated)]
use zipf::ZipfDistribution;

/// Seed for every generated pattern of this process. Set `OVERRIDE_SEED` to replay a failure.
pub fn random_init_seed() -> u64 {
    *SEED_VALUE
}

static SEED_VALUE: Lazy<u64> = Lazy::new(|| {
    let seed = env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen());
    eprintln!("Seed: {seed}");
    seed
});

/// Stream for key patterns. Same seed and length give the same stream.
pub(crate) fn new_seeded_rng(len: usize) -> StdRng {
    new_salted_rng(len, 0)
}

/// Like [`new_seeded_rng`], but streams with different `salt` are unrelated, so keys and node
/// placement of one list do not follow each other.
pub(crate) fn new_salted_rng(len: usize, salt: u64) -> StdRng {
    let salt = salt.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    StdRng::seed_from_u64(random_init_seed() ^ (len as u64).rotate_left(17) ^ salt)
}

pub fn random(len: usize) -> Vec<u64> {
    //     .
    // : . : :
    // :.:::.::
    let mut rng = new_seeded_rng(len);
    (0..len).map(|_| rng.gen::<u64>()).collect()
}

/// Keys drawn uniformly from `range`. Small ranges produce many equal keys.
pub fn random_uniform(len: usize, range: RangeInclusive<u64>) -> Vec<u64> {
    let mut rng = new_seeded_rng(len);
    let dist = rand::distributions::Uniform::new_inclusive(range.start(), range.end());
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Keys in `0..=sqrt(len)`, so most keys occur several times.
pub fn random_dense(len: usize) -> Vec<u64> {
    let max = (len as f64).sqrt() as u64;
    random_uniform(len, 0..=max)
}

#[allow(deprecated)]
pub fn random_zipf(len: usize, exponent: f64) -> Vec<u64> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_seeded_rng(len);
    let Ok(dist) = ZipfDistribution::new(len.max(1), exponent) else {
        panic!("invalid zipf exponent {exponent}");
    };
    (0..len).map(|_| dist.sample(&mut rng) as u64).collect()
}

pub fn random_zipf_1(len: usize) -> Vec<u64> {
    random_zipf(len, 1.0)
}

/// Keys from the operating system's cryptographically secure generator. Not reproducible.
pub fn random_crypto(len: usize) -> Vec<u64> {
    (0..len).map(|_| OsRng.gen::<u64>()).collect()
}

pub fn all_equal(len: usize) -> Vec<u64> {
    // ......
    // ::::::
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<u64> {
    //     .:
    //   .:::
    // .:::::
    (0..len as u64).collect()
}

pub fn descending(len: usize) -> Vec<u64> {
    // :.
    // :::.
    // :::::.
    (0..len as u64).rev().collect()
}

/// Ascending and descending runs of random length, with random keys inside each run.
pub fn saw_mixed(len: usize) -> Vec<u64> {
    //   :.  :.    .::.    .:
    // .:::.:::..::::::..:::
    let mut rng = new_seeded_rng(len);
    let mut keys = random(len);
    let mut start = 0;
    while start < len {
        let end = (start + rng.gen_range(1..=20usize.max(len / 8))).min(len);
        let run = &mut keys[start..end];
        if rng.gen::<bool>() {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
        start = end;
    }
    keys
}

/// Ascending except for the last key, which is the smallest.
pub fn ascending_then_min(len: usize) -> Vec<u64> {
    let mut keys: Vec<u64> = (1..=len as u64).collect();
    if let Some(last) = keys.last_mut() {
        *last = 0;
    }
    keys
}
