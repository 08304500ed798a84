use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::Mutex;

/// A fuzzer for generating random codec inputs.
///
/// Uses the xoshiro256** PRNG for reproducible random sequences when seeded.
///
/// # Examples
///
/// ```
/// use base_endecoder_util::fuzzer::Fuzzer;
///
/// let fuzzer = Fuzzer::new(Some([7; 32]));
///
/// let blob = fuzzer.random_blob(100);
/// assert!(blob.len() <= 100);
///
/// let charset = fuzzer.random_charset(16);
/// assert_eq!(charset.chars().count(), 16);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Mutex<Xoshiro256StarStar>,
}

/// Symbols `random_charset` draws from: printable ASCII, Latin-1 letters,
/// Greek capitals and hiragana. `=` is left out so it stays free for padding.
fn symbol_pool() -> Vec<char> {
    ('!'..='~')
        .chain('À'..='ÿ')
        .chain('Α'..='Ω')
        .chain('ぁ'..='ゖ')
        .filter(|&c| c != '=')
        .collect()
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Mutex::new(Xoshiro256StarStar::from_seed(seed)),
        }
    }

    /// Largest length `random_charset` supports.
    pub fn max_charset_len() -> usize {
        symbol_pool().len()
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: u64, max: u64) -> u64 {
        let mut rng = self.rng.lock().unwrap();
        rng.gen_range(min..=max)
    }

    /// Generate a random byte array of the specified length.
    pub fn random_bytes(&self, len: usize) -> Vec<u8> {
        let mut rng = self.rng.lock().unwrap();
        let mut bytes = vec![0u8; len];
        rng.fill_bytes(&mut bytes);
        bytes
    }

    /// Generate random bytes of a random length in [0, max_len].
    pub fn random_blob(&self, max_len: usize) -> Vec<u8> {
        let len = self.random_int(0, max_len as u64) as usize;
        self.random_bytes(len)
    }

    /// Generate a charset of `len` distinct symbols in random order.
    ///
    /// Panics if `len` exceeds [`Fuzzer::max_charset_len`].
    pub fn random_charset(&self, len: usize) -> String {
        let mut pool = symbol_pool();
        assert!(len <= pool.len(), "charset length {len} exceeds the symbol pool");
        let mut rng = self.rng.lock().unwrap();
        pool.shuffle(&mut *rng);
        pool.into_iter().take(len).collect()
    }

    /// Generate a charset whose length is a random power of two in
    /// [2, 2^max_bits].
    pub fn random_power_of_two_charset(&self, max_bits: u32) -> String {
        let bits = self.random_int(1, u64::from(max_bits)) as u32;
        self.random_charset(1 << bits)
    }
}
