//! Seed expansion.
//!
//! An arbitrary-precision non-negative seed is split into 32-bit words,
//! hashed into a small entropy pool, and the pool is mixed so that every
//! input bit affects every pool word.  Output words are then drawn from
//! the pool through a second hash.  The multipliers and shift below are
//! fixed by the reference algorithm; changing any of them still yields a
//! good-looking generator that no longer reproduces reference streams.

use std::str::FromStr;

use log::debug;

use crate::options::{Options, DEFAULT_POOL_SIZE};
use crate::status::{Result, Status};

static INIT_A: u32 = 0x43b0_d7e5;
static MULT_A: u32 = 0x931e_8875;
static INIT_B: u32 = 0x8b51_f9dd;
static MULT_B: u32 = 0x58f3_8ded;
static MIX_MULT_L: u32 = 0xca01_f9dd;
static MIX_MULT_R: u32 = 0x4973_f715;
static XSHIFT: u32 = 16;

/// A non-negative integer of any size, held as little-endian 32-bit words.
///
/// The representation is minimal: no trailing zero words, except that
/// zero itself is the single word `[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entropy {
    words: Vec<u32>,
}

impl Entropy {
    /// Interpret `words` as a little-endian integer.
    pub fn from_words(mut words: Vec<u32>) -> Self {
        while words.len() > 1 && words[words.len() - 1] == 0 {
            words.pop();
        }
        if words.is_empty() {
            words.push(0);
        }
        Self { words }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }
}

fn u64_words(v: u64) -> Vec<u32> {
    vec![v as u32, (v >> 32) as u32]
}

impl From<u32> for Entropy {
    fn from(v: u32) -> Self {
        Self { words: vec![v] }
    }
}

impl From<u64> for Entropy {
    fn from(v: u64) -> Self {
        Self::from_words(u64_words(v))
    }
}

impl From<u128> for Entropy {
    fn from(v: u128) -> Self {
        Self::from_words(vec![v as u32, (v >> 32) as u32, (v >> 64) as u32, (v >> 96) as u32])
    }
}

impl TryFrom<i64> for Entropy {
    type Error = Status;

    fn try_from(v: i64) -> Result<Self> {
        if v < 0 {
            return Err(Status::invalid_argument("seed must be non-negative", &v.to_string()));
        }
        Ok(Self::from(v as u64))
    }
}

impl FromStr for Entropy {
    type Err = Status;

    /// Parse a base-10 integer of any length.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(Status::invalid_argument("seed must be non-negative", s));
        }
        let digits = s.strip_prefix('+').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Status::invalid_argument("malformed seed", s));
        }

        let mut words = vec![0u32];
        for b in digits.bytes() {
            let mut carry = (b - b'0') as u64;
            for w in words.iter_mut() {
                let v = (*w as u64) * 10 + carry;
                *w = v as u32;
                carry = v >> 32;
            }
            if carry != 0 {
                words.push(carry as u32);
            }
        }
        Ok(Self::from_words(words))
    }
}

/// Hash one word into the pool, advancing the running hash constant.
#[inline]
fn hashmix(value: u32, hash_const: &mut u32) -> u32 {
    let mut value = value ^ *hash_const;
    *hash_const = hash_const.wrapping_mul(MULT_A);
    value = value.wrapping_mul(*hash_const);
    value ^ (value >> XSHIFT)
}

#[inline]
fn mix(x: u32, y: u32) -> u32 {
    let result = MIX_MULT_L.wrapping_mul(x).wrapping_sub(MIX_MULT_R.wrapping_mul(y));
    result ^ (result >> XSHIFT)
}

/// Deterministic source of well-mixed 32-bit words derived from an
/// entropy value and an optional spawn key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSequence {
    entropy: Entropy,
    spawn_key: Vec<u64>,
    pool: Vec<u32>,
    n_children_spawned: u64,
}

impl SeedSequence {
    pub fn new(entropy: Entropy, options: &Options) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(entropy, options.spawn_key.clone(), options.pool_size))
    }

    /// A sequence with the default pool and no spawn key.
    pub fn with_defaults(entropy: Entropy) -> Self {
        Self::build(entropy, Vec::new(), DEFAULT_POOL_SIZE)
    }

    fn build(entropy: Entropy, spawn_key: Vec<u64>, pool_size: usize) -> Self {
        let assembled = Self::assemble(&entropy, &spawn_key, pool_size);
        debug!("mixing {} entropy words into a pool of {}", assembled.len(), pool_size);
        let pool = Self::mix_entropy(&assembled, pool_size);
        Self { entropy, spawn_key, pool, n_children_spawned: 0 }
    }

    /// Run entropy followed by the spawn key words.  With a spawn key
    /// present, run entropy is zero-padded to the pool size so that a
    /// short seed with a key never collides with a longer seed without.
    fn assemble(entropy: &Entropy, spawn_key: &[u64], pool_size: usize) -> Vec<u32> {
        let mut words = entropy.words().to_vec();
        if !spawn_key.is_empty() && words.len() < pool_size {
            words.resize(pool_size, 0);
        }
        for k in spawn_key {
            words.extend(Entropy::from(*k).words());
        }
        words
    }

    fn mix_entropy(entropy: &[u32], pool_size: usize) -> Vec<u32> {
        let mut hash_const = INIT_A;
        let mut pool = vec![0u32; pool_size];

        // Add in the entropy up to the pool size; past the end of the
        // entropy keep running the hash on zeros.
        for (i, slot) in pool.iter_mut().enumerate() {
            let word = entropy.get(i).copied().unwrap_or(0);
            *slot = hashmix(word, &mut hash_const);
        }

        // Mix all bits together so late bits can affect earlier bits.
        for i_src in 0..pool_size {
            for i_dst in 0..pool_size {
                if i_src != i_dst {
                    let h = hashmix(pool[i_src], &mut hash_const);
                    pool[i_dst] = mix(pool[i_dst], h);
                }
            }
        }

        // Fold any remaining entropy into every pool word.
        for &word in entropy.iter().skip(pool_size) {
            for slot in pool.iter_mut() {
                *slot = mix(*slot, hashmix(word, &mut hash_const));
            }
        }
        pool
    }

    pub fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    pub fn spawn_key(&self) -> &[u64] {
        &self.spawn_key
    }

    pub fn pool(&self) -> &[u32] {
        &self.pool
    }

    pub fn n_children_spawned(&self) -> u64 {
        self.n_children_spawned
    }

    /// Draw `n_words` 32-bit words, cycling over the pool.
    pub fn generate_state_u32(&self, n_words: usize) -> Vec<u32> {
        let mut hash_const = INIT_B;
        self.pool
            .iter()
            .cycle()
            .take(n_words)
            .map(|&word| {
                let mut v = word ^ hash_const;
                hash_const = hash_const.wrapping_mul(MULT_B);
                v = v.wrapping_mul(hash_const);
                v ^ (v >> XSHIFT)
            })
            .collect()
    }

    /// Draw `n_words` 64-bit words.  Each is assembled from two
    /// consecutive 32-bit words, the first one as the low half.
    pub fn generate_state_u64(&self, n_words: usize) -> Vec<u64> {
        self.generate_state_u32(n_words * 2)
            .chunks_exact(2)
            .map(|pair| (pair[0] as u64) | ((pair[1] as u64) << 32))
            .collect()
    }

    /// Derive `n_children` independent sequences.  Child keys extend this
    /// sequence's spawn key with a running index, so later calls never
    /// hand out a key that an earlier call already did.
    pub fn spawn(&mut self, n_children: u64) -> Vec<SeedSequence> {
        let start = self.n_children_spawned;
        let children = (start..start + n_children)
            .map(|i| {
                let mut key = self.spawn_key.clone();
                key.push(i);
                Self::build(self.entropy.clone(), key, self.pool.len())
            })
            .collect();
        self.n_children_spawned += n_children;
        children
    }
}

/// Expand `seed` with default options into
/// `(state_high, state_low, inc_high, inc_low)`.
pub fn generate_state(seed: &Entropy) -> (u64, u64, u64, u64) {
    let w = SeedSequence::with_defaults(seed.clone()).generate_state_u64(4);
    (w[0], w[1], w[2], w[3])
}
