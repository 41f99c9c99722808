use crate::status::{Result, Status};

/// Smallest entropy pool accepted by a SeedSequence, in 32-bit words.
pub const DEFAULT_POOL_SIZE: usize = 4;

/// Options to control how a seed is expanded into generator state
/// (passed to SeedSequence::new).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Number of 32-bit words in the mixed entropy pool.  Changing this
    /// changes every value drawn from the resulting generator.
    /// Default: 4
    pub pool_size: usize,

    /// Identifies a child stream derived from the same run entropy.
    /// Each element is folded into the pool as its own 32-bit words,
    /// after the run entropy has been zero-padded to the pool size.
    /// Default: empty
    pub spawn_key: Vec<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            spawn_key: Vec::new(),
        }
    }
}

impl Options {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.pool_size < DEFAULT_POOL_SIZE {
            return Err(Status::invalid_argument(
                "pool_size must be at least 4", &self.pool_size.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_test() {
        let opts = Options::default();
        assert_eq!(4, opts.pool_size);
        assert!(opts.spawn_key.is_empty());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn small_pool_rejected_test() {
        let opts = Options { pool_size: 3, ..Options::default() };
        let err = opts.validate().unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
