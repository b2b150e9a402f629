//! Store configuration parameters.

/// Configuration for backing store allocation.
///
/// Validated at allocation time; all values are immutable once a store
/// has been created.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Largest byte length a single store may have.
    ///
    /// Default: `i32::MAX`, the largest byte offset compiled code can index.
    pub max_byte_length: usize,
}

impl StoreConfig {
    /// Default maximum byte length of a single store.
    pub const DEFAULT_MAX_BYTE_LENGTH: usize = i32::MAX as usize;

    /// Create a config with default limits.
    pub fn new() -> Self {
        Self {
            max_byte_length: Self::DEFAULT_MAX_BYTE_LENGTH,
        }
    }

    /// Override the maximum byte length.
    pub fn with_max_byte_length(mut self, max_byte_length: usize) -> Self {
        self.max_byte_length = max_byte_length;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_max_is_i32_max() {
        let config = StoreConfig::default();
        assert_eq!(config.max_byte_length, 2_147_483_647);
    }

    #[test]
    fn builder_overrides_limit() {
        let config = StoreConfig::new().with_max_byte_length(64);
        assert_eq!(config.max_byte_length, 64);
    }
}
