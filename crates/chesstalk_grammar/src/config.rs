//! Resolver configuration.

/// What to do with outcome warnings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WarningPolicy {
    /// Drop warnings.
    Ignore,
    /// Return warnings alongside the move.
    #[default]
    Collect,
    /// Fail on the first warning.
    Deny,
}

/// Configuration for a [`PhraseResolver`](crate::PhraseResolver).
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Warning handling.
    pub warnings: WarningPolicy,

    /// Whether phrases pass through the speech normalizer.
    pub normalize: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            warnings: WarningPolicy::Collect,
            normalize: true,
        }
    }
}

impl ResolverConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that fails on any warning.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            warnings: WarningPolicy::Deny,
            ..Self::default()
        }
    }

    /// Builder method to set the warning policy.
    #[must_use]
    pub fn with_warnings(mut self, policy: WarningPolicy) -> Self {
        self.warnings = policy;
        self
    }

    /// Builder method to set whether phrases are normalized.
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Builder method to skip speech normalization.
    #[must_use]
    pub fn without_normalization(self) -> Self {
        self.with_normalize(false)
    }
}
