use crate::params::Params;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// When false, two names that match case-insensitively are rejected at
    /// construction. When true, lookups resolve to the first player.
    pub allow_duplicate_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_duplicate_names: Params::ALLOW_DUPLICATE_NAMES,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config that refuses duplicate player names
    pub fn strict() -> Self {
        Self {
            allow_duplicate_names: false,
        }
    }
}
