//! Application Configuration
//!
//! Authorization policy for the blog application layer.

/// Blog application configuration
///
/// Both flags default to enforced. `permissive()` keeps the historical open
/// behavior for deployments that relied on it: any authenticated user may
/// read any post and delete any post by id.
#[derive(Debug, Clone)]
pub struct BlogConfig {
    /// Only the owner may delete a post
    pub enforce_post_ownership: bool,
    /// Private posts behave as absent for everyone but the owner
    pub enforce_post_visibility: bool,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            enforce_post_ownership: true,
            enforce_post_visibility: true,
        }
    }
}

impl BlogConfig {
    /// Open policy: no ownership or visibility enforcement
    pub fn permissive() -> Self {
        Self {
            enforce_post_ownership: false,
            enforce_post_visibility: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enforces_both() {
        let config = BlogConfig::default();
        assert!(config.enforce_post_ownership);
        assert!(config.enforce_post_visibility);
    }

    #[test]
    fn test_permissive_enforces_neither() {
        let config = BlogConfig::permissive();
        assert!(!config.enforce_post_ownership);
        assert!(!config.enforce_post_visibility);
    }
}
