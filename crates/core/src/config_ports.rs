//! Port interface for configuration persistence

use cfkit_domain::{Configuration, Result};

/// Reads and writes the persisted client configuration
///
/// Calls are synchronous: the store is a small local file and every caller
/// already holds a consistent snapshot to write.
pub trait ConfigRepository: Send + Sync {
    /// Load the configuration, returning defaults when none was saved yet
    fn load(&self) -> Result<Configuration>;

    /// Persist `config`, replacing whatever was stored
    fn save(&self, config: &Configuration) -> Result<()>;

    /// Forget tokens and targeted org/space, keeping the endpoint
    fn clear_session(&self) -> Result<()> {
        let mut config = self.load()?;
        config.clear_session();
        self.save(&config)
    }
}
