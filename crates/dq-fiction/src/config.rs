//! Configuration for an exploration session.

/// Configuration for an exploration session.
#[derive(Debug, Clone)]
pub struct ExplorationConfig {
    /// Print the welcome banner before the first turn.
    pub show_banner: bool,
    /// Name of the room to start in. `None` starts at the mansion entrance.
    pub start_room: Option<String>,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            start_room: None,
        }
    }
}

impl ExplorationConfig {
    /// Show or hide the welcome banner.
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Start exploring from the named room.
    pub fn with_start_room(mut self, name: impl Into<String>) -> Self {
        self.start_room = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ExplorationConfig::default();
        assert!(cfg.show_banner);
        assert!(cfg.start_room.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = ExplorationConfig::default()
            .with_banner(false)
            .with_start_room("Biblioteca");
        assert!(!cfg.show_banner);
        assert_eq!(cfg.start_room.as_deref(), Some("Biblioteca"));
    }
}
