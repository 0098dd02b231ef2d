//! Configuration types for the engine and the runner.

use serde::{Deserialize, Serialize};

/// How a freshly constructed universe's cell buffer is filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum InitPattern {
    /// Every cell starts dead.
    Empty,
    /// Seeded pseudo-random fill; identical seed and density always produce
    /// the identical buffer.
    Random { seed: u64, density: f64 },
}

/// Universe construction parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// Width of the grid in cells
    pub width: u32,
    /// Height of the grid in cells
    pub height: u32,
    /// Initial cell pattern
    pub init: InitPattern,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            init: InitPattern::Random {
                seed: 0,
                density: 0.5,
            },
        }
    }
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Universe to construct
    pub universe: UniverseConfig,
    /// Number of generations to run
    pub generations: u64,
    /// Delay between generations (milliseconds)
    pub frame_interval_ms: u64,
    /// Print each generation to stdout
    pub render: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            universe: UniverseConfig::default(),
            generations: 1000,
            frame_interval_ms: 33,
            render: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let universe_config = UniverseConfig::default();
        assert_eq!(universe_config.width, 64);
        assert_eq!(universe_config.height, 64);

        let runner_config = RunnerConfig::default();
        assert_eq!(runner_config.generations, 1000);
        assert_eq!(runner_config.frame_interval_ms, 33);
        assert!(runner_config.render);
    }

    #[test]
    fn test_runner_config_serialization() {
        let config = RunnerConfig {
            universe: UniverseConfig {
                width: 8,
                height: 8,
                init: InitPattern::Empty,
            },
            generations: 10,
            frame_interval_ms: 0,
            render: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RunnerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.universe.width, 8);
        assert_eq!(deserialized.generations, 10);
        assert!(!deserialized.render);
    }
}
