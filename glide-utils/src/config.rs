// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use serde::Deserialize;

/// Tool configuration.
///
/// Defaults follow the interactive tool: full speed between 25% and 75% of
/// the travelled distance, at least 40% of the target speed throughout, and
/// a 60 Hz output rate.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target speed in units per second.
    pub speed: f64,
    /// Lower threshold as percentage of the sample count.
    pub lower_threshold: u8,
    /// Upper threshold as percentage of the sample count.
    pub upper_threshold: u8,
    /// Minimum speed as percentage of the target speed.
    pub min_speed: u8,
    /// Output rate in ticks per second.
    pub rate: u32,
    /// Virtual screen used by the simulator.
    pub screen: Screen,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Screen {
    /// Screen width in units.
    pub width: u32,
    /// Screen height in units.
    pub height: u32,
    /// Margin kept free around the screen edges.
    pub margin: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: 1_000.0,
            lower_threshold: 25,
            upper_threshold: 75,
            min_speed: 40,
            rate: 60,
            screen: Screen::default(),
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: 3_440,
            height: 1_440,
            margin: 200,
        }
    }
}

impl Config {
    /// Load the configuration from a TOML file.
    pub fn try_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str("speed = 500.0\nrate = 30\n").unwrap();

        assert_eq!(config.speed, 500.0);
        assert_eq!(config.rate, 30);
        assert_eq!(config.lower_threshold, 25);
        assert_eq!(config.upper_threshold, 75);
        assert_eq!(config.min_speed, 40);
        assert_eq!(config.screen.width, 3_440);
    }
}
