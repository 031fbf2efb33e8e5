//! Ambient canvas backgrounds.
//!
//! Two particle systems live here: [`CodeRain`] (falling code glyphs) and
//! [`ParticleField`] (drifting points linked by proximity). Both keep every
//! particle inside their [`Bounds`](crate::geometry::Bounds) no matter how
//! many steps run, and both are rebuilt from scratch on resize.

mod code_rain;
mod field;

pub use code_rain::{CodeRain, DEFAULT_GLYPHS, Glyph, GlyphKind, MAX_GLYPHS};
pub use field::{Link, MAX_PARTICLES, Particle, ParticleField, PointerLink};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Which animation the background canvas runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundMode {
    /// Falling code glyphs
    #[default]
    CodeRain,
    /// Small layered network with pulsing activations
    NeuralNetwork,
    /// Sine lanes carrying packets
    DataFlow,
}

impl BackgroundMode {
    /// Stable identifier used in config and CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CodeRain => "code-rain",
            Self::NeuralNetwork => "neural-network",
            Self::DataFlow => "data-flow",
        }
    }
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackgroundMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code-rain" | "rain" => Ok(Self::CodeRain),
            "neural-network" | "network" => Ok(Self::NeuralNetwork),
            "data-flow" | "flow" => Ok(Self::DataFlow),
            other => Err(Error::UnknownBackground(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_mode_round_trips_through_str() {
        for mode in [
            BackgroundMode::CodeRain,
            BackgroundMode::NeuralNetwork,
            BackgroundMode::DataFlow,
        ] {
            assert_eq!(mode.as_str().parse::<BackgroundMode>().unwrap(), mode);
        }
        assert!("plasma".parse::<BackgroundMode>().is_err());
    }
}
