//! Serializable dither profiles.
//!
//! A profile is a flat TOML table; missing keys take their defaults:
//!
//! ```toml
//! brightness = 0.0
//! gamma = 1.0
//! contrast = 1.0
//! antialias = "prefilter"
//! color = "full16"
//! charset = "ascii"
//! algorithm = "fstein"
//! seed = 0
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::Dither;
use super::mode::{Algorithm, Antialias, Charset, ColorMode};
use crate::error::{Error, Result};

/// Quantization settings detached from any bitmap layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DitherSettings {
    pub brightness: f32,
    pub gamma: f32,
    pub contrast: f32,
    /// Mode identifiers, as accepted by the mode enums' `FromStr`.
    pub antialias: String,
    pub color: String,
    pub charset: String,
    pub algorithm: String,
    pub seed: u64,
}

impl Default for DitherSettings {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            gamma: 1.0,
            contrast: 1.0,
            antialias: Antialias::default().name().to_owned(),
            color: ColorMode::default().name().to_owned(),
            charset: Charset::default().name().to_owned(),
            algorithm: Algorithm::default().name().to_owned(),
            seed: 0,
        }
    }
}

impl DitherSettings {
    /// Parse a TOML profile.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Snapshot the settings of an existing ditherer.
    pub fn from_dither(dither: &Dither) -> Self {
        Self {
            brightness: dither.brightness(),
            gamma: dither.gamma(),
            contrast: dither.contrast(),
            antialias: dither.antialias().name().to_owned(),
            color: dither.color().name().to_owned(),
            charset: dither.charset().name().to_owned(),
            algorithm: dither.algorithm().name().to_owned(),
            seed: dither.seed(),
        }
    }

    /// Apply every setting to `dither`.
    ///
    /// All values are validated first; on error `dither` is unchanged.
    pub fn apply(&self, dither: &mut Dither) -> Result<()> {
        let antialias: Antialias = self.antialias.parse()?;
        let color: ColorMode = self.color.parse()?;
        let charset: Charset = self.charset.parse()?;
        let algorithm: Algorithm = self.algorithm.parse()?;
        if self.gamma == 0.0 || !self.gamma.is_finite() {
            return Err(Error::InvalidArgument(format!("gamma {}", self.gamma)));
        }

        dither.set_gamma(self.gamma)?;
        dither.set_brightness(self.brightness);
        dither.set_contrast(self.contrast);
        dither.set_antialias(antialias);
        dither.set_color(color);
        dither.set_charset(charset);
        dither.set_algorithm(algorithm);
        dither.set_seed(self.seed);
        debug!("applied dither profile {color}/{charset}/{algorithm}");
        Ok(())
    }
}
