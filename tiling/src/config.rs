use crate::error::{Error, Result};
use geometry::Bounds;
use serde::{Deserialize, Serialize};
use tile::Palette;

pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 1024;
pub const DEFAULT_SCALE: f64 = 64.;
pub const DEFAULT_MARGIN: f64 = 0.1;
pub const DEFAULT_MAX_DEPTH: usize = 64;

// Config carries everything the engine needs from the renderer side: the output extent and
// scale decide how far replication has to reach, margin is the gap left between tiles when
// outlines are produced and dual switches the output to the dual tiling.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub margin: f64,
    pub max_depth: usize,
    pub dual: bool,
    pub palette: Palette,
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Config> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!("extent must be positive, received {}x{}", self.width, self.height)))
        }
        if !(self.scale.is_finite() && self.scale > 0.) {
            return Err(Error::Config(format!("scale must be a positive number, received {}", self.scale)))
        }
        if !self.margin.is_finite() {
            return Err(Error::Config(format!("margin must be finite, received {}", self.margin)))
        }
        Ok(())
    }

    // viewport is the region of the plane, in polygon edge units, that the output covers
    pub fn viewport(&self) -> Bounds {
        Bounds::viewport(self.width as f64, self.height as f64, self.scale)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            margin: DEFAULT_MARGIN,
            max_depth: DEFAULT_MAX_DEPTH,
            dual: false,
            palette: Palette::default(),
        }
    }
}
