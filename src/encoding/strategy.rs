//! Choice between the two encodings

use crate::io::error::{TilingError, invalid_parameter};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// How geometric compatibility between placements is encoded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// Exclude placements whose footprints overlap
    #[default]
    Area,
    /// Require neighbouring vertices to agree on tile edges
    Border,
}

impl Strategy {
    /// Token used on the command line and in artifact names
    pub const fn name(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Border => "border",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = TilingError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "area" => Ok(Self::Area),
            "border" => Ok(Self::Border),
            _ => Err(invalid_parameter(
                "strategy",
                &token,
                &"must be either 'area' or 'border'",
            )),
        }
    }
}
