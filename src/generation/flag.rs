//! National flags drawn at their official proportions
//!
//! Height is authoritative: when the requested width does not match the flag's
//! width-to-height ratio, the width is recomputed from the height.

use crate::generation::{PatternGenerator, WHITE, validate_dimension};
use crate::io::configuration::MAX_RASTER_DIMENSION;
use crate::io::error::{ProcessingError, Result, invalid_parameter, require_positive};
use crate::raster::Pixel;
use std::fmt;
use std::str::FromStr;

const FRANCE_BLUE: Pixel = [0, 85, 164];
const FRANCE_RED: Pixel = [239, 65, 53];
const GREECE_BLUE: Pixel = [13, 94, 175];
const SWISS_RED: Pixel = [213, 43, 30];

/// Greek flags are nine stripes tall
const GREECE_STRIPES: usize = 9;
/// Swiss cross geometry is laid out on a 32-unit grid
const SWISS_UNITS: usize = 32;

/// Supported flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// Vertical blue, white and red bands
    France,
    /// Blue and white stripes with a cross in the canton
    Greece,
    /// White cross on red, square
    Switzerland,
}

impl Country {
    /// Two-letter code used on the command line
    pub const fn code(self) -> &'static str {
        match self {
            Self::France => "FR",
            Self::Greece => "GR",
            Self::Switzerland => "CH",
        }
    }

    /// Width-to-height ratio
    pub const fn ratio(self) -> f64 {
        match self {
            Self::France | Self::Greece => 1.5,
            Self::Switzerland => 1.0,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "FR" => Ok(Self::France),
            "GR" => Ok(Self::Greece),
            "CH" => Ok(Self::Switzerland),
            _ => Err(invalid_parameter("country", &s, &"expected FR, GR or CH")),
        }
    }
}

/// Width matching `ratio`, keeping the requested width when it already does
///
/// # Errors
///
/// Returns an error if `ratio` is not a positive finite number or the
/// resulting width is zero or exceeds the allocation limit
pub fn proportional_width(height: usize, width: usize, ratio: f64) -> Result<usize> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(invalid_parameter("ratio", &ratio, &"must be positive"));
    }

    let adjusted = if (width as f64 / height as f64 - ratio).abs() <= f64::EPSILON {
        width
    } else {
        (height as f64 * ratio).round() as usize
    };
    if adjusted == 0 || adjusted > MAX_RASTER_DIMENSION {
        return Err(invalid_parameter(
            "width",
            &adjusted,
            &format!("height {height} at ratio {ratio} gives an unusable width"),
        ));
    }
    Ok(adjusted)
}

/// A flag generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag {
    country: Country,
    height: usize,
    width: usize,
}

impl Flag {
    /// Create a flag, recomputing the width from the height when out of proportion
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The height or requested width is non-positive
    /// - The height or the proportional width is too large
    /// - A Greek flag is shorter than its nine stripes
    pub fn new(country: Country, height: i64, width: i64) -> Result<Self> {
        let height = validate_dimension("height", height)?;
        // Only the sign matters; the size limit applies to the corrected width
        let requested_width = require_positive("width", width)?;

        if country == Country::Greece && height < GREECE_STRIPES {
            return Err(invalid_parameter(
                "height",
                &height,
                &format!("a Greek flag needs at least {GREECE_STRIPES} rows"),
            ));
        }

        let width = proportional_width(height, requested_width, country.ratio())?;

        Ok(Self {
            country,
            height,
            width,
        })
    }

    /// Which flag this draws
    pub const fn country(&self) -> Country {
        self.country
    }

    fn france(&self, col: usize) -> Pixel {
        let band = self.width / 3;
        if col < band {
            FRANCE_BLUE
        } else if col < band * 2 {
            WHITE
        } else {
            FRANCE_RED
        }
    }

    fn greece(&self, row: usize, col: usize) -> Pixel {
        let stripe = self.height / GREECE_STRIPES;
        let canton = stripe * 5;

        if row < canton && col < canton {
            if row / stripe == 2 || col / stripe == 2 {
                WHITE
            } else {
                GREECE_BLUE
            }
        } else if (row / stripe) % 2 == 0 {
            GREECE_BLUE
        } else {
            WHITE
        }
    }

    fn switzerland(&self, row: usize, col: usize) -> Pixel {
        let unit = self.height / SWISS_UNITS;
        let long_arm = |v: usize| 6 * unit < v && v < 26 * unit;
        let short_arm = |v: usize| 13 * unit < v && v < 19 * unit;

        if (long_arm(row) && short_arm(col)) || (long_arm(col) && short_arm(row)) {
            WHITE
        } else {
            SWISS_RED
        }
    }
}

impl PatternGenerator for Flag {
    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn color(&self, row: usize, col: usize) -> Pixel {
        match self.country {
            Country::France => self.france(col),
            Country::Greece => self.greece(row, col),
            Country::Switzerland => self.switzerland(row, col),
        }
    }
}
