use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;
use crate::render::DEFAULT_PRECISION;

/// Environment variable holding the `env_logger` filter for `mana-calc`.
pub const LOG_ENV: &str = "MANA_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Operand shape as typed on the command line, `ROWSxCOLS`.
///
/// Parsing only checks the syntax; the size bounds are enforced when the
/// matrix is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl FromStr for Shape {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MatrixError::InvalidShape(s.to_string());
        let (rows, cols) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(invalid)?;

        Ok(Shape {
            rows: rows.trim().parse().map_err(|_| invalid())?,
            cols: cols.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Settings shared by every calculator subcommand.
#[derive(Debug, Clone)]
pub struct CalcConfig {
    pub precision: usize,
    /// Skip the `r1c1: ` prompts, for piped input.
    pub quiet: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            quiet: false,
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_str() {
        assert_eq!(Shape::from_str("3x4").unwrap(), Shape { rows: 3, cols: 4 });
        assert_eq!(" 12X1 ".parse::<Shape>().unwrap(), Shape { rows: 12, cols: 1 });
        assert_eq!(Shape { rows: 2, cols: 5 }.to_string(), "2x5");

        for bad in ["", "3", "3x", "x4", "3*4", "-1x2", "ax2"] {
            assert!(
                matches!(Shape::from_str(bad), Err(MatrixError::InvalidShape(_))),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_shape_does_not_check_bounds() {
        // 0x20 is syntactically fine, create() rejects it later
        assert_eq!(Shape::from_str("0x20").unwrap(), Shape { rows: 0, cols: 20 });
    }

    #[test]
    fn test_default_config() {
        let config = CalcConfig::default();
        assert_eq!(config.precision, 6);
        assert!(!config.quiet);
    }
}
