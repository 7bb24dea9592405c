//! Output mode selection.

use std::fmt;

/// How the collected series are laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// One file, one row per heart-rate date with the HRV value alongside
    #[default]
    Merged,
    /// Two files, `rest_heart_rate.csv` and `hrv.csv`
    Split,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputMode::Merged => "merged",
            OutputMode::Split => "split",
        };
        write!(f, "{}", s)
    }
}
