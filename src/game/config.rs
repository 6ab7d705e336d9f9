//! Match configuration.

use crate::board::Color;

/// How the two players are given their colors at match creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorAssignment {
    /// Coin flip for the first player
    #[default]
    Random,
    /// The first player gets this color
    Fixed(Color),
}

/// Tunables for a [`Match`](super::Match).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    pub colors: ColorAssignment,
    /// Run the checkmate search after every checking move
    pub report_mate: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            colors: ColorAssignment::Random,
            report_mate: true,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub const fn with_colors(mut self, colors: ColorAssignment) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub const fn with_report_mate(mut self, report_mate: bool) -> Self {
        self.report_mate = report_mate;
        self
    }
}
