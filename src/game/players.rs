//! Player identities and their colors.

use rand::Rng;

use super::config::ColorAssignment;
use crate::board::Color;

/// The two participants of a match and the color each one plays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Players {
    first: String,
    second: String,
    first_color: Color,
}

impl Players {
    /// Pair two players, deciding colors per `assignment`.
    pub fn assign<R: Rng + ?Sized>(
        first: impl Into<String>,
        second: impl Into<String>,
        assignment: ColorAssignment,
        rng: &mut R,
    ) -> Self {
        let first_color = match assignment {
            ColorAssignment::Fixed(color) => color,
            ColorAssignment::Random if rng.gen_bool(0.5) => Color::White,
            ColorAssignment::Random => Color::Black,
        };
        Players {
            first: first.into(),
            second: second.into(),
            first_color,
        }
    }

    /// Placeholder identities, first player White.
    #[must_use]
    pub fn anonymous() -> Self {
        Players {
            first: "white".to_string(),
            second: "black".to_string(),
            first_color: Color::White,
        }
    }

    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &str {
        &self.second
    }

    #[must_use]
    pub const fn first_color(&self) -> Color {
        self.first_color
    }

    #[must_use]
    pub const fn second_color(&self) -> Color {
        self.first_color.opponent()
    }

    /// Color played by `id`, if it names one of the two players.
    #[must_use]
    pub fn color_of(&self, id: &str) -> Option<Color> {
        if id == self.first {
            Some(self.first_color)
        } else if id == self.second {
            Some(self.second_color())
        } else {
            None
        }
    }

    /// Identity of the player holding `color`.
    #[must_use]
    pub fn player(&self, color: Color) -> &str {
        if color == self.first_color {
            &self.first
        } else {
            &self.second
        }
    }
}
