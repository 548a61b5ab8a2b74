//! Dice expressions in `NdS+B` notation.
use std::fmt;
use std::str::FromStr;

use rand::Rng;

/// A dice expression: `count` dice with `sides` faces plus a flat `bonus`.
///
/// Parsed from strings such as `"2d6+1"`, `"d10"` or a bare `"3"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Dice {
    pub count: u32,
    pub sides: u32,
    pub bonus: u32,
}

impl Dice {
    pub const D6: Dice = Dice::new(1, 6, 0);
    pub const D10: Dice = Dice::new(1, 10, 0);

    pub const fn new(count: u32, sides: u32, bonus: u32) -> Self {
        Self {
            count,
            sides,
            bonus,
        }
    }

    /// A constant value with no dice.
    pub const fn flat(bonus: u32) -> Self {
        Self::new(0, 1, bonus)
    }

    pub fn min(&self) -> u32 {
        self.count.saturating_add(self.bonus)
    }

    /// Highest possible roll, saturating at `u32::MAX`.
    pub fn max(&self) -> u32 {
        self.count
            .saturating_mul(self.sides)
            .saturating_add(self.bonus)
    }

    /// Rolls every die and adds the bonus.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        (0..self.count)
            .map(|_| rng.gen_range(1..=self.sides.max(1)))
            .fold(self.bonus, u32::saturating_add)
    }
}

/// Errors raised while parsing a [`Dice`] expression.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiceParseError {
    #[error("dice expression is empty")]
    Empty,

    #[error("invalid number {0:?} in dice expression")]
    InvalidNumber(String),

    #[error("dice need at least one side")]
    NoSides,

    #[error("dice expression {0:?} can roll more than {max}", max = u32::MAX)]
    TooLarge(String),
}

impl FromStr for Dice {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let (dice, bonus) = match s.split_once('+') {
            Some((dice, bonus)) => (dice.trim(), parse_number(bonus)?),
            None => (s, 0),
        };

        let too_large = || DiceParseError::TooLarge(s.to_owned());

        let Some((count, sides)) = dice.split_once(['d', 'D']) else {
            // Bare number, e.g. "3".
            let value = parse_number(dice)?
                .checked_add(bonus)
                .ok_or_else(too_large)?;
            return Ok(Self::flat(value));
        };

        let count = if count.trim().is_empty() {
            1
        } else {
            parse_number(count)?
        };
        let sides = parse_number(sides)?;
        if sides == 0 {
            return Err(DiceParseError::NoSides);
        }
        count
            .checked_mul(sides)
            .and_then(|max| max.checked_add(bonus))
            .ok_or_else(too_large)?;
        Ok(Self::new(count, sides, bonus))
    }
}

fn parse_number(text: &str) -> Result<u32, DiceParseError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| DiceParseError::InvalidNumber(text.to_owned()))
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 0 {
            return write!(f, "{}", self.bonus);
        }
        write!(f, "{}d{}", self.count, self.sides)?;
        if self.bonus > 0 {
            write!(f, "+{}", self.bonus)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Dice {
    type Error = DiceParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dice> for String {
    fn from(dice: Dice) -> Self {
        dice.to_string()
    }
}
