use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Goals for both sides of a match, or a predicted final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Which side a score favors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tendency {
    Home,
    Draw,
    Away,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Goal difference from the home team's perspective.
    pub fn difference(&self) -> i64 {
        i64::from(self.home) - i64::from(self.away)
    }

    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }

    pub fn tendency(&self) -> Tendency {
        match self.home.cmp(&self.away) {
            Ordering::Greater => Tendency::Home,
            Ordering::Equal => Tendency::Draw,
            Ordering::Less => Tendency::Away,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.home, self.away)
    }
}
