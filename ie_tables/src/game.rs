use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::formation::{Formation, FormationKind};

/// Games that ship a formation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Bg1,
    Iwd,
    Iwd2,
    How,
    Pst,
    Bg2,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown game '{given}' (expected one of: bg1, iwd, iwd2, how, pst, bg2)")]
pub struct UnknownGame {
    pub given: String,
}

impl Game {
    pub const ALL: [Game; 6] = [
        Game::Bg1,
        Game::Iwd,
        Game::Iwd2,
        Game::How,
        Game::Pst,
        Game::Bg2,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Game::Bg1 => "bg1",
            Game::Iwd => "iwd",
            Game::Iwd2 => "iwd2",
            Game::How => "how",
            Game::Pst => "pst",
            Game::Bg2 => "bg2",
        }
    }

    /// Formation rows for this game, in table order. The engine looks rows up
    /// by index, so the order is part of the format.
    pub fn formations(self) -> Vec<Formation> {
        match self {
            Game::Bg1 | Game::Iwd | Game::Iwd2 | Game::How => CLASSIC_FORMATIONS.to_vec(),
            Game::Pst => {
                let mut rows = CLASSIC_FORMATIONS.to_vec();
                rows.push(Formation::new("NONE", FormationKind::None));
                rows
            }
            Game::Bg2 => BG2_FORMATIONS.to_vec(),
        }
    }
}

const CLASSIC_FORMATIONS: [Formation; 12] = [
    Formation::new("FOLLOW", FormationKind::Line),
    Formation::new("T", FormationKind::T),
    Formation::new("GATHER", FormationKind::Gather),
    Formation::new("4AND2", FormationKind::FourAndTwo),
    Formation::new("3BY2", FormationKind::ThreeByTwo),
    Formation::new("PROTECT", FormationKind::Protect),
    Formation::new("2BY3", FormationKind::TwoByThree),
    Formation::new("RANK", FormationKind::Rank),
    Formation::new("V", FormationKind::V),
    Formation::new("WEDGE", FormationKind::Wedge),
    Formation::new("S", FormationKind::S { bg2_style: false }),
    Formation::new("LINE", FormationKind::Line),
];

const BG2_FORMATIONS: [Formation; 12] = [
    Formation::new("FOLLOW", FormationKind::Line),
    Formation::new("T", FormationKind::T),
    Formation::new("GATHER", FormationKind::Gather),
    Formation::new("WAVYLINE", FormationKind::WavyLine),
    Formation::new("3BY2", FormationKind::ThreeByTwo),
    Formation::new("PROTECT", FormationKind::Protect),
    Formation::new("2BY3", FormationKind::TwoByThree),
    Formation::new("RANK", FormationKind::Rank),
    Formation::new("TRIANGLE", FormationKind::Triangle),
    Formation::new("WEDGE", FormationKind::Wedge),
    Formation::new("S", FormationKind::S { bg2_style: true }),
    Formation::new("LINE", FormationKind::Line),
];

impl FromStr for Game {
    type Err = UnknownGame;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Game::ALL
            .into_iter()
            .find(|game| game.id() == value)
            .ok_or_else(|| UnknownGame {
                given: value.to_string(),
            })
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
