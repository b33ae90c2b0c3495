use crate::geometry::Facing;

/// One of the two combatants.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    P1,
    P2,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::P1, Side::P2];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// Player one starts on the left looking right.
    #[inline]
    pub const fn start_facing(self) -> Facing {
        match self {
            Side::P1 => Facing::Right,
            Side::P2 => Facing::Left,
        }
    }
}

/// Phase of the current round.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RoundPhase {
    /// Between rounds; the next tick starts an intro unless the match is over.
    #[default]
    Stopped,
    Intro,
    Fight,
    #[strum(serialize = "ko")]
    KO,
    End,
}
