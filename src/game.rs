//! Match state machine: ship placement for both players, then alternating
//! attacks until one fleet is destroyed.

use alloc::vec::Vec;
use core::fmt;

use crate::attack::{resolve_attack, AttackOutcome};
use crate::board::Board;
use crate::common::{Coordinate, GameError, Orientation};
use crate::config::GameConfig;
use crate::fleet::Fleet;
use crate::placement::validate_placement;
use crate::ship::{Ship, ShipId};

/// One of the two seats in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The given player is placing ships.
    Setup(PlayerId),
    /// The given player fires next.
    InPlay(PlayerId),
    /// The given player won. Terminal.
    Finished(PlayerId),
}

/// Something the output side should announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    Miss,
    Hit(ShipId),
    ShipSunk(ShipId),
    PlayerWins(PlayerId),
}

/// What happened on one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub attacker: PlayerId,
    pub target: Coordinate,
    pub outcome: AttackOutcome,
    pub events: Vec<GameEvent>,
}

/// Boards and fleet belonging to one player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlayerState {
    ocean: Board,
    tracking: Board,
    fleet: Fleet,
    placed: usize,
}

impl PlayerState {
    fn new(config: &GameConfig) -> Self {
        Self {
            ocean: Board::new(config.board_size()),
            tracking: Board::new(config.board_size()),
            fleet: Fleet::for_config(config),
            placed: 0,
        }
    }

    /// Own ships, as attacked by the opponent.
    pub fn ocean(&self) -> &Board {
        &self.ocean
    }

    /// Record of this player's shots at the opponent.
    pub fn tracking(&self) -> &Board {
        &self.tracking
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Number of ships already on the board.
    pub fn placed(&self) -> usize {
        self.placed
    }

    fn next_ship(&self) -> Option<&Ship> {
        self.fleet.ships().get(self.placed)
    }
}

/// A two-player match driven one action at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Match {
    config: GameConfig,
    players: [PlayerState; 2],
    phase: Phase,
}

impl Match {
    /// Start a match in setup, with player one placing first.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            players: [PlayerState::new(&config), PlayerState::new(&config)],
            phase: Phase::Setup(PlayerId::One),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    /// Player expected to act next, if any.
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Setup(p) | Phase::InPlay(p) => Some(p),
            Phase::Finished(_) => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Finished(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Ship the setup player must place next.
    pub fn pending_ship(&self) -> Option<&Ship> {
        match self.phase {
            Phase::Setup(p) => self.player(p).next_ship(),
            _ => None,
        }
    }

    /// Place the pending ship for the setup player.
    ///
    /// Returns the cells it now covers. Once player one's fleet is complete,
    /// player two places; once both are complete, player one fires first.
    pub fn place_ship(
        &mut self,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, GameError> {
        let player = match self.phase {
            Phase::Setup(p) => p,
            Phase::InPlay(_) => return Err(GameError::NotInSetup),
            Phase::Finished(_) => return Err(GameError::GameOver),
        };
        let state = &mut self.players[player.index()];
        let ship = *state.next_ship().ok_or(GameError::NotInSetup)?;
        let cells = validate_placement(&state.ocean, origin, ship.length(), orientation)?;
        state.ocean.place_ship(ship.id(), &cells);
        state.placed += 1;
        log::debug!(
            "{} placed {} (length {}) at {} {:?}",
            player,
            ship.id(),
            ship.length(),
            origin,
            orientation
        );

        if state.next_ship().is_none() {
            self.phase = match player {
                PlayerId::One => Phase::Setup(PlayerId::Two),
                PlayerId::Two => Phase::InPlay(PlayerId::One),
            };
            log::info!("{} finished placing ships", player);
        }
        Ok(cells)
    }

    /// Fire at `target` on the opponent's board for the active player.
    pub fn attack(&mut self, target: Coordinate) -> Result<TurnReport, GameError> {
        let attacker = match self.phase {
            Phase::InPlay(p) => p,
            Phase::Setup(_) => return Err(GameError::NotInPlay),
            Phase::Finished(_) => return Err(GameError::GameOver),
        };
        let defender = attacker.opponent();

        let [one, two] = &mut self.players;
        let (own, theirs) = match attacker {
            PlayerId::One => (one, two),
            PlayerId::Two => (two, one),
        };
        let outcome = resolve_attack(
            &mut theirs.ocean,
            &mut theirs.fleet,
            &mut own.tracking,
            target,
        )?;

        let events = if theirs.fleet.is_defeated() {
            self.phase = Phase::Finished(attacker);
            log::info!("{} sank the last ship of {}", attacker, defender);
            outcome.events_with_winner(attacker)
        } else {
            self.phase = Phase::InPlay(defender);
            outcome.events()
        };
        Ok(TurnReport {
            attacker,
            target,
            outcome,
            events,
        })
    }
}
