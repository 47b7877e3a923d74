use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coordinate, GameError, Placement},
    game::{GameEvent, PlayerId},
    ship::ShipId,
};

/// Interface implemented by whatever sits in a seat: it supplies placements
/// and targets, and is told how its actions turned out.
///
/// Choices are validated by the match, not by the player. A rejected choice
/// is reported through [`Player::handle_rejection`] and asked for again.
pub trait Player {
    /// Choose where ship `ship` of `length` goes on `board`.
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        ship: ShipId,
        length: u8,
    ) -> anyhow::Result<Placement>;

    /// Choose the next cell to fire at, given the player's own board and
    /// their tracking board.
    fn choose_target(&mut self, own: &Board, tracking: &Board) -> anyhow::Result<Coordinate>;

    /// The last placement or target was refused.
    fn handle_rejection(&mut self, _err: &GameError) {}

    /// Result of the player's own shot.
    fn handle_events(&mut self, _target: Coordinate, _events: &[GameEvent]) {}

    /// Result of the opponent's shot at this player's board.
    fn handle_opponent_events(&mut self, _target: Coordinate, _events: &[GameEvent]) {}

    /// The match ended.
    fn handle_game_over(&mut self, _winner: PlayerId) {}
}
