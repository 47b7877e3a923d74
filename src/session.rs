//! Drives one [`Match`] with two [`Player`]s from setup to victory.

use rand::rngs::SmallRng;

use crate::{
    common::GameError,
    config::GameConfig,
    game::{Match, Phase, PlayerId},
    player::Player,
};

/// A match plus the loop that feeds it player choices.
///
/// Rejected input is handed back to the same player, who is asked again with
/// the match unchanged. Errors that reveal a broken invariant end the session.
pub struct Session {
    game: Match,
    turns: usize,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Match::new(config),
            turns: 0,
        }
    }

    /// The match being played.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Number of resolved attacks so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Play until a winner is known and return them.
    pub fn run(
        &mut self,
        rng: &mut SmallRng,
        one: &mut dyn Player,
        two: &mut dyn Player,
    ) -> anyhow::Result<PlayerId> {
        loop {
            match self.game.phase() {
                Phase::Setup(id) => {
                    let player = seat(id, one, two);
                    self.place_next(rng, id, player)?;
                }
                Phase::InPlay(id) => {
                    let target = {
                        let player = seat(id, one, two);
                        let me = self.game.player(id);
                        player.choose_target(me.ocean(), me.tracking())?
                    };
                    match self.game.attack(target) {
                        Ok(report) => {
                            self.turns += 1;
                            seat(id, one, two).handle_events(target, &report.events);
                            seat(id.opponent(), one, two)
                                .handle_opponent_events(target, &report.events);
                        }
                        Err(err) => reject(id, seat(id, one, two), err)?,
                    }
                }
                Phase::Finished(winner) => {
                    log::info!("{} wins after {} attacks", winner, self.turns);
                    one.handle_game_over(winner);
                    two.handle_game_over(winner);
                    return Ok(winner);
                }
            }
        }
    }

    fn place_next(
        &mut self,
        rng: &mut SmallRng,
        id: PlayerId,
        player: &mut dyn Player,
    ) -> anyhow::Result<()> {
        let ship = *self
            .game
            .pending_ship()
            .ok_or_else(|| anyhow::anyhow!("{} has no ship left to place", id))?;
        let placement = player.choose_placement(
            rng,
            self.game.player(id).ocean(),
            ship.id(),
            ship.length(),
        )?;
        match self.game.place_ship(placement.origin, placement.orientation) {
            Ok(_) => Ok(()),
            Err(err) => reject(id, player, err),
        }
    }
}

fn seat<'a>(id: PlayerId, one: &'a mut dyn Player, two: &'a mut dyn Player) -> &'a mut dyn Player {
    match id {
        PlayerId::One => one,
        PlayerId::Two => two,
    }
}

/// Report a refused action, or abort if it signals a defect.
fn reject(id: PlayerId, player: &mut dyn Player, err: GameError) -> anyhow::Result<()> {
    if err.is_defect() {
        log::error!("aborting match: {}", err);
        return Err(anyhow::anyhow!("internal error during {}'s turn: {}", id, err));
    }
    log::warn!("{} input rejected: {}", id, err);
    player.handle_rejection(&err);
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::{
        board::Board,
        common::{BoardError, Coordinate, FleetError, Placement},
        ship::ShipId,
    };

    #[derive(Default)]
    struct Recorder {
        rejections: Vec<GameError>,
    }

    impl Player for Recorder {
        fn choose_placement(
            &mut self,
            _rng: &mut SmallRng,
            _board: &Board,
            _ship: ShipId,
            _length: u8,
        ) -> anyhow::Result<Placement> {
            anyhow::bail!("not used")
        }

        fn choose_target(&mut self, _own: &Board, _tracking: &Board) -> anyhow::Result<Coordinate> {
            anyhow::bail!("not used")
        }

        fn handle_rejection(&mut self, err: &GameError) {
            self.rejections.push(*err);
        }
    }

    #[test]
    fn fleet_error_aborts_without_reprompt() {
        let mut player = Recorder::default();
        let err = GameError::Fleet(FleetError::Overkill(ShipId(3)));
        let abort = reject(PlayerId::Two, &mut player, err).unwrap_err();
        let message = alloc::format!("{}", abort);
        assert!(message.contains("Player 2"));
        assert!(message.contains("ship S3 was hit after being sunk"));
        assert!(player.rejections.is_empty());
    }

    #[test]
    fn input_error_is_handed_back() {
        let mut player = Recorder::default();
        let err = GameError::Board(BoardError::DuplicateAttack(Coordinate::new(0, 0)));
        reject(PlayerId::One, &mut player, err).unwrap();
        reject(PlayerId::One, &mut player, GameError::NotInPlay).unwrap();
        assert_eq!(player.rejections, [err, GameError::NotInPlay]);
    }
}
