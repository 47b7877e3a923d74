use std::collections::VecDeque;

use broadside::{
    Board, BoardError, Coordinate, GameConfig, GameError, GameEvent, Orientation, Placement,
    Player, PlayerId, Session, ShipId,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Player fed from fixed queues; errors out when a queue runs dry.
#[derive(Default)]
struct ScriptedPlayer {
    placements: VecDeque<Placement>,
    targets: VecDeque<Coordinate>,
    rejections: Vec<GameError>,
    events: Vec<GameEvent>,
    opponent_events: Vec<GameEvent>,
    game_over: Option<PlayerId>,
}

impl ScriptedPlayer {
    fn new(placements: &[(u8, u8, Orientation)], targets: &[(u8, u8)]) -> Self {
        Self {
            placements: placements
                .iter()
                .map(|&(c, r, o)| Placement::new(Coordinate::new(c, r), o))
                .collect(),
            targets: targets.iter().map(|&(c, r)| Coordinate::new(c, r)).collect(),
            ..Self::default()
        }
    }
}

impl Player for ScriptedPlayer {
    fn choose_placement(
        &mut self,
        _rng: &mut SmallRng,
        _board: &Board,
        _ship: ShipId,
        _length: u8,
    ) -> anyhow::Result<Placement> {
        self.placements
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("out of placements"))
    }

    fn choose_target(&mut self, _own: &Board, _tracking: &Board) -> anyhow::Result<Coordinate> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("out of targets"))
    }

    fn handle_rejection(&mut self, err: &GameError) {
        self.rejections.push(*err);
    }

    fn handle_events(&mut self, _target: Coordinate, events: &[GameEvent]) {
        self.events.extend_from_slice(events);
    }

    fn handle_opponent_events(&mut self, _target: Coordinate, events: &[GameEvent]) {
        self.opponent_events.extend_from_slice(events);
    }

    fn handle_game_over(&mut self, winner: PlayerId) {
        self.game_over = Some(winner);
    }
}

const H: Orientation = Orientation::Horizontal;
const V: Orientation = Orientation::Vertical;

#[test]
fn test_full_game_with_reprompts() {
    let mut rng = SmallRng::seed_from_u64(1);
    // second placement runs off the board, third overlaps: both re-prompted
    let mut one = ScriptedPlayer::new(
        &[(0, 0, H), (9, 5, H), (0, 0, V), (0, 1, H)],
        &[(0, 0), (0, 0), (5, 5), (6, 5)],
    );
    let mut two = ScriptedPlayer::new(
        &[(0, 0, H), (5, 5, H)],
        &[(9, 9), (9, 8)],
    );
    let mut session = Session::new(GameConfig::with_ships(2).unwrap());
    let winner = session.run(&mut rng, &mut one, &mut two).unwrap();

    assert_eq!(winner, PlayerId::One);
    assert_eq!(session.game().winner(), Some(PlayerId::One));
    assert_eq!(session.turns(), 5);
    assert_eq!(
        one.rejections,
        vec![
            GameError::Board(BoardError::OutOfBounds(Coordinate::new(10, 5))),
            GameError::Board(BoardError::Overlap(Coordinate::new(0, 0))),
            GameError::Board(BoardError::DuplicateAttack(Coordinate::new(0, 0))),
        ]
    );
    assert!(two.rejections.is_empty());
    assert_eq!(
        one.events,
        vec![
            GameEvent::Hit(ShipId(1)),
            GameEvent::ShipSunk(ShipId(1)),
            GameEvent::Hit(ShipId(2)),
            GameEvent::Hit(ShipId(2)),
            GameEvent::ShipSunk(ShipId(2)),
            GameEvent::PlayerWins(PlayerId::One),
        ]
    );
    assert_eq!(two.events, vec![GameEvent::Miss, GameEvent::Miss]);
    assert_eq!(two.opponent_events, one.events);
    assert_eq!(one.game_over, Some(PlayerId::One));
    assert_eq!(two.game_over, Some(PlayerId::One));
    assert!(one.targets.is_empty());
}

#[test]
fn test_player_error_aborts() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut one = ScriptedPlayer::new(&[(0, 0, H)], &[]);
    let mut two = ScriptedPlayer::new(&[(3, 3, H)], &[]);
    let mut session = Session::new(GameConfig::with_ships(1).unwrap());
    let err = session.run(&mut rng, &mut one, &mut two).unwrap_err();
    assert!(err.to_string().contains("out of targets"));
    assert_eq!(session.turns(), 0);
    assert!(one.game_over.is_none());
}
