#![cfg(feature = "std")]

use std::cell::RefCell;
use std::fmt;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::rc::Rc;
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coordinate, GameError, Orientation, Placement},
    config::SHIP_COUNT_RANGE,
    game::{GameEvent, PlayerId},
    placement,
    player::Player,
    ship::ShipId,
    ui::{render_ocean, render_tracking},
};

/// Parse the external `A5` form into a coordinate on a `size`×`size` board.
/// Letters are case-insensitive; rows are 1-based.
pub fn parse_coord(input: &str, size: u8) -> Option<Coordinate> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = col_ch as u8 - b'A';
    let row_str = chars.as_str();
    if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row: u8 = row_str.parse().ok()?;
    if row == 0 || row > size || col >= size {
        return None;
    }
    Some(Coordinate::new(col, row - 1))
}

/// Parse `H`/`V` (or the full words), case-insensitive.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_uppercase().as_str() {
        "H" | "HORIZONTAL" => Some(Orientation::Horizontal),
        "V" | "VERTICAL" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Line-oriented terminal shared by both hot-seat players.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print without failing; a broken terminal surfaces on the next read.
    fn say(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
        let _ = self.output.write_all(b"\n");
    }

    /// Show `prompt` and read one trimmed line.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Ask how many ships each player gets until a valid count is given.
    pub fn ship_count(&mut self) -> anyhow::Result<u8> {
        let prompt = std::format!(
            "Enter number of ships ({}-{}): ",
            SHIP_COUNT_RANGE.start(),
            SHIP_COUNT_RANGE.end()
        );
        loop {
            let line = self.ask(&prompt)?;
            match line.parse::<u8>() {
                Ok(n) if SHIP_COUNT_RANGE.contains(&n) => return Ok(n),
                _ => self.say(format_args!("Invalid number. Try again.")),
            }
        }
    }

    fn ask_coord(&mut self, size: u8) -> anyhow::Result<Coordinate> {
        loop {
            let line = self.ask("Enter the coordinates (e.g. A5): ")?;
            match parse_coord(&line, size) {
                Some(c) => return Ok(c),
                None => self.say(format_args!("Invalid coordinates. Try again.")),
            }
        }
    }

    fn ask_orientation(&mut self) -> anyhow::Result<Orientation> {
        loop {
            let line = self.ask("Enter H (Horizontal) or V (Vertical): ")?;
            match parse_orientation(&line) {
                Some(o) => return Ok(o),
                None => self.say(format_args!("Invalid orientation. Try again.")),
            }
        }
    }

    /// Consume the console, returning the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Interactive player reading from a console. Both seats of a hot-seat game
/// share one console; see [`CliPlayer::pair`].
pub struct CliPlayer<R, W> {
    seat: PlayerId,
    console: Rc<RefCell<Console<R, W>>>,
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    /// Two players taking turns at the same console.
    pub fn pair(console: Console<R, W>) -> (Self, Self) {
        let shared = Rc::new(RefCell::new(console));
        (
            Self {
                seat: PlayerId::One,
                console: shared.clone(),
            },
            Self {
                seat: PlayerId::Two,
                console: shared,
            },
        )
    }

    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    /// Recover the console once both players are dropped.
    pub fn into_console(self) -> Option<Console<R, W>> {
        Rc::try_unwrap(self.console).ok().map(RefCell::into_inner)
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn choose_placement(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        ship: ShipId,
        length: u8,
    ) -> anyhow::Result<Placement> {
        let mut console = self.console.borrow_mut();
        if ship.0 == 1 {
            console.say(format_args!("\n{}, place your ships.", self.seat));
        }
        console.say(format_args!("\nCurrent board:\n{}", render_ocean(board)));
        loop {
            let line = console.ask(&std::format!(
                "Place {} (length {}) [e.g. A5 H, enter for random]: ",
                ship,
                length
            ))?;
            if line.is_empty() {
                match placement::random_placement(board, length, rng) {
                    Ok(p) => return Ok(p),
                    Err(e) => {
                        console.say(format_args!("{}. Place it by hand.", e));
                        continue;
                    }
                }
            }
            let mut parts = line.split_whitespace();
            let Some(origin) = parts.next().and_then(|p| parse_coord(p, board.size())) else {
                console.say(format_args!("Invalid coordinates. Try again."));
                continue;
            };
            let orientation = match parts.next() {
                Some(p) => match parse_orientation(p) {
                    Some(o) => o,
                    None => {
                        console.say(format_args!("Invalid orientation. Try again."));
                        continue;
                    }
                },
                // a single cell has no direction
                None if length == 1 => Orientation::Horizontal,
                None => console.ask_orientation()?,
            };
            return Ok(Placement::new(origin, orientation));
        }
    }

    fn choose_target(&mut self, own: &Board, tracking: &Board) -> anyhow::Result<Coordinate> {
        let mut console = self.console.borrow_mut();
        console.say(format_args!("\n{}'s turn.", self.seat));
        console.say(format_args!("Your board\n{}", render_ocean(own)));
        console.say(format_args!("Your shots\n{}", render_tracking(tracking)));
        console.say(format_args!("Your turn to shoot."));
        console.ask_coord(tracking.size())
    }

    fn handle_rejection(&mut self, err: &GameError) {
        let mut console = self.console.borrow_mut();
        match err {
            GameError::Board(BoardError::DuplicateAttack(_)) => console.say(format_args!(
                "You've already fired at this location. Try again."
            )),
            GameError::Board(e) => {
                console.say(format_args!("Invalid placement: {}. Try again.", e))
            }
            other => console.say(format_args!("{}", other)),
        }
    }

    fn handle_events(&mut self, _target: Coordinate, events: &[GameEvent]) {
        let mut console = self.console.borrow_mut();
        for event in events {
            match event {
                GameEvent::Miss => console.say(format_args!("It's a miss.")),
                GameEvent::Hit(_) => console.say(format_args!("It's a hit!")),
                GameEvent::ShipSunk(id) => {
                    console.say(format_args!("You sunk the opponent's {}!", id))
                }
                GameEvent::PlayerWins(_) => {}
            }
        }
    }

    fn handle_game_over(&mut self, winner: PlayerId) {
        if winner == self.seat {
            self.console
                .borrow_mut()
                .say(format_args!("{} wins!", winner));
        }
    }
}
