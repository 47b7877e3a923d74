use core::fmt;
use core::ops::RangeInclusive;

/// Board dimension used when none is given.
pub const DEFAULT_BOARD_SIZE: u8 = 10;
/// Fleet size used when none is given.
pub const DEFAULT_SHIP_COUNT: u8 = 5;
/// Accepted fleet sizes. A fleet of `k` ships has lengths `1..=k`.
pub const SHIP_COUNT_RANGE: RangeInclusive<u8> = 1..=5;
/// Accepted board dimensions. The upper bound keeps columns addressable as
/// single letters `A..=Z`.
pub const BOARD_SIZE_RANGE: RangeInclusive<u8> = 5..=26;

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    BoardSize(u8),
    ShipCount(u8),
    /// Ship `ship` was given `length` instead of its position in the fleet.
    ShipLength { ship: u8, length: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardSize(n) => write!(
                f,
                "board size {} is outside {}..={}",
                n,
                BOARD_SIZE_RANGE.start(),
                BOARD_SIZE_RANGE.end()
            ),
            ConfigError::ShipCount(n) => write!(
                f,
                "ship count {} is outside {}..={}",
                n,
                SHIP_COUNT_RANGE.start(),
                SHIP_COUNT_RANGE.end()
            ),
            ConfigError::ShipLength { ship, length } => write!(
                f,
                "ship {} must have length {}, got {}",
                ship, ship, length
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Immutable match configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct GameConfig {
    board_size: u8,
    ship_count: u8,
}

impl GameConfig {
    pub fn new(board_size: u8, ship_count: u8) -> Result<Self, ConfigError> {
        if !BOARD_SIZE_RANGE.contains(&board_size) {
            return Err(ConfigError::BoardSize(board_size));
        }
        if !SHIP_COUNT_RANGE.contains(&ship_count) {
            return Err(ConfigError::ShipCount(ship_count));
        }
        Ok(Self {
            board_size,
            ship_count,
        })
    }

    /// Standard 10x10 board with the given fleet size.
    pub fn with_ships(ship_count: u8) -> Result<Self, ConfigError> {
        Self::new(DEFAULT_BOARD_SIZE, ship_count)
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn ship_count(&self) -> u8 {
        self.ship_count
    }

    /// Ship lengths in placement order: always `1, 2, ..., ship_count`.
    pub fn ship_lengths(&self) -> RangeInclusive<u8> {
        1..=self.ship_count
    }

    /// Number of ship cells in one fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.ship_lengths().map(usize::from).sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ship_count: DEFAULT_SHIP_COUNT,
        }
    }
}

#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawConfig {
    board_size: u8,
    ship_count: u8,
}

#[cfg(feature = "std")]
impl TryFrom<RawConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        GameConfig::new(raw.board_size, raw.ship_count)
    }
}
