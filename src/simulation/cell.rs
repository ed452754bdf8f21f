/// Binary cell state shared by both automata.
///
/// Layout: 1 byte, `Dead = 0` and `Alive = 1`, so a grid of cells is
/// byte-compatible with the 0/1 tables a display layer works with.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Background / white
    #[default]
    Dead = 0,
    /// Foreground / black
    Alive = 1,
}

impl Cell {
    /// Build a cell from a boolean liveness flag
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Raw 0/1 value
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// Rejected raw value; anything other than 0 or 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonBinaryValue(pub u8);

impl TryFrom<u8> for Cell {
    type Error = NonBinaryValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(NonBinaryValue(other)),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.bit()
    }
}
