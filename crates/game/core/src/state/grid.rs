//! Bounded cell grid with per-cell occupancy.
//!
//! Every cell is created once when the grid is built and lives for the whole
//! level. A cell's effective [`CellType`] is derived: it is `Blocked` while at
//! least one blocking occupant stands on it, and falls back to the layout type
//! otherwise.
use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::GridError;

use super::{ActorId, Position};

type OccupantSlots = ArrayVec<Occupant, { GameConfig::MAX_OCCUPANTS_PER_CELL }>;

/// Traversability of a cell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CellType {
    #[default]
    Free,
    Blocked,
}

/// Reference to an actor standing on a cell.
///
/// The blocking bit is copied from the actor at placement so the grid can keep
/// its effective type without looking actors up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Occupant {
    pub id: ActorId,
    pub blocks: bool,
}

impl Occupant {
    pub const fn new(id: ActorId, blocks: bool) -> Self {
        Self { id, blocks }
    }
}

/// A single grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    position: Position,
    original_type: CellType,
    cell_type: CellType,
    occupants: OccupantSlots,
}

impl Cell {
    fn new(position: Position, original_type: CellType) -> Self {
        Self {
            position,
            original_type,
            cell_type: original_type,
            occupants: OccupantSlots::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Layout type, unaffected by occupants.
    pub fn original_type(&self) -> CellType {
        self.original_type
    }

    /// Effective type considering blocking occupants.
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    pub fn is_blocked(&self) -> bool {
        self.cell_type == CellType::Blocked
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    pub fn occupant_count(&self) -> usize {
        self.occupants.len()
    }

    pub fn occupants(&self) -> impl Iterator<Item = &Occupant> + '_ {
        self.occupants.iter()
    }

    pub fn occupant_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.occupants.iter().map(|occupant| occupant.id)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.occupants.iter().any(|occupant| occupant.id == id)
    }

    fn refresh_type(&mut self) {
        self.cell_type = if self.occupants.iter().any(|occupant| occupant.blocks) {
            CellType::Blocked
        } else {
            self.original_type
        };
    }
}

/// Width and height of the grid in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    /// Clamps each coordinate into `[0, dim - 1]`.
    pub fn clamp(&self, position: Position) -> Position {
        Position::new(
            position.x.clamp(0, self.width as i32 - 1),
            position.y.clamp(0, self.height as i32 - 1),
        )
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Result of a clamped lookup.
#[derive(Clone, Copy, Debug)]
pub struct CellLookup<'a> {
    pub cell: &'a Cell,
    /// `false` when the requested position had to be clamped.
    pub in_bounds: bool,
}

/// The battlefield grid.
///
/// Cells are stored row-major with `y = 0` as the first row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an open grid where every cell is `Free`.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::with_blocked(width, height, std::iter::empty())
    }

    /// Creates a grid whose listed cells are permanently `Blocked` (rocks).
    pub fn with_blocked(
        width: u32,
        height: u32,
        blocked: impl IntoIterator<Item = Position>,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let dimensions = GridDimensions::new(width, height);
        let mut cells = Vec::with_capacity(dimensions.cell_count());
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(Cell::new(Position::new(x, y), CellType::Free));
            }
        }

        let mut grid = Self { dimensions, cells };
        for position in blocked {
            let cell = grid
                .cell_mut(position)
                .ok_or(GridError::OutOfBounds(position))?;
            cell.original_type = CellType::Blocked;
            cell.refresh_type();
        }
        Ok(grid)
    }

    /// Parses an ASCII layout: `.` is open water, `#` is a rock.
    ///
    /// The first row is `y = 0`. All rows must have the same width.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count()) as u32;

        let mut blocked = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count() as u32;
            if found != width {
                return Err(GridError::RaggedLayout {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                match symbol {
                    '.' => {}
                    '#' => blocked.push(Position::new(x as i32, y as i32)),
                    other => return Err(GridError::UnknownSymbol(other)),
                }
            }
        }

        Self::with_blocked(width, height, blocked)
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn clamp(&self, position: Position) -> Position {
        self.dimensions.clamp(position)
    }

    /// Returns the cell at `position`, clamping out of range coordinates.
    pub fn lookup(&self, position: Position) -> CellLookup<'_> {
        let in_bounds = self.contains(position);
        let clamped = self.clamp(position);
        CellLookup {
            cell: &self.cells[self.index(clamped)],
            in_bounds,
        }
    }

    /// Returns the cell at `position` without clamping.
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.contains(position)
            .then(|| &self.cells[self.index(position)])
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        if !self.contains(position) {
            return None;
        }
        let index = self.index(position);
        Some(&mut self.cells[index])
    }

    /// Whether the cell is in bounds and currently `Blocked`.
    pub fn is_blocked(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_blocked)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Places an occupant on a cell. Adding an occupant that is already there
    /// is a no-op.
    pub fn add_occupant(&mut self, position: Position, occupant: Occupant) -> Result<(), GridError> {
        let cell = self
            .cell_mut(position)
            .ok_or(GridError::OutOfBounds(position))?;
        if cell.contains(occupant.id) {
            return Ok(());
        }

        cell.occupants
            .try_push(occupant)
            .map_err(|_| GridError::CellFull {
                position,
                capacity: GameConfig::MAX_OCCUPANTS_PER_CELL,
            })?;
        cell.refresh_type();
        Ok(())
    }

    /// Removes an occupant. Returns `false` when it was not on the cell.
    pub fn remove_occupant(&mut self, position: Position, id: ActorId) -> bool {
        let Some(cell) = self.cell_mut(position) else {
            return false;
        };
        let Some(index) = cell.occupants.iter().position(|occupant| occupant.id == id) else {
            return false;
        };
        cell.occupants.remove(index);
        cell.refresh_type();
        true
    }

    fn index(&self, position: Position) -> usize {
        position.y as usize * self.dimensions.width as usize + position.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock() -> Occupant {
        Occupant::new(ActorId(1), true)
    }

    fn wave() -> Occupant {
        Occupant::new(ActorId(2), false)
    }

    #[test]
    fn lookup_clamps_out_of_range_positions() {
        let grid = Grid::new(5, 3).unwrap();

        let inside = grid.lookup(Position::new(4, 2));
        assert!(inside.in_bounds);
        assert_eq!(inside.cell.position(), Position::new(4, 2));

        let outside = grid.lookup(Position::new(9, -4));
        assert!(!outside.in_bounds);
        assert_eq!(outside.cell.position(), Position::new(4, 0));

        assert!(grid.cell(Position::new(5, 0)).is_none());
    }

    #[test]
    fn blocking_occupant_drives_effective_type() {
        let mut grid = Grid::new(3, 3).unwrap();
        let at = Position::new(1, 1);

        grid.add_occupant(at, wave()).unwrap();
        assert!(!grid.is_blocked(at));

        grid.add_occupant(at, rock()).unwrap();
        assert!(grid.is_blocked(at));

        assert!(grid.remove_occupant(at, ActorId(1)));
        assert!(!grid.is_blocked(at));
        assert_eq!(grid.cell(at).unwrap().occupant_count(), 1);
    }

    #[test]
    fn layout_rock_stays_blocked_after_occupants_leave() {
        let mut grid = Grid::from_rows(&["..#", "...", "..."]).unwrap();
        let at = Position::new(2, 0);
        assert_eq!(grid.cell(at).unwrap().original_type(), CellType::Blocked);

        grid.add_occupant(at, wave()).unwrap();
        assert!(grid.remove_occupant(at, ActorId(2)));
        assert!(grid.is_blocked(at));
    }

    #[test]
    fn add_is_idempotent_and_double_remove_is_noop() {
        let mut grid = Grid::new(2, 2).unwrap();
        let at = Position::new(0, 0);

        grid.add_occupant(at, wave()).unwrap();
        grid.add_occupant(at, wave()).unwrap();
        assert_eq!(grid.cell(at).unwrap().occupant_count(), 1);

        assert!(grid.remove_occupant(at, ActorId(2)));
        assert!(!grid.remove_occupant(at, ActorId(2)));
    }

    #[test]
    fn full_and_out_of_bounds_cells_reject_occupants() {
        let mut grid = Grid::new(2, 2).unwrap();
        let at = Position::new(1, 1);
        for id in 0..GameConfig::MAX_OCCUPANTS_PER_CELL as u32 {
            grid.add_occupant(at, Occupant::new(ActorId(id), false))
                .unwrap();
        }

        let err = grid
            .add_occupant(at, Occupant::new(ActorId(99), false))
            .unwrap_err();
        assert_eq!(err.error_code(), "GRID_CELL_FULL");

        let err = grid
            .add_occupant(Position::new(2, 0), wave())
            .unwrap_err();
        assert_eq!(err, GridError::OutOfBounds(Position::new(2, 0)));
    }

    #[test]
    fn layout_errors() {
        assert!(matches!(
            Grid::from_rows(&["...", ".."]),
            Err(GridError::RaggedLayout { row: 1, .. })
        ));
        assert_eq!(
            Grid::from_rows(&[".x."]),
            Err(GridError::UnknownSymbol('x'))
        );
        assert!(matches!(
            Grid::new(0, 4),
            Err(GridError::InvalidDimensions { .. })
        ));
    }
}
