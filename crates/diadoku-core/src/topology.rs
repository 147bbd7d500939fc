//! Static constraint structure of the board.
//!
//! A [`Topology`] is computed once for a chosen [`Variant`] and treated as
//! immutable afterward. It derives the unit list (rows, columns, boxes, and
//! for the diagonal variant the two main diagonals), the units containing
//! each cell, and each cell's peer set.

use crate::{cell::Cell, cell_set::CellSet};

/// The rule variant a board is played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Rows, columns, and 3x3 boxes.
    Standard,
    /// Rows, columns, 3x3 boxes, and both main diagonals.
    Diagonal,
}

/// Identifies one constraint unit within a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A row identified by its zero-based row number.
    Row(u8),
    /// A column identified by its zero-based column number.
    Column(u8),
    /// A 3x3 box identified by its index (0-8, left to right, top to
    /// bottom).
    Box(u8),
    /// The diagonal from `A1` to `I9`.
    MainDiagonal,
    /// The diagonal from `I1` to `A9`.
    AntiDiagonal,
}

/// A group of 9 cells that must jointly contain each digit 1-9 exactly once.
#[derive(Debug, Clone)]
pub struct Unit {
    kind: UnitKind,
    cells: [Cell; 9],
    members: CellSet,
}

impl Unit {
    fn new(kind: UnitKind, cells: [Cell; 9]) -> Self {
        let members = cells.into_iter().collect();
        Self {
            kind,
            cells,
            members,
        }
    }

    /// Returns what kind of unit this is.
    #[must_use]
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    /// Returns the member cells in unit order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the member cells as a set.
    #[must_use]
    pub fn members(&self) -> CellSet {
        self.members
    }
}

/// The full static structure of a board: units, per-cell unit lists, and
/// per-cell peer sets.
///
/// # Examples
///
/// ```
/// use diadoku_core::{Cell, Topology};
///
/// let topology = Topology::standard();
/// assert_eq!(topology.units().len(), 27);
/// // Every cell shares a unit with 20 other cells.
/// assert_eq!(topology.peers(Cell::from_coords(4, 4)).len(), 20);
///
/// let topology = Topology::diagonal();
/// assert_eq!(topology.units().len(), 29);
/// // The center cell lies on both diagonals.
/// assert_eq!(topology.units_of(Cell::from_coords(4, 4)).count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    variant: Variant,
    units: Vec<Unit>,
    unit_indices: Vec<Vec<usize>>,
    peers: Vec<CellSet>,
}

impl Topology {
    /// Builds the topology for `variant`.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let mut units = Vec::with_capacity(29);
        for row in 0..9 {
            units.push(Unit::new(
                UnitKind::Row(row),
                std::array::from_fn(|col| {
                    #[expect(clippy::cast_possible_truncation)]
                    Cell::from_coords(row, col as u8)
                }),
            ));
        }
        for col in 0..9 {
            units.push(Unit::new(
                UnitKind::Column(col),
                std::array::from_fn(|row| {
                    #[expect(clippy::cast_possible_truncation)]
                    Cell::from_coords(row as u8, col)
                }),
            ));
        }
        for box_index in 0..9 {
            units.push(Unit::new(
                UnitKind::Box(box_index),
                std::array::from_fn(|i| {
                    #[expect(clippy::cast_possible_truncation)]
                    let i = i as u8;
                    Cell::from_coords((box_index / 3) * 3 + i / 3, (box_index % 3) * 3 + i % 3)
                }),
            ));
        }
        if variant == Variant::Diagonal {
            units.push(Unit::new(
                UnitKind::MainDiagonal,
                std::array::from_fn(|i| {
                    #[expect(clippy::cast_possible_truncation)]
                    let i = i as u8;
                    Cell::from_coords(i, i)
                }),
            ));
            units.push(Unit::new(
                UnitKind::AntiDiagonal,
                std::array::from_fn(|i| {
                    #[expect(clippy::cast_possible_truncation)]
                    let i = i as u8;
                    Cell::from_coords(8 - i, i)
                }),
            ));
        }

        let mut unit_indices = vec![Vec::with_capacity(5); 81];
        let mut peers = vec![CellSet::new(); 81];
        for (i, unit) in units.iter().enumerate() {
            for cell in unit.cells() {
                unit_indices[cell.index()].push(i);
                peers[cell.index()] |= unit.members();
            }
        }
        for cell in Cell::ALL {
            peers[cell.index()].remove(cell);
        }

        Self {
            variant,
            units,
            unit_indices,
            peers,
        }
    }

    /// Builds the standard rows/columns/boxes topology.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Variant::Standard)
    }

    /// Builds the diagonal-variant topology.
    #[must_use]
    pub fn diagonal() -> Self {
        Self::new(Variant::Diagonal)
    }

    /// Returns the variant this topology was built for.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns all units: 9 rows, 9 columns, 9 boxes, then (diagonal
    /// variant only) the main and anti diagonals.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the units containing `cell` (3 for the standard variant,
    /// up to 5 on the diagonal variant).
    pub fn units_of(&self, cell: Cell) -> impl Iterator<Item = &Unit> {
        self.unit_indices[cell.index()].iter().map(|&i| &self.units[i])
    }

    /// Returns the cells sharing at least one unit with `cell`, excluding
    /// `cell` itself.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> CellSet {
        self.peers[cell.index()]
    }
}
