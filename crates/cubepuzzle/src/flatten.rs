//! Flattened 2D view of the cube.

use std::fmt;
use std::ops::{Index, IndexMut};

use cubemath::prelude::*;

use crate::Face;

/// 3x3 grid of sticker colors on one face, indexed by `(row, column)`.
///
/// Row 0 is the top and column 0 is the left, as seen from outside the cube.
/// An empty cell (`None`) never occurs in the output of
/// [`crate::Cube::flatten()`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceGrid(pub [[Option<Face>; 3]; 3]);

impl Index<(usize, usize)> for FaceGrid {
    type Output = Option<Face>;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}
impl IndexMut<(usize, usize)> for FaceGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

impl FaceGrid {
    /// Constructs a grid with every cell set to `color`.
    pub fn uniform(color: Face) -> Self {
        Self([[Some(color); 3]; 3])
    }

    /// Returns an iterator over the cells of the grid in row-major order, as
    /// `((row, col), color)`.
    pub fn cells(&self) -> impl '_ + Iterator<Item = ((usize, usize), Option<Face>)> {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &color)| ((row, col), color))
        })
    }
    /// Returns whether every cell has a sticker.
    pub fn is_complete(&self) -> bool {
        self.cells().all(|(_, color)| color.is_some())
    }
    /// Returns the color of the grid if every cell has a sticker of that same
    /// color, or `None` otherwise.
    pub fn uniform_color(&self) -> Option<Face> {
        let first = self.0[0][0]?;
        self.cells()
            .all(|(_, color)| color == Some(first))
            .then_some(first)
    }
    /// Returns the numeric color code of each cell (see [`Face::code()`]),
    /// with 0 for an empty cell.
    pub fn codes(&self) -> [[u8; 3]; 3] {
        self.0.map(|row| row.map(|color| color.map_or(0, Face::code)))
    }

    /// Returns a row of the grid.
    pub fn row(&self, row: usize) -> [Option<Face>; 3] {
        self.0[row]
    }
    /// Returns a column of the grid.
    pub fn col(&self, col: usize) -> [Option<Face>; 3] {
        self.0.map(|row| row[col])
    }
}

/// Six face grids produced by [`crate::Cube::flatten()`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flattened {
    grids: [FaceGrid; 6],
}

impl Index<Face> for Flattened {
    type Output = FaceGrid;

    fn index(&self, face: Face) -> &Self::Output {
        &self.grids[face.index()]
    }
}
impl IndexMut<Face> for Flattened {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.grids[face.index()]
    }
}

impl Flattened {
    /// Returns an iterator over all faces and their grids.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (Face, &FaceGrid)> {
        Face::iter().map(|face| (face, &self[face]))
    }
    /// Returns whether every cell of every grid has a sticker.
    pub fn is_complete(&self) -> bool {
        self.grids.iter().all(FaceGrid::is_complete)
    }

    /// Returns the grids as they would look after physically rotating the
    /// whole cube by `matrix`.
    ///
    /// Each sticker moves to the face and cell that its piece and facing
    /// direction are mapped to, so this both permutes the six grids and
    /// rotates the grids whose face orientation changes.
    ///
    /// # Panics
    ///
    /// Panics if `matrix` is not a proper rotation of the cube lattice.
    #[must_use]
    pub fn rotated(&self, matrix: &IntMatrix) -> Self {
        assert!(
            matrix.is_lattice_rotation(),
            "not a rotation of the cube:\n{matrix}",
        );

        let mut ret = Self::default();
        for (face, grid) in self.iter() {
            let new_face = Face::from_normal(matrix * face.normal())
                .expect("rotation must map faces to faces");
            for ((row, col), color) in grid.cells() {
                let new_position = matrix * face.position_of_cell(row, col);
                ret[new_face][new_face.cell_of(new_position)] = color;
            }
        }
        ret
    }
}

/// Width of one face in the text net, including the trailing space.
const NET_FACE_WIDTH: usize = 6;

impl fmt::Display for Flattened {
    /// Draws a cross-shaped net with `U` on top, `L F R B` in the middle, and
    /// `D` on the bottom. Each sticker is drawn as the symbol of its color and
    /// empty cells are drawn as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_row(f: &mut fmt::Formatter<'_>, cells: [Option<Face>; 3]) -> fmt::Result {
            for color in cells {
                write!(f, "{} ", color.map_or('.', Face::symbol))?;
            }
            Ok(())
        }

        let pad = " ".repeat(NET_FACE_WIDTH);
        for row in 0..3 {
            write!(f, "{pad}")?;
            write_row(f, self[Face::U].row(row))?;
            writeln!(f)?;
        }
        for row in 0..3 {
            for face in [Face::L, Face::F, Face::R, Face::B] {
                write_row(f, self[face].row(row))?;
            }
            writeln!(f)?;
        }
        for row in 0..3 {
            write!(f, "{pad}")?;
            write_row(f, self[Face::D].row(row))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
