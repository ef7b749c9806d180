use std::io::{self, Write};

use ink_core::frame::OutputGrid;

/// Écrit la grille ligne par ligne, de haut en bas, une fin de ligne par rangée.
///
/// Each line is encoded and written whole. If the writer fails mid-grid the
/// lines already written stay written.
///
/// # Errors
/// Propagates any I/O error from `out`.
///
/// # Example
/// ```
/// use ink_core::frame::OutputGrid;
/// use ink_ascii::render::render;
/// let grid = OutputGrid::from_cells(2, 2, vec!['#', ' ', ' ', '#']).unwrap();
/// let mut out = Vec::new();
/// render(&grid, &mut out).unwrap();
/// assert_eq!(out, b"# \n #\n");
/// ```
pub fn render<W: Write>(grid: &OutputGrid, out: &mut W) -> io::Result<()> {
    let mut line = String::with_capacity(grid.width() as usize * 4 + 1);
    for row in grid.rows() {
        line.clear();
        line.extend(row.iter());
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}
