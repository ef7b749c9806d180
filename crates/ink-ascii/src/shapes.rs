//! Formes fixes rastérisées en texte : carré, cercle, motifs tamponnés.

use ink_core::frame::OutputGrid;

/// Cœur, 11×8.
pub const HEART: &[&str] = &[
    "  **   **  ",
    " **** **** ",
    "***********",
    " ********* ",
    "  *******  ",
    "   *****   ",
    "    ***    ",
    "     *     ",
];

/// Smiley, 9×7.
pub const SMILEY: &[&str] = &[
    "  *****  ",
    " *     * ",
    "*  * *  *",
    "*       *",
    "*  ---  *",
    " *     * ",
    "  *****  ",
];

/// Horizontal stretch applied to circles so they look round in a terminal.
const CIRCLE_X_SCALE: f64 = 2.0;
/// Tolerance on `|d² - r²|` for the outline.
const OUTLINE_THICKNESS: f64 = 0.85;

/// Plus grand côté accepté pour une forme, en caractères.
pub const MAX_SHAPE_EXTENT: u32 = 4096;

/// Grid size if both sides fit in `MAX_SHAPE_EXTENT`.
fn bounded(width: Option<u32>, height: Option<u32>) -> Option<(u32, u32)> {
    match (width, height) {
        (Some(w), Some(h)) if w <= MAX_SHAPE_EXTENT && h <= MAX_SHAPE_EXTENT => Some((w, h)),
        _ => {
            log::warn!("Forme trop grande (côté max {MAX_SHAPE_EXTENT}), grille vide");
            None
        }
    }
}

/// Resolve a built-in pattern by name.
#[must_use]
pub fn named_pattern(name: &str) -> Option<&'static [&'static str]> {
    match name.to_ascii_lowercase().as_str() {
        "heart" => Some(HEART),
        "smiley" => Some(SMILEY),
        _ => None,
    }
}

/// Carré `n×n`, plein ou seulement le contour.
///
/// Sides above [`MAX_SHAPE_EXTENT`] give an empty grid.
///
/// # Example
/// ```
/// use ink_ascii::shapes::square;
/// assert_eq!(square(3, '*', false).to_string(), "***\n* *\n***\n");
/// assert_eq!(square(0, '#', true).height(), 0);
/// ```
#[must_use]
pub fn square(n: u32, ch: char, filled: bool) -> OutputGrid {
    if bounded(Some(n), Some(n)).is_none() {
        return OutputGrid::empty();
    }
    let mut grid = OutputGrid::new(n, n, ' ');
    for y in 0..n {
        for x in 0..n {
            if filled || y == 0 || y == n - 1 || x == 0 || x == n - 1 {
                grid.set(x, y, ch);
            }
        }
    }
    grid
}

/// Cercle de rayon `radius`, étiré ×2 horizontalement.
///
/// The grid is `(4r + 1) × (2r + 1)`; larger than [`MAX_SHAPE_EXTENT`] on
/// either side gives an empty grid.
///
/// # Example
/// ```
/// use ink_ascii::shapes::circle;
/// let c = circle(2, 'o', true);
/// assert_eq!((c.width(), c.height()), (9, 5));
/// assert_eq!(c.get(4, 2), 'o');
/// ```
#[must_use]
pub fn circle(radius: u32, ch: char, filled: bool) -> OutputGrid {
    if radius == 0 {
        return OutputGrid::empty();
    }
    let height = radius.checked_mul(2).and_then(|d| d.checked_add(1));
    let width = radius.checked_mul(4).and_then(|d| d.checked_add(1));
    let Some((width, height)) = bounded(width, height) else {
        return OutputGrid::empty();
    };
    let r2 = f64::from(radius) * f64::from(radius);
    let center_x = f64::from(width - 1) / 2.0;

    let mut grid = OutputGrid::new(width, height, ' ');
    for y in 0..height {
        let dy = f64::from(y) - f64::from(radius);
        for x in 0..width {
            let dx = (f64::from(x) - center_x) / CIRCLE_X_SCALE;
            let d2 = dx * dx + dy * dy;
            let on = if filled {
                d2 <= r2 + 0.25
            } else {
                (d2 - r2).abs() <= OUTLINE_THICKNESS
            };
            if on {
                grid.set(x, y, ch);
            }
        }
    }
    grid
}

/// Tamponne un motif agrandi `scale_x × scale_y` : tout caractère non-espace
/// devient `on`, le reste `off`. Short rows are padded with `off`.
/// A scaled size above [`MAX_SHAPE_EXTENT`] gives an empty grid.
///
/// # Example
/// ```
/// use ink_ascii::shapes::stamp;
/// let g = stamp(&["x ", " x"], 2, 1, '#', '.');
/// assert_eq!(g.to_string(), "##..\n..##\n");
/// ```
#[must_use]
pub fn stamp(pattern: &[&str], scale_x: u32, scale_y: u32, on: char, off: char) -> OutputGrid {
    if pattern.is_empty() || scale_x == 0 || scale_y == 0 {
        return OutputGrid::empty();
    }
    let cols = pattern.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let width = u32::try_from(cols).ok().and_then(|c| c.checked_mul(scale_x));
    let height = u32::try_from(pattern.len()).ok().and_then(|r| r.checked_mul(scale_y));
    let Some((width, height)) = bounded(width, height) else {
        return OutputGrid::empty();
    };

    let mut grid = OutputGrid::new(width, height, off);
    for (r, line) in pattern.iter().enumerate() {
        for (c, bit) in line.chars().enumerate() {
            if bit == ' ' {
                continue;
            }
            for sy in 0..scale_y {
                for sx in 0..scale_x {
                    grid.set(c as u32 * scale_x + sx, r as u32 * scale_y + sy, on);
                }
            }
        }
    }
    grid
}
