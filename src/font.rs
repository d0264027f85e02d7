//! 3x5 bitmap font for depth labels.
//!
//! Covers digits and the handful of characters labels use ("12.5 ft").
//! Unknown characters advance the cursor and draw nothing.

use glam::Vec2;

pub const GLYPH_COLS: usize = 3;
pub const GLYPH_ROWS: usize = 5;

/// Horizontal advance per character, in cells (glyph + one blank column)
const ADVANCE_CELLS: usize = GLYPH_COLS + 1;

/// Rows top to bottom; bit 2 is the leftmost column
pub fn glyph(c: char) -> Option<[u8; GLYPH_ROWS]> {
    let rows = match c.to_ascii_lowercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        'f' => [0b011, 0b100, 0b110, 0b100, 0b100],
        't' => [0b010, 0b111, 0b010, 0b010, 0b011],
        ' ' => [0; GLYPH_ROWS],
        _ => return None,
    };
    Some(rows)
}

/// Edge of one font cell for a label `size_px` tall (whole pixels, at least 1)
pub fn cell_size(size_px: f32) -> f32 {
    (size_px / GLYPH_ROWS as f32).floor().max(1.0)
}

/// Top-left corners of the lit cells of `text`, laid out from `origin`
pub fn lit_cells(text: &str, origin: Vec2, cell: f32) -> impl Iterator<Item = Vec2> + '_ {
    text.chars().enumerate().flat_map(move |(i, c)| {
        let left = origin.x + (i * ADVANCE_CELLS) as f32 * cell;
        let rows = glyph(c).unwrap_or([0; GLYPH_ROWS]);
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..GLYPH_COLS)
                .filter(move |&col| rows[row] & (0b100_u8 >> col) != 0)
                .map(move |col| {
                    Vec2::new(
                        left + col as f32 * cell,
                        origin.y + row as f32 * cell,
                    )
                })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_characters_covered() {
        for c in "0123456789. ft-".chars() {
            assert!(glyph(c).is_some(), "missing glyph {:?}", c);
        }
        assert!(glyph('#').is_none());
    }

    #[test]
    fn test_cell_size_from_label_height() {
        assert_eq!(cell_size(12.0), 2.0);
        assert_eq!(cell_size(10.0), 2.0);
        assert_eq!(cell_size(3.0), 1.0);
    }

    #[test]
    fn test_lit_cells_layout() {
        // "1" has 8 lit cells, its top cell in the middle column
        let cells: Vec<Vec2> = lit_cells("1", Vec2::new(10.0, 20.0), 2.0).collect();
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], Vec2::new(12.0, 20.0));

        // Second character starts one advance to the right
        let cells: Vec<Vec2> = lit_cells(" 7", Vec2::ZERO, 1.0).collect();
        assert_eq!(cells[0], Vec2::new(4.0, 0.0));
    }

    #[test]
    fn test_unknown_characters_are_blank() {
        assert_eq!(lit_cells("##", Vec2::ZERO, 1.0).count(), 0);
        let with_unknown: Vec<Vec2> = lit_cells("#1", Vec2::ZERO, 1.0).collect();
        let shifted: Vec<Vec2> = lit_cells(" 1", Vec2::ZERO, 1.0).collect();
        assert_eq!(with_unknown, shifted);
    }
}
