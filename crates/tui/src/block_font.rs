use std::collections::HashMap;

use once_cell::sync::Lazy;

const FONT_HEIGHT: usize = 5;
const FONT_WIDTH: usize = 5;
const GAP: usize = 1;
const FILL_CHAR: char = '█';
const SHADOW_CHAR: char = '░';

/// Rows of a glyph, most significant of the low five bits is the left column.
type Glyph = [u8; FONT_HEIGHT];

static GLYPHS: Lazy<HashMap<char, Glyph>> = Lazy::new(|| {
    HashMap::from([
        ('A', [0b01110, 0b10001, 0b11111, 0b10001, 0b10001]),
        ('B', [0b11110, 0b10001, 0b11110, 0b10001, 0b11110]),
        ('C', [0b01111, 0b10000, 0b10000, 0b10000, 0b01111]),
        ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b11110]),
        ('E', [0b11111, 0b10000, 0b11110, 0b10000, 0b11111]),
        ('F', [0b11111, 0b10000, 0b11110, 0b10000, 0b10000]),
        ('G', [0b01111, 0b10000, 0b10011, 0b10001, 0b01111]),
        ('H', [0b10001, 0b10001, 0b11111, 0b10001, 0b10001]),
        ('I', [0b11111, 0b00100, 0b00100, 0b00100, 0b11111]),
        ('J', [0b00111, 0b00010, 0b00010, 0b10010, 0b01100]),
        ('K', [0b10010, 0b10100, 0b11000, 0b10100, 0b10010]),
        ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        ('M', [0b10001, 0b11011, 0b10101, 0b10001, 0b10001]),
        ('N', [0b10001, 0b11001, 0b10101, 0b10011, 0b10001]),
        ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b01110]),
        ('P', [0b11110, 0b10001, 0b11110, 0b10000, 0b10000]),
        ('Q', [0b01110, 0b10001, 0b10101, 0b10010, 0b01101]),
        ('R', [0b11110, 0b10001, 0b11110, 0b10100, 0b10010]),
        ('S', [0b01111, 0b10000, 0b01110, 0b00001, 0b11110]),
        ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100]),
        ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        ('V', [0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        ('W', [0b10001, 0b10001, 0b10101, 0b11011, 0b10001]),
        ('X', [0b10001, 0b01010, 0b00100, 0b01010, 0b10001]),
        ('Y', [0b10001, 0b01010, 0b00100, 0b00100, 0b00100]),
        ('Z', [0b11111, 0b00010, 0b00100, 0b01000, 0b11111]),
        ('0', [0b01110, 0b10011, 0b10101, 0b11001, 0b01110]),
        ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b01110]),
        ('2', [0b11110, 0b00001, 0b01110, 0b10000, 0b11111]),
        ('3', [0b11110, 0b00001, 0b00110, 0b00001, 0b11110]),
        ('4', [0b10010, 0b10010, 0b11111, 0b00010, 0b00010]),
        ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b11110]),
        ('6', [0b01110, 0b10000, 0b11110, 0b10001, 0b01110]),
        ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b00100]),
        ('8', [0b01110, 0b10001, 0b01110, 0b10001, 0b01110]),
        ('9', [0b01110, 0b10001, 0b01111, 0b00001, 0b01110]),
        ('-', [0b00000, 0b00000, 0b11111, 0b00000, 0b00000]),
        ('!', [0b00100, 0b00100, 0b00100, 0b00000, 0b00100]),
        ('?', [0b01110, 0b10001, 0b00110, 0b00000, 0b00100]),
        (' ', [0b00000; FONT_HEIGHT]),
    ])
});

/// Height in rows of anything produced by [`render`].
pub const HEIGHT: usize = FONT_HEIGHT + 1;

/// Render `text` as block letters with a drop shadow one cell down-right.
pub fn render(text: &str) -> Vec<String> {
    let glyphs: Vec<&Glyph> = text
        .chars()
        .map(|ch| ch.to_ascii_uppercase())
        .filter_map(|ch| GLYPHS.get(&ch).or_else(|| GLYPHS.get(&'?')))
        .collect();
    if glyphs.is_empty() {
        return vec![String::new(); HEIGHT];
    }

    let width = glyphs.len() * (FONT_WIDTH + GAP) + 1;
    let mut canvas = vec![vec![' '; width]; HEIGHT];
    for (index, glyph) in glyphs.iter().enumerate() {
        let x_offset = index * (FONT_WIDTH + GAP);
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..FONT_WIDTH {
                if bits & (1 << (FONT_WIDTH - 1 - col)) != 0 {
                    place(&mut canvas, row + 1, x_offset + col + 1, SHADOW_CHAR);
                    place(&mut canvas, row, x_offset + col, FILL_CHAR);
                }
            }
        }
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

/// Widest line of a rendered banner, in terminal cells.
pub fn width(lines: &[String]) -> usize {
    lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

fn place(canvas: &mut [Vec<char>], y: usize, x: usize, ch: char) {
    let Some(cell) = canvas.get_mut(y).and_then(|row| row.get_mut(x)) else {
        return;
    };
    if *cell == ' ' || ch == FILL_CHAR {
        *cell = ch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fixed_height() {
        let lines = render("WinZones");
        assert_eq!(lines.len(), HEIGHT);
        assert!(width(&lines) <= 8 * (FONT_WIDTH + GAP) + 1);
        assert!(lines[0].starts_with('█'));
    }

    #[test]
    fn fill_wins_over_shadow() {
        let lines = render("I");
        assert_eq!(lines[0], "█████");
        assert!(lines[1].contains('░'));
        assert!(lines[1].contains('█'));
    }

    #[test]
    fn unknown_characters_fall_back() {
        assert_eq!(render("@"), render("?"));
        assert!(render("").iter().all(String::is_empty));
    }
}
