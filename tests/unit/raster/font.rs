use super::*;

fn render(ch: char) -> Vec<String> {
    let g = glyph(ch);
    (0..GLYPH_HEIGHT)
        .map(|row| {
            (0..GLYPH_WIDTH)
                .map(|col| if g.is_set(col, row) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn table_covers_space_through_z() {
    assert_eq!(COLUMNS.len(), ('Z' as usize) - (' ' as usize) + 1);
    assert!(is_supported(' '));
    assert!(is_supported('Z'));
    assert!(!is_supported('a'));
    assert!(!is_supported('['));
    assert!(!is_supported('\u{1F600}'));
}

#[test]
fn letters_are_upright() {
    assert_eq!(
        render('L'),
        vec!["#....", "#....", "#....", "#....", "#....", "#....", "#####"]
    );
    assert_eq!(
        render('T'),
        vec!["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."]
    );
}

#[test]
fn leftmost_column_is_most_significant_bit() {
    let g = glyph('L');
    assert_eq!(g.rows()[0], 0b1_0000);
    assert_eq!(g.rows()[6], 0b1_1111);
}

#[test]
fn unsupported_characters_map_to_blank() {
    for ch in ['a', 'z', '~', '\n', 'é'] {
        assert!(glyph(ch).is_blank(), "{ch:?} should be blank");
        assert_eq!(glyph(ch), glyph(' '));
    }
    assert!(!glyph('%').is_blank());
}

#[test]
fn out_of_cell_bits_are_blank() {
    let g = glyph('#');
    assert!(!g.is_set(-1, 0));
    assert!(!g.is_set(5, 0));
    assert!(!g.is_set(0, 7));
}
