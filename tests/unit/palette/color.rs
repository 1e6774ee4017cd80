use super::*;

#[test]
fn codes_follow_wire_order() {
    let codes: Vec<u8> = PaletteColor::ALL.iter().map(|c| c.code()).collect();
    assert_eq!(codes, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(PaletteColor::Orange.name(), "orange");
}

#[test]
fn from_code_inverts_code_and_rejects_unused_nibbles() {
    for c in PaletteColor::ALL {
        assert_eq!(PaletteColor::from_code(c.code()), Some(c));
    }
    for code in 7..=15u8 {
        assert_eq!(PaletteColor::from_code(code), None);
    }
}

#[test]
fn white_pair_is_0x11() {
    assert_eq!(PaletteColor::White.packed_pair(), 0x11);
    assert_eq!(PaletteColor::Black.packed_pair(), 0x00);
}

#[test]
fn serde_uses_snake_case_names() {
    let json = serde_json::to_string(&PaletteColor::Yellow).unwrap();
    assert_eq!(json, "\"yellow\"");
    let back: PaletteColor = serde_json::from_str("\"orange\"").unwrap();
    assert_eq!(back, PaletteColor::Orange);
}
