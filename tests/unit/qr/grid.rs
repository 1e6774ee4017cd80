use super::*;

#[test]
fn new_checks_square_shape() {
    assert!(ModuleGrid::new(0, vec![]).is_err());
    assert!(ModuleGrid::new(2, vec![true; 3]).is_err());
    let g = ModuleGrid::new(2, vec![true, false, false, true]).unwrap();
    assert_eq!(g.size(), 2);
    assert!(g.is_dark(0, 0));
    assert!(!g.is_dark(0, 1));
    assert!(g.is_dark(1, 1));
    assert!(!g.is_dark(5, 5));
}

#[test]
fn from_rows_rejects_ragged_input() {
    let err = ModuleGrid::from_rows(&[vec![true, false], vec![true]]).unwrap_err();
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn parse_accepts_common_notations() {
    let g = ModuleGrid::parse("#.#\n010\n\nX_x   \n").unwrap();
    assert_eq!(g.size(), 3);
    let dark: Vec<(usize, usize)> = g
        .cells()
        .filter(|&(_, _, d)| d)
        .map(|(r, c, _)| (r, c))
        .collect();
    assert_eq!(dark, vec![(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)]);
}

#[test]
fn parse_reports_bad_characters_with_line_number() {
    let err = ModuleGrid::parse("##\n#?\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn cells_are_row_major() {
    let g = ModuleGrid::from_rows(&[vec![false, true], vec![true, false]]).unwrap();
    let cells: Vec<_> = g.cells().collect();
    assert_eq!(
        cells,
        vec![(0, 0, false), (0, 1, true), (1, 0, true), (1, 1, false)]
    );
}

#[test]
fn wifi_payload_escapes_reserved_characters() {
    assert_eq!(
        wifi_payload("SmartDashboard-Setup", "configure123"),
        "WIFI:T:WPA;S:SmartDashboard-Setup;P:configure123;;"
    );
    assert_eq!(wifi_payload("a;b", "p:w\\"), "WIFI:T:WPA;S:a\\;b;P:p\\:w\\\\;;");
    assert_eq!(wifi_payload("open", ""), "WIFI:T:nopass;S:open;;");
}
