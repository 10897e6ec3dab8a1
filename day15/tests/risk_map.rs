use day15::{Error, Position, RiskMap, RiskMapBuilder};

fn map_of(rows: &[&str]) -> RiskMap {
    let mut builder = RiskMapBuilder::new();
    for row in rows {
        builder.add_row(row).unwrap();
    }

    builder.build()
}

#[test]
fn single_cell_map_costs_nothing() {
    assert_eq!(map_of(&["1"]).min_total_risk(1), Ok(0));
}

#[test]
fn single_row_map_has_one_path() {
    assert_eq!(map_of(&["555"]).min_total_risk(1), Ok(10));
}

#[test]
fn three_by_three_regression() {
    // Cheapest path goes down, down, right, right: 1 + 2 + 1 + 1.
    assert_eq!(map_of(&["116", "138", "211"]).min_total_risk(1), Ok(5));
}

#[test]
fn entry_risk_matches_tile_at_scale_one() {
    let map = map_of(&["123", "456"]);
    let expected = [[1, 2, 3], [4, 5, 6]];
    for (r, row) in expected.iter().enumerate() {
        for (c, risk) in row.iter().enumerate() {
            assert_eq!(map.entry_risk(&Position::new(r, c), 1), Some(*risk));
        }
    }
    assert_eq!(map.entry_risk(&Position::new(2, 0), 1), None);
    assert_eq!(map.entry_risk(&Position::new(0, 3), 1), None);
}

#[test]
fn entry_risk_wraps_above_nine() {
    let map = map_of(&["9"]);
    assert_eq!(map.entry_risk(&Position::new(0, 0), 2), Some(9));
    assert_eq!(map.entry_risk(&Position::new(0, 1), 2), Some(1));
    assert_eq!(map.entry_risk(&Position::new(1, 1), 2), Some(2));
    assert_eq!(map.min_total_risk(2), Ok(3));
}

#[test]
fn zero_digit_derives_risk_nine() {
    let map = map_of(&["00", "00"]);
    assert_eq!(map.entry_risk(&Position::new(0, 1), 1), Some(9));
    assert_eq!(map.min_total_risk(1), Ok(18));
}

#[test]
fn raising_a_risk_never_lowers_the_total() {
    let base_risk = map_of(&["116", "138", "211"]).min_total_risk(1).unwrap();
    let raised_risk = map_of(&["116", "938", "211"]).min_total_risk(1).unwrap();
    assert!(raised_risk >= base_risk);
}

#[test]
fn repeated_solves_agree() {
    let map = map_of(&["1163751742", "1381373672", "2136511328"]);
    assert_eq!(map.min_total_risk(5), map.min_total_risk(5));
}

#[test]
fn zero_scale_is_rejected() {
    assert_eq!(map_of(&["12", "34"]).min_total_risk(0), Err(Error::ZeroScale));
}

#[test]
fn empty_map_is_rejected() {
    let map = RiskMapBuilder::new().build();
    assert_eq!(map.min_total_risk(1), Err(Error::EmptyRiskMap));
}

#[test]
fn ragged_rows_are_rejected() {
    let mut builder = RiskMapBuilder::new();
    builder.add_row("12").unwrap();
    assert_eq!(builder.add_row("123"), Err(Error::InconsistentRow(2, 3)));
}

#[test]
fn non_digit_rows_are_rejected() {
    let mut builder = RiskMapBuilder::new();
    assert_eq!(builder.add_row("1a3"), Err(Error::InvalidCharForRisk('a')));
}
