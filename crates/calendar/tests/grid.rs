use almanac_calendar::{MonthGrid, days_in_month, shift_month};
use chrono::{Datelike, NaiveDate};

#[test]
fn every_day_owned_exactly_once_across_a_year() {
    let mut seen = 0;
    for month in 1..=12 {
        let grid = MonthGrid::new(2024, month).unwrap();
        let owned = grid
            .weeks()
            .iter()
            .flatten()
            .filter(|d| grid.owns(**d))
            .count();
        assert_eq!(owned as u32, days_in_month(2024, month).unwrap());
        seen += owned;
    }
    assert_eq!(seen, 366);
}

#[test]
fn rows_are_contiguous() {
    let grid = MonthGrid::new(2025, 8).unwrap();
    let days: Vec<NaiveDate> = grid.weeks().iter().flatten().copied().collect();
    for pair in days.windows(2) {
        assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
    }
}

#[test]
fn stepping_through_months_matches_grids() {
    let (mut year, mut month) = (2024, 10);
    for _ in 0..7 {
        let grid = MonthGrid::new(year, month).unwrap();
        assert_eq!(grid.month(), month);
        assert_eq!(grid.year(), year);
        (year, month) = shift_month(year, month, 1);
    }
    assert_eq!((year, month), (2025, 5));
}
