use almanac_astro::{Annotator, Location};
use almanac_events::{EventRule, Expander, parse_rules};
use almanac_geometry::Region;
use almanac_layout::{
    Anchor, Element, LayoutConfig, LayoutError, MonthFit, PageGeometry, compose_page, layout,
};
use approx::assert_abs_diff_eq;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn vilnius() -> Annotator {
    Annotator::new(Location::named("Vilnius").unwrap())
}

fn rules() -> Vec<EventRule> {
    parse_rules(
        "# family\n\
         🎂 Ona {age} ; anniversary ; 1990-03-05 ; FREQ=YEARLY\n\
         Yoga ; generic ; FREQ=WEEKLY;BYDAY=WE\n",
    )
    .unwrap()
}

fn canvas(width: f64) -> Region {
    Region::within(&Region::root(width + 20.0, 210.0), 10.0, 20.0, width, 180.0)
}

fn content(element: &Element) -> Option<&str> {
    match element {
        Element::Text { content, .. } => Some(content),
        _ => None,
    }
}

fn texts(elements: &[Element]) -> Vec<&str> {
    elements.iter().filter_map(content).collect()
}

fn month_captions(elements: &[Element]) -> usize {
    texts(elements).iter().filter(|t| t.contains(" | ")).count()
}

#[test]
fn exactly_three_months_fit() {
    let config = LayoutConfig::new().with_fit(MonthFit::Fit { day_width: 5.0 });
    let elements = layout(
        &canvas(120.0),
        date(2024, 3, 4),
        &[],
        &Expander::default(),
        &vilnius(),
        &config,
    )
    .unwrap();
    assert_eq!(month_captions(&elements), 3);
}

#[test]
fn two_point_nine_months_fit_two() {
    let config = LayoutConfig::new().with_fit(MonthFit::Fit { day_width: 5.0 });
    let elements = layout(
        &canvas(116.0),
        date(2024, 3, 4),
        &[],
        &Expander::default(),
        &vilnius(),
        &config,
    )
    .unwrap();
    assert_eq!(month_captions(&elements), 2);
    // No day number of a third month column.
    let third_column = 10.0 + 16.0 * 5.0;
    assert!(elements.iter().all(|e| match e {
        Element::Text { x, font_size, .. } if *font_size == 3.0 => *x < third_column,
        _ => true,
    }));
}

#[test]
fn layout_is_deterministic() {
    let rules = rules();
    let config = LayoutConfig::default();
    let run = || {
        layout(
            &canvas(277.0),
            date(2024, 3, 4),
            &rules,
            &Expander::default(),
            &vilnius(),
            &config,
        )
        .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn every_owned_day_is_labelled_once() {
    let elements = layout(
        &canvas(277.0),
        date(2024, 3, 4),
        &[],
        &Expander::default(),
        &vilnius(),
        &LayoutConfig::default(),
    )
    .unwrap();
    let day_numbers = elements
        .iter()
        .filter(|e| match e {
            Element::Text {
                content,
                font_size,
                anchor: Anchor::End,
                ..
            } => *font_size == 3.0 && content.parse::<u32>().is_ok(),
            _ => false,
        })
        .count();
    // March through September 2024.
    assert_eq!(day_numbers, 31 + 30 + 31 + 30 + 31 + 31 + 30);
}

#[test]
fn year_label_once_per_year() {
    let elements = layout(
        &canvas(277.0),
        date(2024, 11, 4),
        &[],
        &Expander::default(),
        &vilnius(),
        &LayoutConfig::default(),
    )
    .unwrap();
    let texts = texts(&elements);
    assert_eq!(texts.iter().filter(|t| **t == "2024").count(), 1);
    assert_eq!(texts.iter().filter(|t| **t == "2025").count(), 1);
}

#[test]
fn twenty_eight_day_cells() {
    let canvas = canvas(277.0);
    let elements = layout(
        &canvas,
        date(2024, 3, 4),
        &[],
        &Expander::default(),
        &vilnius(),
        &LayoutConfig::default(),
    )
    .unwrap();
    let cell_width = canvas.width() / 7.0 - 1.0;
    let cells: Vec<(f64, f64)> = elements
        .iter()
        .filter_map(|e| match e {
            Element::Rect { x, y, width, .. } if (*width - cell_width).abs() < 1e-9 => {
                Some((*x, *y))
            }
            _ => None,
        })
        .collect();
    assert_eq!(cells.len(), 28);
    assert_abs_diff_eq!(cells[0].0, canvas.left() - 0.5 + 1.0);
    // Only March holds the paged weeks.
    let rects = elements
        .iter()
        .filter(|e| matches!(e, Element::Rect { .. }))
        .count();
    assert_eq!(rects, 29);
}

#[test]
fn events_are_split_into_icon_and_text() {
    let elements = layout(
        &canvas(277.0),
        date(2024, 3, 4),
        &rules(),
        &Expander::default(),
        &vilnius(),
        &LayoutConfig::default(),
    )
    .unwrap();
    let icon = elements
        .iter()
        .find(|e| content(e) == Some("🎂"))
        .unwrap();
    let text = elements
        .iter()
        .find(|e| content(e) == Some("Ona 34"))
        .unwrap();
    match (icon, text) {
        (
            Element::Text {
                x: ix,
                y: iy,
                anchor: Anchor::Middle,
                ..
            },
            Element::Text { x: tx, y: ty, .. },
        ) => {
            assert_abs_diff_eq!(*iy, *ty);
            assert_abs_diff_eq!(*tx - *ix, 3.0);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(texts(&elements).iter().filter(|t| **t == "Yoga").count(), 4);
}

#[test]
fn events_stay_whole_without_splitting() {
    let elements = layout(
        &canvas(277.0),
        date(2024, 3, 4),
        &rules(),
        &Expander::default(),
        &vilnius(),
        &LayoutConfig::new().with_split_icons(false),
    )
    .unwrap();
    assert!(texts(&elements).contains(&"🎂 Ona 34"));
    assert!(!texts(&elements).contains(&"🎂"));
}

#[test]
fn cells_carry_zodiac_and_times() {
    let elements = layout(
        &canvas(277.0),
        date(2024, 3, 4),
        &[],
        &Expander::default(),
        &vilnius(),
        &LayoutConfig::default(),
    )
    .unwrap();
    let texts = texts(&elements);
    assert!(texts.contains(&"♓"));
    assert!(texts.contains(&"♈"));
    assert_eq!(texts.iter().filter(|t| t.starts_with('↑')).count(), 28);
    assert_eq!(texts.iter().filter(|t| t.starts_with('☀')).count(), 28);
}

#[test]
fn polar_night_fails_the_page() {
    let tromso = Annotator::new(Location::named("Tromsø").unwrap());
    let result = layout(
        &canvas(277.0),
        date(2024, 12, 9),
        &[],
        &Expander::default(),
        &tromso,
        &LayoutConfig::default(),
    );
    assert!(matches!(result, Err(LayoutError::Astro(_))));
}

#[test]
fn page_past_the_last_date_is_an_error() {
    let start = NaiveDate::MAX - chrono::Days::new(20);
    let result = layout(
        &canvas(277.0),
        start,
        &[],
        &Expander::default(),
        &vilnius(),
        &LayoutConfig::default(),
    );
    assert_eq!(result, Err(LayoutError::DateOutOfRange { start }));
}

#[test]
fn full_page_with_markers() {
    let page = compose_page(
        &PageGeometry::default(),
        date(2024, 3, 4),
        &rules(),
        &Expander::default(),
        &vilnius(),
        &LayoutConfig::default(),
    )
    .unwrap();
    assert_abs_diff_eq!(page.width, 297.0);
    assert!(matches!(page.elements[0], Element::Line { .. }));
    let lines = page
        .elements
        .iter()
        .filter(|e| matches!(e, Element::Line { .. }))
        .count();
    assert_eq!(lines, 3);

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["start"], "2024-03-04");
    assert_eq!(json["elements"].as_array().unwrap().len(), page.elements.len());
}
