use calendar_preview::utils::time_geometry::{
    format_hour, TimeScale, EVENT_GUTTER, MIN_EVENT_HEIGHT,
};
use proptest::prelude::*;

proptest! {
    /// Property: every labelled hour reads "{1-12} AM|PM"
    #[test]
    fn prop_format_hour_is_twelve_hour(hour in 1..24u32) {
        let label = format_hour(hour);
        let (value, period) = label.split_once(' ').expect("label has a space");
        let value: u32 = value.parse().expect("numeric hour");

        prop_assert!((1..=12).contains(&value));
        prop_assert_eq!(period, if hour >= 12 { "PM" } else { "AM" });
        prop_assert_eq!(value % 12, hour % 12);
    }

    /// Property: height follows the formula and never shrinks as duration grows
    #[test]
    fn prop_block_height_formula_and_monotonic(
        unit in 20.0..120.0f32,
        d in 1..1440u32,
        extra in 0..240u32,
    ) {
        let scale = TimeScale::new(unit);
        let expected = (d as f32 / 60.0 * unit - EVENT_GUTTER).max(MIN_EVENT_HEIGHT);
        prop_assert!((scale.block_height(d) - expected).abs() < 1e-3);
        prop_assert!(scale.block_height(d + extra) >= scale.block_height(d));
        prop_assert!(scale.block_height(d) >= MIN_EVENT_HEIGHT);
    }

    /// Property: later instants sit strictly lower in the grid
    #[test]
    fn prop_top_strictly_increasing(a in 0..1440u32, b in 0..1440u32) {
        prop_assume!(a < b);
        let scale = TimeScale::default();
        prop_assert!(scale.top(a / 60, a % 60) < scale.top(b / 60, b % 60));
    }

    /// Property: the initial scroll offset never goes negative or past the current hour
    #[test]
    fn prop_initial_scroll_offset_bounded(hour in 0..24u32, lead in 0..6u32) {
        let scale = TimeScale::default();
        let offset = scale.initial_scroll_offset(hour, lead);
        prop_assert!(offset >= 0.0);
        prop_assert!(offset <= scale.top(hour, 0));
    }
}

#[test]
fn test_format_hour_edges() {
    assert_eq!(format_hour(0), "");
    assert_eq!(format_hour(12), "12 PM");
    assert_eq!(TimeScale::default().top(0, 0), 0.0);
}
