use calendar_preview::models::event::EventId;
use calendar_preview::services::selection::{GridInteraction, SelectionState};
use proptest::prelude::*;

fn event_id() -> impl Strategy<Value = EventId> {
    (0..7usize, 0..24u32, 0..60u32).prop_map(|(weekday_index, start_hour, start_minute)| EventId {
        weekday_index,
        start_hour,
        start_minute,
    })
}

proptest! {
    /// Property: selecting the same identity twice leaves nothing selected
    #[test]
    fn prop_toggle_law(x in event_id()) {
        let mut selection = SelectionState::new();
        selection.select(x);
        selection.select(x);
        prop_assert_eq!(selection.selected(), None);
    }

    /// Property: selecting a different identity replaces the previous one
    #[test]
    fn prop_replace_law(x in event_id(), y in event_id()) {
        prop_assume!(x != y);
        let mut selection = SelectionState::new();
        selection.select(x);
        selection.select(y);
        prop_assert_eq!(selection.selected(), Some(y));
    }

    /// Property: a background click always clears
    #[test]
    fn prop_background_clears(clicks in proptest::collection::vec(event_id(), 0..8)) {
        let mut selection = SelectionState::new();
        for id in clicks {
            selection.apply(GridInteraction::BlockClicked(id));
        }
        selection.apply(GridInteraction::BackgroundClicked);
        prop_assert_eq!(selection.selected(), None);
    }
}
