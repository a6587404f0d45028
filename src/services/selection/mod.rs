//! Single-event selection shared by every block of one preview grid.

use crate::models::event::EventId;

/// What a frame of pointer input did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridInteraction {
    #[default]
    None,
    /// An event block was clicked. The click never also reaches the background.
    BlockClicked(EventId),
    /// Empty grid space was clicked.
    BackgroundClicked,
}

/// Zero or one selected event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<EventId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    pub fn select(&mut self, id: EventId) {
        if self.selected == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, id: EventId) -> bool {
        self.selected == Some(id)
    }

    pub fn selected(&self) -> Option<EventId> {
        self.selected
    }

    /// Fold one frame's interaction into the selection.
    pub fn apply(&mut self, interaction: GridInteraction) {
        match interaction {
            GridInteraction::None => {}
            GridInteraction::BlockClicked(id) => {
                self.select(id);
                log::debug!("Selection toggled by {}: {:?}", id, self.selected);
            }
            GridInteraction::BackgroundClicked => {
                if self.selected.take().is_some() {
                    log::debug!("Selection cleared");
                }
            }
        }
    }
}
