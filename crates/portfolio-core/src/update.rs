//! Main update function - handles all state transitions

use crate::message::Message;
use crate::prelude::*;
use crate::state::PageState;

/// Applies `msg` to `state`. Returns whether anything the page renders
/// changed.
pub fn update(state: &mut PageState, msg: Message) -> bool {
    match msg {
        Message::ToggleTheme => {
            state.theme = state.theme.toggled();
            debug!("Theme switched to {:?}", state.theme);
            true
        }

        Message::ToggleMobileNav => {
            state.mobile_nav_open = !state.mobile_nav_open;
            true
        }

        Message::MobileLinkSelected(section) => {
            trace!("Mobile link selected: {}", section);
            let changed = state.mobile_nav_open;
            state.mobile_nav_open = false;
            changed
        }

        Message::IntersectionBatch(batch) => {
            for report in &batch {
                state.in_band.record(report);
            }
            trace!("{} sections in band", state.in_band.len());
            match state.tie_break.resolve(&batch, &state.in_band) {
                Some(section) if section != state.active => {
                    debug!("Active section: {} -> {}", state.active, section);
                    state.active = section;
                    true
                }
                _ => false,
            }
        }
    }
}
