use super::{AppState, FormState, LoadingState};
use crate::events::DataEvent;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::ProfileSaved {
            generation,
            name,
            email,
        } => {
            // Only the latest save of the current session applies
            let current = state.profile.save_generation;
            let superseded = generation != current;
            if superseded || !state.view.logged_in || !state.profile.save.is_loading() {
                tracing::debug!("Discarding stale profile save {generation} (current {current})");
                return;
            }

            tracing::info!("Profile saved");
            state.profile.form = FormState::profile(&name, &email);
            state.profile.name = name;
            state.profile.email = email;
            state.profile.save = LoadingState::Loaded;
        }
    }
}
