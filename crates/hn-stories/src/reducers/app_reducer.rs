use crate::actions::{Action, GlobalAction, StoriesAction};
use crate::reducers::{
    search_form_reducer, search_reducer, stories_reducer, story_list_reducer,
};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => return reduce_global(state, global),

        Action::SearchForm(form_action) => {
            state.search_form = search_form_reducer::reduce(state.search_form, form_action);
        }

        Action::Search(search_action) => {
            state.search = search_reducer::reduce(state.search, search_action);
        }

        Action::Stories(stories_action) => {
            let applies_new_data = matches!(
                stories_action,
                StoriesAction::FetchSuccess { request, .. } if state.stories.in_flight == Some(*request)
            );

            state.stories = stories_reducer::reduce(state.stories, stories_action);

            if applies_new_data {
                state.story_list.cursor = 0;
            }
            state.story_list = story_list_reducer::clamp(state.story_list, state.stories.data.len());
        }

        Action::StoryList(list_action) => {
            state.story_list =
                story_list_reducer::reduce(state.story_list, list_action, state.stories.data.len());
        }

        // Translated or observed by middleware only
        Action::Event(_) | Action::Navigate(_) | Action::TextInput(_) | Action::ViewContext(_) => {}
    }

    state
}

fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(new_view) => {
            // Pushing the view that is already on top toggles it off
            let is_duplicate = state
                .view_stack
                .last()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if is_duplicate {
                log::debug!(
                    "Popping view from the stack, because this view is on top already: {:?}",
                    new_view.view_id()
                );
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::Close => {
            // If there's only one view left, quit the application
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::KeyPressed(_) => {}
    }
    state
}
