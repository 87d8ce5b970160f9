pub mod app_reducer;
pub mod search_form_reducer;
pub mod search_reducer;
pub mod stories_reducer;
pub mod story_list_reducer;
