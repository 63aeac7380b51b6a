pub mod counter_reducer;
pub mod history_reducer;
pub mod lifecycle_reducer;
