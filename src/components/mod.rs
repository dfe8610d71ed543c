pub mod app;
pub mod board_view;
pub mod chat_panel;
pub mod roster_panel;
pub mod toolbar_panel;
