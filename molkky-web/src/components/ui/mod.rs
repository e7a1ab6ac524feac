pub mod history_panel;
pub mod penalty_dialog;
pub mod roster_editor;
pub mod score_pad;
pub mod scoreboard;
pub mod settings_dialog;
pub mod team_builder;
pub mod winner_screen;
