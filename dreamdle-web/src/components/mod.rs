pub mod clue_display;
pub mod guess_card;
pub mod guess_input;
pub mod guess_table;
pub mod header;
pub mod victory_modal;
