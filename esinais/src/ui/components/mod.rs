pub mod auth_modal;
pub mod card_grid;
pub mod create_form;
pub mod delete_confirmation;
pub mod details_modal;
pub mod empty_state;
pub mod expand_viewer;
pub mod filter_input;
pub mod filter_popover;
pub mod form;
pub mod header;
pub mod help_bar;
pub mod help_popup;
pub mod image_viewer;
pub mod loading_indicator;
pub mod notifications_panel;
pub mod popup;
pub mod profile_menu;
pub mod sidebar;
