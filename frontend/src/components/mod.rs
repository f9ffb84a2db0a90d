pub mod home_navbar;
pub mod options_navbar;
pub mod schedule_card;
pub mod schedule_table;
pub mod sidebar;
