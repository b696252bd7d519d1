pub mod add;
pub mod balance;
pub mod categories;
pub mod list;
pub mod setup;
pub mod ui;
