pub mod court;
pub mod catalog;
pub mod booking;
pub mod tournament;
pub mod message;
