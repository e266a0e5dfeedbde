pub mod app;
pub mod header;
pub mod home;
pub mod booking;
pub mod community;
pub mod about;
pub mod profile;
pub mod chat_widget;
pub mod settings;
pub mod settings_io;
