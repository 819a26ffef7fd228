pub mod app;
pub mod certificate;
pub mod config;
pub mod data;
pub mod error;
pub mod markscheme;
pub mod model;
pub mod progress;
pub mod quiz;
pub mod ui;
pub mod view_models;

pub use app::OsceApp;
