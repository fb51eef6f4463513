//! Interactive training terminal.

mod app;
mod screens;

pub use app::run;
