pub mod screens;
pub mod widgets;
