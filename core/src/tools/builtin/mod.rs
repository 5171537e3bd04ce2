//! Built-in skills

pub mod weather;

pub use weather::{WeatherTool, WeatherToolFactory};
