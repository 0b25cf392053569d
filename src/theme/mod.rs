//! Visual theme for the Personal Finance Survey.

mod styles;

pub use styles::GLOBAL_STYLES;
