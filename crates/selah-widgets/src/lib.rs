//! Shared widgets and theme for Selah applications

pub mod button_styles;
pub mod playing_bar;
pub mod subscription;
pub mod theme;

pub use playing_bar::playing_bar;
pub use subscription::{mpsc_subscription, mpsc_subscription_owned};
