pub mod config;
pub mod constants;
pub mod controller;
pub mod mip;
pub mod platform;
pub mod session;
pub mod texture;
pub mod tier;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use mip::*;
pub use platform::*;
pub use session::*;
pub use texture::*;
pub use tier::*;
