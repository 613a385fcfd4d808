pub mod binder;
pub mod pointer;

pub use binder::bind_number_dragger;
pub use pointer::NumberDragger;
