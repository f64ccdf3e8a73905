pub mod badge;
pub mod icons;
pub mod image;
pub mod navbar;
pub mod reveal;
