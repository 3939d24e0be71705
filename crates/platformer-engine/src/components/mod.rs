pub mod avatar;
pub mod entity;
pub mod trigger;
