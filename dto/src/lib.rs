pub mod attraction;
pub mod banner;
pub mod course;
pub mod format;
pub mod join;
pub mod member;
pub mod membership_level;
pub mod prophet;
pub mod spotlight;
pub mod view_mode;
pub mod visit;
pub mod weather;
