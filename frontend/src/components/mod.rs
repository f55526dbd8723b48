pub mod footer;
pub mod navbar;
pub mod reveal;
pub mod section_heading;
pub mod star_rating;
