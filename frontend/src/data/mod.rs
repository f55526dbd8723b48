pub mod content;
pub mod products;
