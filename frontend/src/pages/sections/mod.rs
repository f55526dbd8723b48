pub mod about;
pub mod compliance;
pub mod contact;
pub mod faq;
pub mod hero;
pub mod portfolio;
pub mod products;
pub mod services;
pub mod testimonials;
