pub mod auto_advance;
pub mod breakpoint;
pub mod carousel;
pub mod disclosure;
pub mod filter;
pub mod navigation;
pub mod slideshow;
pub mod viewport;
