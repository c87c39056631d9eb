//! Built-in widgets: Dialog, Tabs, Carousel.

pub mod carousel;
pub mod dialog;
pub mod tabs;

pub use carousel::{Carousel, CarouselConfig};
pub use dialog::{Dialog, DialogConfig};
pub use tabs::{Tabs, TabsConfig};
