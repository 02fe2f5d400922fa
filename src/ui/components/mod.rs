pub mod card;
pub mod carousel;
pub mod error_view;
pub mod header;
pub mod spinner;

pub use card::ProductCard;
pub use carousel::{render_carousel, CarouselState};
pub use error_view::{error_banner, render_error_view};
pub use header::{Header, HeaderStyle};
pub use spinner::{render_loading, Spinner};
