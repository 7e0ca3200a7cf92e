mod gallery;
mod layout;
mod product;

pub use gallery::Gallery;
pub use layout::SiteLayout;
pub use product::ProductDetail;
