pub mod category;
pub mod photo;
pub mod stats;
pub mod user;

pub use category::{Category, CategoryLinks};
pub use photo::{Photo, PhotoLinks, PhotoUrls, Quality, RandomFilters};
pub use stats::Stats;
pub use user::{ProfileImage, User, UserLinks};
