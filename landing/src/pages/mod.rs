// Portfolio routes
// Built by Axel Sundqvist (c)2025

mod home;
mod not_found;
mod post;
mod tour;

pub use home::HomePage;
pub use not_found::NotFound;
pub use post::PostPage;
pub use tour::TourPage;
