pub mod bike;
pub mod home;
pub mod not_found;

pub use bike::BikePage;
pub use home::Home;
pub use not_found::NotFound;
