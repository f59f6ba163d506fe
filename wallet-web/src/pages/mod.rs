//! Page modules

pub mod about;
pub mod home;
pub mod network;

pub use about::AboutPage;
pub use home::HomePage;
pub use network::NetworkPage;
