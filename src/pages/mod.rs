mod contact;
mod gallery;
mod home;
mod news;
mod team;

pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use news::NewsPage;
pub use team::TeamPage;
