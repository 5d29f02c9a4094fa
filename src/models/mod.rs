mod consent;
mod contact;
mod news;

pub use consent::*;
pub use contact::*;
pub use news::*;
