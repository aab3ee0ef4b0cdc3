pub use admin::*;
pub use contact::*;
pub use enroll::*;
pub use home::*;
pub use legal::*;
pub use purchase::*;
pub use store_map::*;

mod admin;
mod contact;
mod enroll;
mod home;
mod legal;
mod purchase;
mod store_map;
