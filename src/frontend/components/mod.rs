pub use alert::*;
pub use button::*;
pub use footer::*;
pub use input::*;
pub use logo::*;
pub use nav::*;
pub use section::*;

mod alert;
mod button;
mod footer;
mod input;
mod logo;
mod nav;
mod section;
