pub use store::*;
pub use submission::*;

mod store;
mod submission;
