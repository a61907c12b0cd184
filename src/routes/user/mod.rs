mod create;
mod get;
mod login;

pub use create::*;
pub use get::*;
pub use login::*;
