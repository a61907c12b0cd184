mod cart;
mod error;
mod health_check;
mod hotel;
mod order;
mod product;
mod user;

pub use cart::*;
pub use error::*;
pub use health_check::*;
pub use hotel::*;
pub use order::*;
pub use product::*;
pub use user::*;
