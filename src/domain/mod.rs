pub mod cart;
pub mod order;
pub mod phone_number;
pub mod response;
pub mod user;
pub mod user_email;

pub use cart::{CartProductKey, CartProducts, CartQuery, CartResponse, UserCartProduct};
pub use order::{CreateOrderRequest, OrderProductRequest, OrderResponse};
pub use phone_number::PhoneNumberDomain;
pub use response::CustomResponse;
pub use user::{LoginRequest, LoginResponse, SignupRequest, UserView};
pub use user_email::UserEmail;
