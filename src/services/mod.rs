//! Application logic. Handlers depend on [`FoodService`]; the only
//! implementation, [`FoodOrderingService`], is generic over the storage
//! contract so it can be driven by Postgres or by the in-memory store used in
//! tests.

use std::{error::Error, fmt::Debug};

use thiserror::Error;

use crate::{db_interaction::RepositoryError, domain::{CartProductKey, CartProducts, CartResponse, CreateOrderRequest, LoginRequest, LoginResponse, OrderResponse, SignupRequest, UserView}, models::{Hotel, NewHotel, NewProduct, Product}, utils::error_fmt_chain};

pub mod enrichment;
pub mod food_service;


pub use food_service::FoodOrderingService;

pub trait FoodService: Send + Sync {
    /// Hashes the password and stores the user, returning the new id.
    fn create_user(&self, request: SignupRequest) -> Result<i32, ServiceError>;
    fn user_login(&self, request: LoginRequest) -> Result<LoginResponse, ServiceError>;
    fn get_user_by_id(&self, user_id: i32) -> Result<UserView, ServiceError>;

    fn create_product(&self, product: NewProduct) -> Result<i32, ServiceError>;
    fn get_product_by_id(&self, product_id: i32) -> Result<Product, ServiceError>;
    fn get_products_by_hotel(&self, hotel_id: i32) -> Result<Vec<Product>, ServiceError>;

    fn create_hotel(&self, hotel: NewHotel) -> Result<i32, ServiceError>;
    fn get_hotels(&self) -> Result<Vec<Hotel>, ServiceError>;

    fn add_product_to_cart(&self, item: CartProducts) -> Result<(), ServiceError>;
    fn delete_product_from_cart(&self, key: CartProductKey) -> Result<(), ServiceError>;
    fn update_quantity_in_cart(&self, item: CartProducts) -> Result<(), ServiceError>;
    fn get_user_cart(&self, user_id: i32) -> Result<CartResponse, ServiceError>;

    /// Stores the order exactly as submitted, returning the new order id.
    fn create_order(&self, hotel_id: i32, order: CreateOrderRequest) -> Result<i32, ServiceError>;
    fn get_user_orders(&self, user_id: i32) -> Result<Vec<OrderResponse>, ServiceError>;
    fn mark_order_completed(&self, order_id: i32) -> Result<(), ServiceError>;
}

#[derive(Error)]
pub enum ServiceError{
    #[error("{0}")]
    InvalidPayload(String),
    #[error("{0}")]
    InvalidOrder(String),
    #[error("{0}")]
    InvalidEmail(String),
    #[error("{0}")]
    InvalidPhoneNumber(String),
    #[error("email or password is incorrect")]
    InvalidCredentials,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    InsufficientStock(String),
    #[error("unexpected error occured")]
    Unexpected(#[from] anyhow::Error)
}

impl Debug for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound{ .. } => ServiceError::NotFound(e.to_string()),
            RepositoryError::UniqueViolation(_) => ServiceError::Conflict("record already exists".to_string()),
            RepositoryError::ForeignKeyViolation(_) => {
                ServiceError::InvalidPayload("referenced user or product does not exist".to_string())
            },
            RepositoryError::InsufficientStock{ .. } => ServiceError::InsufficientStock(e.to_string()),
            RepositoryError::PriceMismatch{ .. } => ServiceError::InvalidOrder(e.to_string()),
            RepositoryError::Pool(_) | RepositoryError::Query(_) => {
                ServiceError::Unexpected(anyhow::Error::new(e))
            }
        }
    }
}
