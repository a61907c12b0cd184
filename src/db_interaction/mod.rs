//! Storage adapter. [`FoodRepository`] is the contract the business logic
//! depends on; [`PgRepository`] fulfils it with diesel over an r2d2 pool.
//!
//! All methods are blocking and are expected to run on the blocking thread
//! pool (see [`crate::telemetry::spawn_blocking_with_tracing`]).

use std::{error::Error, fmt::Debug};

use thiserror::Error;

use crate::{models::{CartEntry, Hotel, NewHotel, NewOrder, NewOrderLine, NewProduct, NewUser, Order, OrderWithItems, Product, User}, utils::{error_fmt_chain, DbConnection, DbPool}};

pub mod cart;
pub mod hotel;
pub mod orders;
pub mod product;
pub mod user;

/// Whether order creation trusts the client supplied prices and ignores
/// stock, or checks both and decrements stock inside the order transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockPolicy{
    Trust,
    Reserve
}

pub trait FoodRepository: Send + Sync {
    fn create_user(&self, user: NewUser) -> Result<User, RepositoryError>;
    fn get_user_by_id(&self, user_id: i32) -> Result<User, RepositoryError>;
    fn get_user_by_email(&self, email: &str) -> Result<User, RepositoryError>;

    fn create_product(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    fn get_product_by_id(&self, product_id: i32) -> Result<Product, RepositoryError>;
    fn get_products_by_hotel(&self, hotel_id: i32) -> Result<Vec<Product>, RepositoryError>;
    /// Products matching `product_ids`; ids with no row are simply absent.
    fn get_product_details(&self, product_ids: &[i32]) -> Result<Vec<Product>, RepositoryError>;

    fn create_hotel(&self, hotel: NewHotel) -> Result<Hotel, RepositoryError>;
    fn get_hotels(&self) -> Result<Vec<Hotel>, RepositoryError>;
    fn get_hotel_by_id(&self, hotel_id: i32) -> Result<Hotel, RepositoryError>;

    /// Inserts the entry, replacing the quantity if the pair already exists.
    fn add_product_to_cart(&self, entry: CartEntry) -> Result<(), RepositoryError>;
    fn delete_product_from_cart(&self, user_id: i32, product_id: i32) -> Result<(), RepositoryError>;
    fn update_quantity_in_cart(&self, entry: CartEntry) -> Result<(), RepositoryError>;
    fn get_user_cart(&self, user_id: i32) -> Result<Vec<CartEntry>, RepositoryError>;

    /// Persists the header and its line items atomically.
    fn create_order(
        &self,
        order: NewOrder,
        lines: Vec<NewOrderLine>,
        policy: StockPolicy
    ) -> Result<Order, RepositoryError>;
    fn get_user_orders(&self, user_id: i32) -> Result<Vec<OrderWithItems>, RepositoryError>;
    fn mark_order_completed(&self, order_id: i32) -> Result<(), RepositoryError>;
}

#[derive(Error)]
pub enum RepositoryError{
    #[error("{entity} {id} not found")]
    NotFound{
        entity: &'static str,
        id: String
    },
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("referenced record does not exist: {0}")]
    ForeignKeyViolation(String),
    #[error("not enough stock left for product {product_id}")]
    InsufficientStock{
        product_id: i32
    },
    #[error("price {submitted} for product {product_id} does not match current price {current}")]
    PriceMismatch{
        product_id: i32,
        current: i32,
        submitted: f64
    },
    #[error("Failed to get connection from pool")]
    Pool(#[from] r2d2::Error),
    #[error("Failed to run query")]
    Query(#[source] diesel::result::Error)
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self{
        RepositoryError::NotFound{
            entity,
            id: id.to_string()
        }
    }

    pub fn is_not_found(&self) -> bool{
        matches!(self, RepositoryError::NotFound{ .. })
    }
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(e: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        match e {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
                RepositoryError::UniqueViolation(info.message().to_string())
            },
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info) => {
                RepositoryError::ForeignKeyViolation(info.message().to_string())
            },
            _ => RepositoryError::Query(e)
        }
    }
}

impl Debug for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[derive(Clone)]
pub struct PgRepository{
    pool: DbPool
}

impl PgRepository {
    pub fn new(pool: DbPool) -> Self{
        Self{ pool }
    }

    fn conn(&self) -> Result<DbConnection, RepositoryError>{
        Ok(self.pool.get()?)
    }
}

impl FoodRepository for PgRepository {
    fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut conn = self.conn()?;
        user::insert_user(&mut conn, new_user)
    }

    fn get_user_by_id(&self, user_id: i32) -> Result<User, RepositoryError> {
        let mut conn = self.conn()?;
        user::get_user_by_id(&mut conn, user_id)
    }

    fn get_user_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        let mut conn = self.conn()?;
        user::get_user_by_email(&mut conn, email)
    }

    fn create_product(&self, new_product: NewProduct) -> Result<Product, RepositoryError> {
        let mut conn = self.conn()?;
        product::insert_product(&mut conn, new_product)
    }

    fn get_product_by_id(&self, product_id: i32) -> Result<Product, RepositoryError> {
        let mut conn = self.conn()?;
        product::get_product_by_id(&mut conn, product_id)
    }

    fn get_products_by_hotel(&self, hotel_id: i32) -> Result<Vec<Product>, RepositoryError> {
        let mut conn = self.conn()?;
        product::get_products_by_hotel(&mut conn, hotel_id)
    }

    fn get_product_details(&self, product_ids: &[i32]) -> Result<Vec<Product>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(Vec::new())
        }
        let mut conn = self.conn()?;
        product::get_products_by_ids(&mut conn, product_ids)
    }

    fn create_hotel(&self, new_hotel: NewHotel) -> Result<Hotel, RepositoryError> {
        let mut conn = self.conn()?;
        hotel::insert_hotel(&mut conn, new_hotel)
    }

    fn get_hotels(&self) -> Result<Vec<Hotel>, RepositoryError> {
        let mut conn = self.conn()?;
        hotel::get_hotels(&mut conn)
    }

    fn get_hotel_by_id(&self, hotel_id: i32) -> Result<Hotel, RepositoryError> {
        let mut conn = self.conn()?;
        hotel::get_hotel_by_id(&mut conn, hotel_id)
    }

    fn add_product_to_cart(&self, entry: CartEntry) -> Result<(), RepositoryError> {
        let mut conn = self.conn()?;
        cart::add_product_to_cart(&mut conn, &entry)
    }

    fn delete_product_from_cart(&self, user_id: i32, product_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.conn()?;
        cart::delete_product_from_cart(&mut conn, user_id, product_id)
    }

    fn update_quantity_in_cart(&self, entry: CartEntry) -> Result<(), RepositoryError> {
        let mut conn = self.conn()?;
        cart::update_quantity_in_cart(&mut conn, &entry)
    }

    fn get_user_cart(&self, user_id: i32) -> Result<Vec<CartEntry>, RepositoryError> {
        let mut conn = self.conn()?;
        cart::get_user_cart(&mut conn, user_id)
    }

    fn create_order(
        &self,
        order: NewOrder,
        lines: Vec<NewOrderLine>,
        policy: StockPolicy
    ) -> Result<Order, RepositoryError> {
        let mut conn = self.conn()?;
        orders::create_order(&mut conn, order, lines, policy)
    }

    fn get_user_orders(&self, user_id: i32) -> Result<Vec<OrderWithItems>, RepositoryError> {
        let mut conn = self.conn()?;
        orders::get_user_orders(&mut conn, user_id)
    }

    fn mark_order_completed(&self, order_id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.conn()?;
        orders::mark_order_completed(&mut conn, order_id)
    }
}
