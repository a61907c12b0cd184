use chrono::{DateTime, Utc};
use diesel::prelude::{Associations, Identifiable, Insertable, Queryable, QueryableByName, Selectable};
use serde::Deserialize;
use serde::Serialize;

use crate::schema::{hotels, order_products, products, user_carts, user_orders, users};

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct User{
    pub id: i32,
    pub email: String,
    pub phone_number: i64,
    pub password_hash: String,
    pub name: String,
    pub role: String
}

#[derive(Insertable, Debug)]
#[diesel(table_name = users)]
pub struct NewUser{
    pub email: String,
    pub phone_number: i64,
    pub password_hash: String,
    pub name: String,
    pub role: String
}

#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = hotels)]
pub struct Hotel{
    pub id: i32,
    pub name: String,
    pub city: String,
    pub address: String,
    pub state: String
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = hotels)]
pub struct NewHotel{
    pub name: String,
    pub city: String,
    pub address: String,
    pub state: String
}

#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = products)]
pub struct Product{
    pub id: i32,
    pub name: String,
    #[serde(rename = "stockLeft")]
    pub stock_left: i32,
    pub hotel_id: i32,
    pub category: String,
    pub price: i32
}

#[derive(Insertable, Deserialize, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProduct{
    pub name: String,
    #[serde(rename = "stockLeft", alias = "stock_left")]
    pub stock_left: i32,
    pub hotel_id: i32,
    pub category: String,
    pub price: i32
}

// Row shape of the raw cart queries
#[derive(QueryableByName, Debug, Clone, PartialEq)]
#[diesel(table_name = user_carts)]
pub struct CartEntry{
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = user_orders)]
pub struct Order{
    pub id: i32,
    pub user_id: i32,
    pub hotel_id: i32,
    pub phone_number: String,
    pub drive_thru_code: Option<String>,
    pub order_status: String,
    pub is_delivered: bool,
    pub order_total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = user_orders)]
pub struct NewOrder{
    pub user_id: i32,
    pub hotel_id: i32,
    pub phone_number: String,
    pub drive_thru_code: Option<String>,
    pub order_status: String,
    pub is_delivered: bool,
    pub order_total: f64
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(Order))]
#[diesel(table_name = order_products)]
pub struct OrderLineItem{
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price_at_purchase: f64
}

// Line item before its order header exists
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine{
    pub product_id: i32,
    pub quantity: i32,
    pub price_at_purchase: f64
}

#[derive(Insertable, Debug)]
#[diesel(table_name = order_products)]
pub struct NewOrderLineItem{
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price_at_purchase: f64
}

// An order header together with its line items
#[derive(Debug, Clone)]
pub struct OrderWithItems{
    pub order: Order,
    pub items: Vec<OrderLineItem>
}
