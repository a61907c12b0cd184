use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::UserCartProduct;

pub const ORDER_STATUS_PENDING: &str = "pending";

fn default_status() -> String{
    ORDER_STATUS_PENDING.to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateOrderRequest{
    pub user_id: i32,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_thru_code: Option<String>,
    #[serde(default = "default_status")]
    pub order_status: String,
    pub products: Vec<OrderProductRequest>,
    #[serde(default)]
    pub is_delivered: bool,
    pub order_total: f64
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderProductRequest{
    pub product_id: i32,
    pub quantity: i32,
    pub price_at_purchase: f64
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderResponse{
    pub id: i32,
    pub user_id: i32,
    pub hotel_id: i32,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_thru_code: Option<String>,
    pub order_status: String,
    pub is_delivered: bool,
    pub order_total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub products: Vec<UserCartProduct>
}
