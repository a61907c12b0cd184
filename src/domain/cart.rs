use serde::{Deserialize, Serialize};

use crate::models::{Hotel, Product};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartProducts{
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartProductKey{
    pub user_id: i32,
    pub product_id: i32
}

#[derive(Deserialize, Debug)]
pub struct CartQuery{
    #[serde(rename = "userID")]
    pub user_id: i32
}

/// A product joined with the name of the hotel selling it, plus the
/// quantity the user holds (and, for orders, the price paid).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserCartProduct{
    pub id: i32,
    pub name: String,
    #[serde(rename = "stockLeft")]
    pub stock_left: i32,
    pub hotel_id: i32,
    pub category: String,
    pub price: i32,
    pub hotel_name: String,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_at_purchase: Option<f64>
}

impl UserCartProduct {
    pub fn new(product: &Product, hotel: &Hotel, quantity: i32) -> Self{
        Self{
            id: product.id,
            name: product.name.clone(),
            stock_left: product.stock_left,
            hotel_id: product.hotel_id,
            category: product.category.clone(),
            price: product.price,
            hotel_name: hotel.name.clone(),
            quantity,
            price_at_purchase: None
        }
    }

    pub fn with_price_at_purchase(mut self, price: f64) -> Self{
        self.price_at_purchase = Some(price);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CartResponse{
    pub products: Vec<UserCartProduct>
}
