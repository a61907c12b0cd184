use serde_json::{json, Value};

use crate::helpers::{error_code, TestApp};

#[actix_web::test]
async fn created_product_can_be_fetched(){
    let app = TestApp::spawn_app().await;
    let hotel_id = app.create_hotel("Spice Route").await;
    let product_id = app.create_product(hotel_id, "Burger", 10).await;

    let response = app.get(&format!("/v1/product/{}", product_id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], product_id);
    assert_eq!(body["name"], "Burger");
    assert_eq!(body["stockLeft"], 20);
    assert_eq!(body["hotel_id"], hotel_id);
    assert_eq!(body["price"], 10);
}

#[actix_web::test]
async fn products_are_listed_per_hotel(){
    let app = TestApp::spawn_app().await;
    let spice = app.create_hotel("Spice Route").await;
    let owl = app.create_hotel("Night Owl").await;
    let burger = app.create_product(spice, "Burger", 10).await;
    let fries = app.create_product(spice, "Fries", 4).await;
    app.create_product(owl, "Tea", 2).await;

    let body: Vec<Value> = app.get(&format!("/v1/hotel/{}/products", spice)).await
        .json().await.unwrap();

    let ids: Vec<i64> = body.iter().map(|product| product["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![burger as i64, fries as i64]);
}

#[actix_web::test]
async fn product_with_negative_price_is_rejected(){
    let app = TestApp::spawn_app().await;

    let response = app.post_json("/v1/create/product", &json!({
        "name": "Burger",
        "stockLeft": 5,
        "hotel_id": 1,
        "category": "mains",
        "price": -3
    })).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_code(response).await, "invalidPayload");
}

#[actix_web::test]
async fn non_numeric_product_id_is_a_bad_request(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/v1/product/burger").await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_code(response).await, "invalidParameter");
}

#[actix_web::test]
async fn missing_product_is_not_found(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/v1/product/999").await;

    assert_eq!(response.status().as_u16(), 404);
}
