use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use food_ordering::schema::user_carts;
use serde_json::{json, Value};

use crate::helpers::{error_code, TestApp};

async fn seed(app: &TestApp) -> (i32, i32, i32){
    let user_id = app.create_user("ursula@domain.com", "hunter2", "customer").await;
    let hotel_id = app.create_hotel("Spice Route").await;
    let product_id = app.create_product(hotel_id, "Burger", 10).await;
    (user_id, hotel_id, product_id)
}

#[actix_web::test]
async fn updating_a_cart_entry_replaces_its_quantity(){
    let app = TestApp::spawn_app().await;
    let (user_id, _, product_id) = seed(&app).await;

    let response = app.post_json("/v1/add/user/cart", &json!({
        "user_id": user_id, "product_id": product_id, "quantity": 3
    })).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.post_json("/v1/update/user/cart", &json!({
        "user_id": user_id, "product_id": product_id, "quantity": 5
    })).await;
    assert_eq!(response.status().as_u16(), 200);

    let mut conn = app.pool.get().unwrap();
    let quantities: Vec<i32> = user_carts::table
        .filter(user_carts::user_id.eq(user_id))
        .filter(user_carts::product_id.eq(product_id))
        .select(user_carts::quantity)
        .load(&mut conn)
        .unwrap();

    assert_eq!(quantities, vec![5]);
}

#[actix_web::test]
async fn adding_twice_keeps_a_single_row(){
    let app = TestApp::spawn_app().await;
    let (user_id, _, product_id) = seed(&app).await;

    for quantity in [2, 4] {
        let response = app.post_json("/v1/add/user/cart", &json!({
            "user_id": user_id, "product_id": product_id, "quantity": quantity
        })).await;
        assert_eq!(response.status().as_u16(), 200);
    }

    let body: Value = app.get(&format!("/v1/user/cart?userID={}", user_id)).await
        .json().await.unwrap();
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["quantity"], 4);
}

#[actix_web::test]
async fn cart_listing_is_enriched_with_hotel_names(){
    let app = TestApp::spawn_app().await;
    let (user_id, hotel_id, product_id) = seed(&app).await;

    app.post_json("/v1/add/user/cart", &json!({
        "user_id": user_id, "product_id": product_id, "quantity": 2
    })).await;

    let response = app.get(&format!("/v1/user/cart?userID={}", user_id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let entry = &body["products"][0];
    assert_eq!(entry["id"], product_id);
    assert_eq!(entry["name"], "Burger");
    assert_eq!(entry["hotel_id"], hotel_id);
    assert_eq!(entry["hotel_name"], "Spice Route");
    assert_eq!(entry["price"], 10);
    assert_eq!(entry["quantity"], 2);
}

#[actix_web::test]
async fn deleted_entries_leave_the_cart(){
    let app = TestApp::spawn_app().await;
    let (user_id, hotel_id, product_id) = seed(&app).await;
    let fries = app.create_product(hotel_id, "Fries", 4).await;

    for product in [product_id, fries] {
        app.post_json("/v1/add/user/cart", &json!({
            "user_id": user_id, "product_id": product, "quantity": 1
        })).await;
    }

    let response = app.post_json("/v1/delete/user/cart", &json!({
        "user_id": user_id, "product_id": product_id
    })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = app.get(&format!("/v1/user/cart?userID={}", user_id)).await
        .json().await.unwrap();
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], fries);
}

#[actix_web::test]
async fn updating_an_absent_entry_is_not_found(){
    let app = TestApp::spawn_app().await;
    let (user_id, _, product_id) = seed(&app).await;

    let response = app.post_json("/v1/update/user/cart", &json!({
        "user_id": user_id, "product_id": product_id, "quantity": 5
    })).await;

    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn zero_quantity_is_rejected(){
    let app = TestApp::spawn_app().await;
    let (user_id, _, product_id) = seed(&app).await;

    let response = app.post_json("/v1/add/user/cart", &json!({
        "user_id": user_id, "product_id": product_id, "quantity": 0
    })).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_code(response).await, "invalidPayload");
}

#[actix_web::test]
async fn cart_for_unknown_product_is_rejected(){
    let app = TestApp::spawn_app().await;
    let (user_id, _, _) = seed(&app).await;

    let response = app.post_json("/v1/add/user/cart", &json!({
        "user_id": user_id, "product_id": 9999, "quantity": 1
    })).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["errorCode"], "invalidPayload");
    assert_eq!(body["errorDescription"], "referenced user or product does not exist");
}
