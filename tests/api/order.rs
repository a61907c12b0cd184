use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use food_ordering::schema::{hotels, order_products, user_orders};
use serde_json::{json, Value};

use crate::helpers::{created_id, error_code, TestApp};

struct Seeded{
    user_id: i32,
    hotel_id: i32,
    burger: i32,
    fries: i32
}

async fn seed(app: &TestApp) -> Seeded{
    let user_id = app.create_user("ursula@domain.com", "hunter2", "customer").await;
    let hotel_id = app.create_hotel("Spice Route").await;
    let burger = app.create_product(hotel_id, "Burger", 10).await;
    let fries = app.create_product(hotel_id, "Fries", 4).await;

    Seeded{ user_id, hotel_id, burger, fries }
}

fn order_body(seeded: &Seeded) -> Value{
    json!({
        "user_id": seeded.user_id,
        "phone_number": "650-253-0000",
        "drive_thru_code": "DT-7",
        "order_status": "pending",
        "is_delivered": false,
        "order_total": 27.5,
        "products": [
            { "product_id": seeded.burger, "quantity": 2, "price_at_purchase": 9.75 },
            { "product_id": seeded.fries, "quantity": 2, "price_at_purchase": 4.0 }
        ]
    })
}

async fn place_order(app: &TestApp, seeded: &Seeded, body: &Value) -> reqwest::Response{
    app.post_json(&format!("/v1/hotel/{}/create/order", seeded.hotel_id), body).await
}

#[actix_web::test]
async fn order_persists_header_and_client_prices(){
    let app = TestApp::spawn_app().await;
    let seeded = seed(&app).await;

    let response = place_order(&app, &seeded, &order_body(&seeded)).await;
    assert_eq!(response.status().as_u16(), 201);
    let order_id = created_id(response).await;

    let mut conn = app.pool.get().unwrap();
    let prices: Vec<f64> = order_products::table
        .filter(order_products::order_id.eq(order_id))
        .order(order_products::id)
        .select(order_products::price_at_purchase)
        .load(&mut conn)
        .unwrap();
    assert_eq!(prices, vec![9.75, 4.0]);

    let stored_hotel: i32 = user_orders::table
        .find(order_id)
        .select(user_orders::hotel_id)
        .first(&mut conn)
        .unwrap();
    assert_eq!(stored_hotel, seeded.hotel_id);
}

#[actix_web::test]
async fn order_round_trips_through_the_listing(){
    let app = TestApp::spawn_app().await;
    let seeded = seed(&app).await;
    let order_id = created_id(place_order(&app, &seeded, &order_body(&seeded)).await).await;

    let response = app.get(&format!("/v1/user/{}/orders", seeded.user_id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Vec<Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 1);

    let order = &body[0];
    assert_eq!(order["id"], order_id);
    assert_eq!(order["order_total"], 27.5);
    assert_eq!(order["order_status"], "pending");
    assert_eq!(order["is_delivered"], false);
    assert_eq!(order["phone_number"], "650-253-0000");
    assert_eq!(order["drive_thru_code"], "DT-7");
    assert_eq!(order["hotel_id"], seeded.hotel_id);

    let products = order["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Burger");
    assert_eq!(products[0]["hotel_name"], "Spice Route");
    assert_eq!(products[0]["price"], 10);
    assert_eq!(products[0]["price_at_purchase"], 9.75);
    assert_eq!(products[0]["quantity"], 2);
}

#[actix_web::test]
async fn lines_whose_hotel_was_deleted_are_omitted(){
    let app = TestApp::spawn_app().await;
    let seeded = seed(&app).await;
    let other_hotel = app.create_hotel("Night Owl").await;
    let tea = app.create_product(other_hotel, "Tea", 2).await;

    let mut body = order_body(&seeded);
    body["products"] = json!([
        { "product_id": seeded.burger, "quantity": 1, "price_at_purchase": 10.0 },
        { "product_id": tea, "quantity": 1, "price_at_purchase": 2.0 }
    ]);
    assert_eq!(place_order(&app, &seeded, &body).await.status().as_u16(), 201);

    {
        let mut conn = app.pool.get().unwrap();
        diesel::delete(hotels::table.find(other_hotel))
            .execute(&mut conn)
            .unwrap();
    }

    let response = app.get(&format!("/v1/user/{}/orders", seeded.user_id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Vec<Value> = response.json().await.unwrap();
    let products = body[0]["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], seeded.burger);
}

#[actix_web::test]
async fn deleting_an_order_cascades_to_its_lines(){
    let app = TestApp::spawn_app().await;
    let seeded = seed(&app).await;
    let order_id = created_id(place_order(&app, &seeded, &order_body(&seeded)).await).await;

    let mut conn = app.pool.get().unwrap();
    diesel::delete(user_orders::table.find(order_id))
        .execute(&mut conn)
        .unwrap();

    let remaining: i64 = order_products::table
        .filter(order_products::order_id.eq(order_id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(remaining, 0);
}

#[actix_web::test]
async fn order_without_products_is_rejected(){
    let app = TestApp::spawn_app().await;
    let seeded = seed(&app).await;

    let mut body = order_body(&seeded);
    body["products"] = json!([]);
    let response = place_order(&app, &seeded, &body).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_code(response).await, "invalidOrderPayload");
}

#[actix_web::test]
async fn order_with_bad_phone_number_is_rejected(){
    let app = TestApp::spawn_app().await;
    let seeded = seed(&app).await;

    let mut body = order_body(&seeded);
    body["phone_number"] = json!("not a phone");
    let response = place_order(&app, &seeded, &body).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_code(response).await, "invalidPhoneNumber");
}

#[actix_web::test]
async fn order_for_unknown_user_leaves_nothing_behind(){
    let app = TestApp::spawn_app().await;
    let seeded = seed(&app).await;

    let mut body = order_body(&seeded);
    body["user_id"] = json!(9999);
    let response = place_order(&app, &seeded, &body).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_code(response).await, "invalidOrderPayload");

    let mut conn = app.pool.get().unwrap();
    let orders: i64 = user_orders::table.count().get_result(&mut conn).unwrap();
    assert_eq!(orders, 0);
}

#[actix_web::test]
async fn admin_can_complete_an_order(){
    let app = TestApp::spawn_app().await;
    let seeded = seed(&app).await;
    let order_id = created_id(place_order(&app, &seeded, &order_body(&seeded)).await).await;

    let admin_id = app.create_user("admin@domain.com", "s3cret", "customer").await;
    app.promote_to_admin(admin_id);
    let admin_token = app.login("admin@domain.com", "s3cret").await;
    let customer_token = app.login("ursula@domain.com", "hunter2").await;

    let path = format!("/v1/order/{}/completed", order_id);
    let response = app.post_with_token(&path, &customer_token).await;
    assert_eq!(response.status().as_u16(), 403);

    let response = app.post_with_token(&path, &admin_token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Vec<Value> = app.get(&format!("/v1/user/{}/orders", seeded.user_id)).await
        .json().await.unwrap();
    assert_eq!(body[0]["is_delivered"], true);
    assert_eq!(body[0]["order_status"], "completed");

    let response = app.post_with_token("/v1/order/abc/completed", &admin_token).await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_code(response).await, "invalidOrderId");
}

#[actix_web::test]
async fn enforced_inventory_decrements_stock_and_rejects_oversell(){
    let app = TestApp::spawn_with(|settings| settings.orders.enforce_inventory = true).await;
    let seeded = seed(&app).await;

    let mut body = order_body(&seeded);
    body["products"] = json!([
        { "product_id": seeded.burger, "quantity": 15, "price_at_purchase": 10.0 }
    ]);
    assert_eq!(place_order(&app, &seeded, &body).await.status().as_u16(), 201);

    let product: Value = app.get(&format!("/v1/product/{}", seeded.burger)).await
        .json().await.unwrap();
    assert_eq!(product["stockLeft"], 5);

    let response = place_order(&app, &seeded, &body).await;
    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_code(response).await, "insufficientStock");

    body["products"] = json!([
        { "product_id": seeded.burger, "quantity": 1, "price_at_purchase": 1.0 }
    ]);
    let response = place_order(&app, &seeded, &body).await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_code(response).await, "invalidOrderPayload");

    body["products"] = json!([
        { "product_id": 9999, "quantity": 1, "price_at_purchase": 10.0 }
    ]);
    let response = place_order(&app, &seeded, &body).await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_code(response).await, "invalidOrderPayload");
}
