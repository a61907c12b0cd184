use std::{net::TcpListener, sync::Arc};

use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::{auth::jwt::Tokenizer, configuration::Settings, db_interaction::PgRepository, routes::{add_to_cart, complete_order, create_hotel, create_product, create_user, delete_from_cart, get_cart, get_hotel_products, get_hotels, get_orders, get_product, get_user, health_check, json_error_handler, login, order_id_error_handler, order_payload_error_handler, path_error_handler, post_order, query_error_handler, update_cart}, services::{FoodOrderingService, FoodService}, telemetry::spawn_blocking_with_tracing, utils::{build_pool, run_migrations}};

/// The HTTP server, built once with its listener and injected service.
pub struct Application{
    port: u16,
    server: Server
}

impl Application {
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let database = settings.database.clone();

        // Filling the pool to min_idle blocks, so does migrating
        let pool = spawn_blocking_with_tracing(move || {
            let pool = build_pool(&database)?;
            if database.run_migrations {
                run_migrations(&pool)?;
            }
            Ok::<_, anyhow::Error>(pool)
        })
        .await
        .context("Failed due to threadpool error")??;

        let tokenizer = Tokenizer::new(&settings.jwt);
        let service: Arc<dyn FoodService> = Arc::new(FoodOrderingService::new(
            PgRepository::new(pool),
            tokenizer.clone(),
            settings.orders.stock_policy()
        ));

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))
            .context("Failed to bind listener")?;
        let port = listener.local_addr()?.port();

        tracing::info!(host = %settings.application.host, port, "Starting server");

        let server = run(listener, service, tokenizer)?;

        Ok(Self{
            port,
            server
        })
    }

    pub fn port(&self) -> u16{
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error>{
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    service: Arc<dyn FoodService>,
    tokenizer: Tokenizer
) -> Result<Server, anyhow::Error>{
    let service: web::Data<dyn FoodService> = web::Data::from(service);
    let tokenizer = web::Data::new(tokenizer);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(|cfg| configure_app(cfg, service.clone(), tokenizer.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

// Routes plus the shared state and extractor configs they need
pub fn configure_app(
    cfg: &mut web::ServiceConfig,
    service: web::Data<dyn FoodService>,
    tokenizer: web::Data<Tokenizer>
){
    cfg.app_data(service)
        .app_data(tokenizer)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/", web::get().to(health_check))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/v1")
                .route("/create/user", web::post().to(create_user))
                .route("/user/login", web::post().to(login))
                // Must precede /user/{userID}
                .route("/user/cart", web::get().to(get_cart))
                .route("/user/{userID}", web::get().to(get_user))
                .route("/user/{userID}/orders", web::get().to(get_orders))
                .route("/create/product", web::post().to(create_product))
                .route("/product/{productID}", web::get().to(get_product))
                .route("/create/hotel", web::post().to(create_hotel))
                .route("/hotel", web::get().to(get_hotels))
                .route("/hotel/{hotelID}/products", web::get().to(get_hotel_products))
                .route("/add/user/cart", web::post().to(add_to_cart))
                .route("/delete/user/cart", web::post().to(delete_from_cart))
                .route("/update/user/cart", web::post().to(update_cart))
                .service(
                    web::resource("/hotel/{hotelID}/create/order")
                        .app_data(web::JsonConfig::default().error_handler(order_payload_error_handler))
                        .route(web::post().to(post_order))
                )
                .service(
                    web::resource("/order/{orderID}/completed")
                        .app_data(web::PathConfig::default().error_handler(order_id_error_handler))
                        .route(web::post().to(complete_order))
                )
        );
}
