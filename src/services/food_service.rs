use secrecy::ExposeSecret;

use crate::{auth::jwt::{Tokenizer, ADMIN_ROLE}, db_interaction::{FoodRepository, RepositoryError, StockPolicy}, domain::{CartProductKey, CartProducts, CartResponse, CreateOrderRequest, LoginRequest, LoginResponse, OrderResponse, PhoneNumberDomain, SignupRequest, UserEmail, UserView}, models::{CartEntry, Hotel, NewHotel, NewOrder, NewOrderLine, NewProduct, NewUser, OrderWithItems, Product}, password::{compute_password_hash, verify_against_dummy, verify_password}};

use super::{enrichment::{enrich_lines, EnrichmentLine}, FoodService, ServiceError};

pub struct FoodOrderingService<R>{
    repository: R,
    tokenizer: Tokenizer,
    stock_policy: StockPolicy
}

impl<R: FoodRepository> FoodOrderingService<R> {
    pub fn new(repository: R, tokenizer: Tokenizer, stock_policy: StockPolicy) -> Self{
        Self{
            repository,
            tokenizer,
            stock_policy
        }
    }

    fn order_view(&self, order_with_items: OrderWithItems) -> Result<OrderResponse, ServiceError>{
        let OrderWithItems{ order, items } = order_with_items;
        let lines: Vec<EnrichmentLine> = items.iter().map(EnrichmentLine::from).collect();
        let products = enrich_lines(&self.repository, &lines)?;

        Ok(OrderResponse{
            id: order.id,
            user_id: order.user_id,
            hotel_id: order.hotel_id,
            phone_number: order.phone_number,
            drive_thru_code: order.drive_thru_code,
            order_status: order.order_status,
            is_delivered: order.is_delivered,
            order_total: order.order_total,
            created_at: order.created_at,
            updated_at: order.updated_at,
            products
        })
    }
}

fn ensure_positive_quantity(quantity: i32) -> Result<(), ServiceError>{
    if quantity <= 0 {
        return Err(ServiceError::InvalidPayload(format!("quantity must be positive, got {}", quantity)))
    }
    Ok(())
}

fn validate_order(order: &CreateOrderRequest) -> Result<(), ServiceError>{
    PhoneNumberDomain::parse(order.phone_number.clone())
        .map_err(ServiceError::InvalidPhoneNumber)?;

    if order.products.is_empty() {
        return Err(ServiceError::InvalidOrder("order must contain at least one product".to_string()))
    }

    if !order.order_total.is_finite() || order.order_total < 0.0 {
        return Err(ServiceError::InvalidOrder("order total must be a non-negative number".to_string()))
    }

    for line in &order.products {
        if line.quantity <= 0 {
            return Err(ServiceError::InvalidOrder(
                format!("quantity for product {} must be positive", line.product_id)
            ))
        }
        if !line.price_at_purchase.is_finite() || line.price_at_purchase < 0.0 {
            return Err(ServiceError::InvalidOrder(
                format!("price for product {} must be a non-negative number", line.product_id)
            ))
        }
    }

    Ok(())
}

impl<R: FoodRepository> FoodService for FoodOrderingService<R> {
    #[tracing::instrument(
        "Creating user",
        skip(self, request),
        fields(user_email = %request.email)
    )]
    fn create_user(&self, request: SignupRequest) -> Result<i32, ServiceError> {
        let email = UserEmail::parse(request.email).map_err(ServiceError::InvalidEmail)?;

        if request.name.trim().is_empty() {
            return Err(ServiceError::InvalidPayload("name must not be empty".to_string()))
        }

        // Admins are provisioned in the database, never through signup
        if request.role.trim().eq_ignore_ascii_case(ADMIN_ROLE) {
            return Err(ServiceError::InvalidPayload(format!("role {} cannot be self-assigned", ADMIN_ROLE)))
        }

        let password_hash = compute_password_hash(&request.password)
            .map_err(|e| ServiceError::InvalidPayload(e.to_string()))?;

        let new_user = NewUser{
            email: email.inner(),
            phone_number: request.phone_number,
            password_hash: password_hash.expose_secret().to_string(),
            name: request.name,
            role: request.role
        };

        match self.repository.create_user(new_user) {
            Ok(user) => Ok(user.id),
            Err(RepositoryError::UniqueViolation(_)) => Err(ServiceError::Conflict(
                format!("a user with email {} already exists", email.as_ref())
            )),
            Err(e) => Err(e.into())
        }
    }

    #[tracing::instrument(
        "Logging in user",
        skip(self, request),
        fields(user_email = %request.email)
    )]
    fn user_login(&self, request: LoginRequest) -> Result<LoginResponse, ServiceError> {
        let user = match self.repository.get_user_by_email(&request.email) {
            Ok(user) => user,
            Err(e) if e.is_not_found() => {
                verify_against_dummy(&request.password)?;
                return Err(ServiceError::InvalidCredentials)
            },
            Err(e) => return Err(e.into())
        };

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(ServiceError::InvalidCredentials)
        }

        let token = self.tokenizer.generate_key(&user)
            .map_err(|e| anyhow::anyhow!(e).context("Failed to sign access token"))?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginResponse{
            token,
            refresh_token: String::new(),
            name: user.name,
            role: user.role
        })
    }

    #[tracing::instrument("Fetching user", skip(self))]
    fn get_user_by_id(&self, user_id: i32) -> Result<UserView, ServiceError> {
        Ok(self.repository.get_user_by_id(user_id)?.into())
    }

    #[tracing::instrument(
        "Creating product",
        skip(self, product),
        fields(product_name = %product.name, hotel_id = product.hotel_id)
    )]
    fn create_product(&self, product: NewProduct) -> Result<i32, ServiceError> {
        if product.name.trim().is_empty() {
            return Err(ServiceError::InvalidPayload("product name must not be empty".to_string()))
        }
        if product.price < 0 || product.stock_left < 0 {
            return Err(ServiceError::InvalidPayload("price and stockLeft must not be negative".to_string()))
        }

        Ok(self.repository.create_product(product)?.id)
    }

    #[tracing::instrument("Fetching product", skip(self))]
    fn get_product_by_id(&self, product_id: i32) -> Result<Product, ServiceError> {
        Ok(self.repository.get_product_by_id(product_id)?)
    }

    #[tracing::instrument("Fetching products of hotel", skip(self))]
    fn get_products_by_hotel(&self, hotel_id: i32) -> Result<Vec<Product>, ServiceError> {
        Ok(self.repository.get_products_by_hotel(hotel_id)?)
    }

    #[tracing::instrument(
        "Creating hotel",
        skip(self, hotel),
        fields(hotel_name = %hotel.name)
    )]
    fn create_hotel(&self, hotel: NewHotel) -> Result<i32, ServiceError> {
        if hotel.name.trim().is_empty() {
            return Err(ServiceError::InvalidPayload("hotel name must not be empty".to_string()))
        }

        Ok(self.repository.create_hotel(hotel)?.id)
    }

    #[tracing::instrument("Fetching hotels", skip(self))]
    fn get_hotels(&self) -> Result<Vec<Hotel>, ServiceError> {
        Ok(self.repository.get_hotels()?)
    }

    #[tracing::instrument("Adding product to cart", skip(self))]
    fn add_product_to_cart(&self, item: CartProducts) -> Result<(), ServiceError> {
        ensure_positive_quantity(item.quantity)?;

        Ok(self.repository.add_product_to_cart(CartEntry{
            user_id: item.user_id,
            product_id: item.product_id,
            quantity: item.quantity
        })?)
    }

    #[tracing::instrument("Removing product from cart", skip(self))]
    fn delete_product_from_cart(&self, key: CartProductKey) -> Result<(), ServiceError> {
        Ok(self.repository.delete_product_from_cart(key.user_id, key.product_id)?)
    }

    #[tracing::instrument("Updating cart quantity", skip(self))]
    fn update_quantity_in_cart(&self, item: CartProducts) -> Result<(), ServiceError> {
        ensure_positive_quantity(item.quantity)?;

        Ok(self.repository.update_quantity_in_cart(CartEntry{
            user_id: item.user_id,
            product_id: item.product_id,
            quantity: item.quantity
        })?)
    }

    #[tracing::instrument("Fetching user cart", skip(self))]
    fn get_user_cart(&self, user_id: i32) -> Result<CartResponse, ServiceError> {
        let entries = self.repository.get_user_cart(user_id)?;
        let lines: Vec<EnrichmentLine> = entries.iter().map(EnrichmentLine::from).collect();

        Ok(CartResponse{
            products: enrich_lines(&self.repository, &lines)?
        })
    }

    #[tracing::instrument(
        "Placing order",
        skip(self, order),
        fields(user_id = order.user_id, lines = order.products.len())
    )]
    fn create_order(&self, hotel_id: i32, order: CreateOrderRequest) -> Result<i32, ServiceError> {
        validate_order(&order)?;

        let lines = order.products.iter()
            .map(|line| NewOrderLine{
                product_id: line.product_id,
                quantity: line.quantity,
                price_at_purchase: line.price_at_purchase
            })
            .collect();

        let new_order = NewOrder{
            user_id: order.user_id,
            hotel_id,
            phone_number: order.phone_number,
            drive_thru_code: order.drive_thru_code,
            order_status: order.order_status,
            is_delivered: order.is_delivered,
            order_total: order.order_total
        };

        match self.repository.create_order(new_order, lines, self.stock_policy) {
            Ok(created) => {
                tracing::info!(order_id = created.id, "Order placed");
                Ok(created.id)
            },
            Err(RepositoryError::ForeignKeyViolation(_)) => Err(ServiceError::InvalidOrder(
                format!("user {} does not exist", order.user_id)
            )),
            Err(RepositoryError::NotFound{ entity: "product", id }) => Err(ServiceError::InvalidOrder(
                format!("product {} does not exist", id)
            )),
            Err(e) => Err(e.into())
        }
    }

    #[tracing::instrument("Fetching user orders", skip(self))]
    fn get_user_orders(&self, user_id: i32) -> Result<Vec<OrderResponse>, ServiceError> {
        self.repository.get_user_orders(user_id)?
            .into_iter()
            .map(|order| self.order_view(order))
            .collect()
    }

    #[tracing::instrument("Marking order completed", skip(self))]
    fn mark_order_completed(&self, order_id: i32) -> Result<(), ServiceError> {
        Ok(self.repository.mark_order_completed(order_id)?)
    }
}
