use chrono::Utc;
use diesel::{BelongingToDsl, Connection, ExpressionMethods, GroupedBy, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{NewOrder, NewOrderLine, NewOrderLineItem, Order, OrderLineItem, OrderWithItems, Product}, schema::{order_products, products, user_orders}};

use super::{RepositoryError, StockPolicy};

pub const ORDER_STATUS_COMPLETED: &str = "completed";

#[tracing::instrument(
    "Creating order with its line items",
    skip_all,
    fields(user_id = new_order.user_id, hotel_id = new_order.hotel_id, lines = lines.len(), policy = ?policy)
)]
pub fn create_order(
    conn: &mut PgConnection,
    new_order: NewOrder,
    lines: Vec<NewOrderLine>,
    policy: StockPolicy
) -> Result<Order, RepositoryError> {
    conn.transaction::<Order, RepositoryError, _>(|conn| {
        let order = diesel::insert_into(user_orders::table)
            .values(&new_order)
            .returning(Order::as_returning())
            .get_result(conn)?;

        if policy == StockPolicy::Reserve {
            for line in lines.iter() {
                reserve_stock(conn, line)?;
            }
        }

        let items: Vec<NewOrderLineItem> = lines.into_iter()
            .map(|line| NewOrderLineItem{
                order_id: order.id,
                product_id: line.product_id,
                quantity: line.quantity,
                price_at_purchase: line.price_at_purchase
            })
            .collect();

        if !items.is_empty() {
            diesel::insert_into(order_products::table)
                .values(&items)
                .execute(conn)?;
        }

        Ok(order)
    })
}

// Locks the product row, checks the submitted price against the current one
// and takes the quantity out of stock
#[tracing::instrument(
    "Reserving stock for order line",
    skip(conn)
)]
fn reserve_stock(
    conn: &mut PgConnection,
    line: &NewOrderLine
) -> Result<(), RepositoryError> {
    let product = products::table
        .find(line.product_id)
        .select(Product::as_select())
        .for_update()
        .get_result(conn)
        .optional()?
        .ok_or_else(|| RepositoryError::not_found("product", line.product_id))?;

    if (line.price_at_purchase - f64::from(product.price)).abs() > f64::EPSILON {
        return Err(RepositoryError::PriceMismatch{
            product_id: product.id,
            current: product.price,
            submitted: line.price_at_purchase
        })
    }

    let affected_rows = diesel::update(
            products::table
                .filter(products::id.eq(line.product_id))
                .filter(products::stock_left.ge(line.quantity))
        )
        .set(products::stock_left.eq(products::stock_left - line.quantity))
        .execute(conn)?;

    if affected_rows == 0 {
        return Err(RepositoryError::InsufficientStock{ product_id: line.product_id })
    }

    Ok(())
}

#[tracing::instrument(
    "Getting orders along with their line items",
    skip(conn)
)]
pub fn get_user_orders(
    conn: &mut PgConnection,
    user_id: i32
) -> Result<Vec<OrderWithItems>, RepositoryError> {
    conn.transaction::<Vec<OrderWithItems>, RepositoryError, _>(|conn| {
        let orders = user_orders::table
            .filter(user_orders::user_id.eq(user_id))
            .order((user_orders::created_at.asc(), user_orders::id.asc()))
            .select(Order::as_select())
            .load(conn)?;

        let items = OrderLineItem::belonging_to(&orders)
            .order(order_products::id.asc())
            .select(OrderLineItem::as_select())
            .load(conn)?;

        let grouped = items.grouped_by(&orders);

        Ok(orders.into_iter()
            .zip(grouped)
            .map(|(order, items)| OrderWithItems{ order, items })
            .collect())
    })
}

#[tracing::instrument(
    "Marking order as completed",
    skip(conn)
)]
pub fn mark_order_completed(
    conn: &mut PgConnection,
    order_id: i32
) -> Result<(), RepositoryError> {
    let affected_rows = diesel::update(user_orders::table.find(order_id))
        .set((
            user_orders::is_delivered.eq(true),
            user_orders::order_status.eq(ORDER_STATUS_COMPLETED),
            user_orders::updated_at.eq(Utc::now())
        ))
        .execute(conn)?;

    if affected_rows == 0 {
        return Err(RepositoryError::not_found("order", order_id))
    }

    Ok(())
}
