use diesel::{ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{NewProduct, Product}, schema::products};

use super::RepositoryError;

#[tracing::instrument(
    "Inserting product into the database",
    skip(conn)
)]
pub fn insert_product(
    conn: &mut PgConnection,
    new_product: NewProduct
) -> Result<Product, RepositoryError> {
    let product = diesel::insert_into(products::table)
        .values(&new_product)
        .returning(Product::as_returning())
        .get_result(conn)?;

    Ok(product)
}

#[tracing::instrument(
    "Getting product by id",
    skip(conn)
)]
pub fn get_product_by_id(
    conn: &mut PgConnection,
    product_id: i32
) -> Result<Product, RepositoryError> {
    products::table
        .find(product_id)
        .select(Product::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepositoryError::not_found("product", product_id))
}

#[tracing::instrument(
    "Getting products of a hotel",
    skip(conn)
)]
pub fn get_products_by_hotel(
    conn: &mut PgConnection,
    hotel_id: i32
) -> Result<Vec<Product>, RepositoryError> {
    let products = products::table
        .filter(products::hotel_id.eq(hotel_id))
        .order(products::id.asc())
        .select(Product::as_select())
        .load(conn)?;

    Ok(products)
}

#[tracing::instrument(
    "Batch fetching product details",
    skip(conn)
)]
pub fn get_products_by_ids(
    conn: &mut PgConnection,
    product_ids: &[i32]
) -> Result<Vec<Product>, RepositoryError> {
    let products = products::table
        .filter(products::id.eq_any(product_ids.to_vec()))
        .order(products::id.asc())
        .select(Product::as_select())
        .load(conn)?;

    Ok(products)
}
