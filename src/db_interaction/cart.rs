//! Cart statements are written as raw SQL; every value goes through a bind
//! parameter.

use diesel::{sql_types::Integer, PgConnection, RunQueryDsl};

use crate::models::CartEntry;

use super::RepositoryError;

#[tracing::instrument(
    "Adding product to cart",
    skip(conn)
)]
pub fn add_product_to_cart(
    conn: &mut PgConnection,
    entry: &CartEntry
) -> Result<(), RepositoryError> {
    diesel::sql_query(
        "INSERT INTO user_carts (user_id, product_id, quantity) \
         VALUES ($1, $2, $3) \
         ON CONFLICT (user_id, product_id) DO UPDATE SET quantity = EXCLUDED.quantity"
    )
    .bind::<Integer, _>(entry.user_id)
    .bind::<Integer, _>(entry.product_id)
    .bind::<Integer, _>(entry.quantity)
    .execute(conn)?;

    Ok(())
}

// Deleting an entry that is not there is not an error
#[tracing::instrument(
    "Deleting product from cart",
    skip(conn)
)]
pub fn delete_product_from_cart(
    conn: &mut PgConnection,
    user_id: i32,
    product_id: i32
) -> Result<(), RepositoryError> {
    diesel::sql_query("DELETE FROM user_carts WHERE user_id = $1 AND product_id = $2")
        .bind::<Integer, _>(user_id)
        .bind::<Integer, _>(product_id)
        .execute(conn)?;

    Ok(())
}

#[tracing::instrument(
    "Updating quantity in cart",
    skip(conn)
)]
pub fn update_quantity_in_cart(
    conn: &mut PgConnection,
    entry: &CartEntry
) -> Result<(), RepositoryError> {
    let affected_rows = diesel::sql_query(
        "UPDATE user_carts SET quantity = $1 WHERE user_id = $2 AND product_id = $3"
    )
    .bind::<Integer, _>(entry.quantity)
    .bind::<Integer, _>(entry.user_id)
    .bind::<Integer, _>(entry.product_id)
    .execute(conn)?;

    if affected_rows == 0 {
        return Err(RepositoryError::not_found(
            "cart entry",
            format!("user {} / product {}", entry.user_id, entry.product_id)
        ))
    }

    Ok(())
}

#[tracing::instrument(
    "Getting user cart",
    skip(conn)
)]
pub fn get_user_cart(
    conn: &mut PgConnection,
    user_id: i32
) -> Result<Vec<CartEntry>, RepositoryError> {
    let entries = diesel::sql_query(
        "SELECT user_id, product_id, quantity FROM user_carts WHERE user_id = $1 ORDER BY id"
    )
    .bind::<Integer, _>(user_id)
    .load::<CartEntry>(conn)?;

    Ok(entries)
}
