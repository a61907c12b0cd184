use diesel::{ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{Hotel, NewHotel}, schema::hotels};

use super::RepositoryError;

#[tracing::instrument(
    "Inserting hotel into the database",
    skip(conn)
)]
pub fn insert_hotel(
    conn: &mut PgConnection,
    new_hotel: NewHotel
) -> Result<Hotel, RepositoryError> {
    let hotel = diesel::insert_into(hotels::table)
        .values(&new_hotel)
        .returning(Hotel::as_returning())
        .get_result(conn)?;

    Ok(hotel)
}

#[tracing::instrument(
    "Getting all hotels",
    skip_all
)]
pub fn get_hotels(conn: &mut PgConnection) -> Result<Vec<Hotel>, RepositoryError> {
    let hotels = hotels::table
        .order(hotels::id.asc())
        .select(Hotel::as_select())
        .load(conn)?;

    Ok(hotels)
}

#[tracing::instrument(
    "Getting hotel by id",
    skip(conn)
)]
pub fn get_hotel_by_id(
    conn: &mut PgConnection,
    hotel_id: i32
) -> Result<Hotel, RepositoryError> {
    hotels::table
        .find(hotel_id)
        .select(Hotel::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepositoryError::not_found("hotel", hotel_id))
}
