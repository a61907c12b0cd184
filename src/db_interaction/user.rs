use diesel::{ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{NewUser, User}, schema::users};

use super::RepositoryError;

#[tracing::instrument(
    "Inserting user into the database",
    skip_all,
    fields(email = %new_user.email)
)]
pub fn insert_user(
    conn: &mut PgConnection,
    new_user: NewUser
) -> Result<User, RepositoryError> {
    let user = diesel::insert_into(users::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(conn)?;

    Ok(user)
}

#[tracing::instrument(
    "Getting user by id",
    skip(conn)
)]
pub fn get_user_by_id(
    conn: &mut PgConnection,
    user_id: i32
) -> Result<User, RepositoryError> {
    users::table
        .find(user_id)
        .select(User::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepositoryError::not_found("user", user_id))
}

// Function to query user from email id
#[tracing::instrument(
    "Getting user by email",
    skip(conn)
)]
pub fn get_user_by_email(
    conn: &mut PgConnection,
    email: &str
) -> Result<User, RepositoryError> {
    users::table
        .filter(users::email.eq(email))
        .select(User::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| RepositoryError::not_found("user", email))
}
