use axum::http::StatusCode;
use axum::Extension;

use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::middleware::CurrentUser;

pub async fn get_me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> ApiSuccess<UserData> {
    ApiSuccess::new(StatusCode::OK, UserData::from(&user))
}
