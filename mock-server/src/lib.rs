use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub surname: String,
    pub age: u32,
}

/// Response envelope: the user rides in a `user` field.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

pub type Db = Arc<HashMap<u64, User>>;

pub fn app() -> Router {
    app_with(HashMap::new())
}

/// Build the router over a pre-seeded user map. The map is read-only for the
/// lifetime of the server; the only route is `GET /user/{id}`.
pub fn app_with(users: HashMap<u64, User>) -> Router {
    let db: Db = Arc::new(users);
    Router::new().route("/user/{id}", get(get_user)).with_state(db)
}

pub async fn run(listener: TcpListener, users: HashMap<u64, User>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(users)).await
}

/// Users served by the standalone binary.
pub fn demo_users() -> HashMap<u64, User> {
    HashMap::from([
        (
            1,
            User {
                name: "Ada".to_string(),
                surname: "Lovelace".to_string(),
                age: 36,
            },
        ),
        (
            2,
            User {
                name: "Alan".to_string(),
                surname: "Turing".to_string(),
                age: 41,
            },
        ),
    ])
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<UserEnvelope>, StatusCode> {
    db.get(&id)
        .cloned()
        .map(|user| Json(UserEnvelope { user }))
        .ok_or(StatusCode::NOT_FOUND)
}
