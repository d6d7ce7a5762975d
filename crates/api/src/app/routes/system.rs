//! Plain-text endpoints: greeting plus the route-group demonstrators.

pub async fn greeting() -> &'static str {
    "Hello todoserv!"
}

pub async fn public_info() -> &'static str {
    "Public information"
}

pub async fn private_data() -> &'static str {
    "Private data accessible after authentication"
}

pub async fn private_create() -> &'static str {
    "Create a new resource"
}
