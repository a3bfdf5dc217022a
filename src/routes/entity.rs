//! Entity CRUD routes. Each resource gets a collection path (`/movies`) and an
//! item path (`/movie/:id`); the variant decides which resources are mounted.

use crate::entity::{Client, Entity, Movie, Rent};
use crate::handlers::entity::{create, delete as delete_handler, list, owned_rents, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Collection and item routes for one entity.
pub fn resource_routes<E: Entity>() -> Router<AppState> {
    Router::new()
        .route(&format!("/{}", E::COLLECTION), get(list::<E>).post(create::<E>))
        .route(
            &format!("/{}/:id", E::NAME),
            get(read::<E>).put(update::<E>).delete(delete_handler::<E>),
        )
}

pub fn entity_routes(state: AppState) -> Router {
    let variant = state.variant;
    let mut router = resource_routes::<Movie>();
    if variant.has_clients() {
        router = router.merge(resource_routes::<Client>());
    }
    if variant.has_rents() {
        router = router
            .merge(resource_routes::<Rent>())
            .route("/movie/:id/rents", get(owned_rents::<Movie>))
            .route("/client/:id/rents", get(owned_rents::<Client>));
    }
    router.with_state(state)
}
