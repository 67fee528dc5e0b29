//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - The page (sections: #catalog #about
//!                                #delivery #reviews #contacts)
//! GET  /health                 - Health check (wired in the app builder)
//!
//! # Cart (HTML fragments)
//! POST /cart/add               - Add one unit (returns badge fragment)
//! POST /cart/remove            - Remove a line (returns drawer fragment)
//! GET  /cart/count             - Badge fragment
//! GET  /cart/drawer            - Drawer fragment
//! POST /cart/toggle            - Flip drawer visibility (returns drawer)
//!
//! # Contact
//! POST /contact                - Contact form (returns result fragment)
//! ```

pub mod cart;
pub mod contact;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/drawer", get(cart::drawer))
        .route("/toggle", post(cart::toggle))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // The page
        .route("/", get(home::home))
        // Cart fragments
        .nest("/cart", cart_routes())
        // Contact form
        .route("/contact", post(contact::submit))
}
