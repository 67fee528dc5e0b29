//! Session-stored cart state.
//!
//! The cart and the drawer-visibility flag live in the session, which is the
//! single owner of all mutable state: every handler loads, mutates, and
//! stores to completion before responding.

use tower_sessions::Session;

use sakura_core::Cart;

/// Session keys for cart data.
pub mod keys {
    /// Key for storing the cart lines.
    pub const CART: &str = "cart";

    /// Key for the cart drawer visibility flag.
    pub const CART_OPEN: &str = "cart_open";
}

/// Load the cart from the session, defaulting to an empty cart.
///
/// # Errors
///
/// Returns the underlying session error if the store is unavailable.
pub async fn load_cart(session: &Session) -> Result<Cart, tower_sessions::session::Error> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Store the cart back into the session.
///
/// # Errors
///
/// Returns the underlying session error if the store is unavailable.
pub async fn store_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Load the drawer visibility flag, defaulting to closed.
///
/// # Errors
///
/// Returns the underlying session error if the store is unavailable.
pub async fn drawer_open(session: &Session) -> Result<bool, tower_sessions::session::Error> {
    Ok(session
        .get::<bool>(keys::CART_OPEN)
        .await?
        .unwrap_or_default())
}

/// Store the drawer visibility flag.
///
/// # Errors
///
/// Returns the underlying session error if the store is unavailable.
pub async fn set_drawer_open(
    session: &Session,
    open: bool,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART_OPEN, open).await
}
