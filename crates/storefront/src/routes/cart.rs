//! Cart route handlers.
//!
//! Cart operations return HTML fragments that the page swaps in place, so
//! the drawer and the badge update without a full reload. The cart itself
//! lives in the session (see [`crate::models::session`]); every handler
//! loads it, mutates it, and stores it back before responding.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use sakura_core::{Cart, CartLine, ProductId};

use crate::error::{AppError, Result};
use crate::models::session::{drawer_open, load_cart, set_drawer_open, store_cart};
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub product_id: i32,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
    pub image: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.as_i32(),
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.price.display(),
            line_total: line.line_total().display(),
            image: line.image.clone(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub line_count: usize,
    pub open: bool,
}

impl CartView {
    /// Build the display data for a cart and drawer state.
    #[must_use]
    pub fn new(cart: &Cart, open: bool) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            total: cart.total_price().display(),
            line_count: cart.line_count(),
            open,
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
}

/// Cart drawer fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Add one unit of a product to the cart.
///
/// Upserts the line: an existing line gets its quantity incremented, a new
/// product gets a fresh line with quantity 1. Returns the badge fragment.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<CartCountTemplate> {
    let product = state
        .catalog()
        .product(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let mut cart = load_cart(&session).await?;
    cart.add(product);
    store_cart(&session, &cart).await?;

    tracing::debug!(product_id = %product.id, lines = cart.line_count(), "Added to cart");

    Ok(CartCountTemplate {
        count: cart.line_count(),
    })
}

/// Remove a product's line from the cart entirely.
///
/// A no-op for ids that are not in the cart. Returns the drawer fragment.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<CartDrawerTemplate> {
    let mut cart = load_cart(&session).await?;
    cart.remove(form.product_id);
    store_cart(&session, &cart).await?;

    let open = drawer_open(&session).await?;
    Ok(CartDrawerTemplate {
        cart: CartView::new(&cart, open),
    })
}

/// Get the cart count badge fragment.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.line_count(),
    })
}

/// Get the cart drawer fragment.
#[instrument(skip(session))]
pub async fn drawer(session: Session) -> Result<CartDrawerTemplate> {
    let cart = load_cart(&session).await?;
    let open = drawer_open(&session).await?;
    Ok(CartDrawerTemplate {
        cart: CartView::new(&cart, open),
    })
}

/// Flip the drawer visibility flag.
///
/// Independent of cart contents; toggling twice restores the original
/// state. Returns the drawer fragment rendered with the new flag.
#[instrument(skip(session))]
pub async fn toggle(session: Session) -> Result<CartDrawerTemplate> {
    let open = !drawer_open(&session).await?;
    set_drawer_open(&session, open).await?;

    let cart = load_cart(&session).await?;
    Ok(CartDrawerTemplate {
        cart: CartView::new(&cart, open),
    })
}
