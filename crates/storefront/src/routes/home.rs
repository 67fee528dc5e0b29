//! Home page route handler.
//!
//! The storefront is a single page: hero, catalog, about, delivery,
//! reviews, and contacts, addressable by anchor. Products and reviews come
//! from the catalog store; the about/delivery copy comes from the markdown
//! content store.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use sakura_core::{Product, Review};

use crate::error::Result;
use crate::filters;
use crate::models::session::{drawer_open, load_cart};
use crate::routes::cart::CartView;
use crate::state::AppState;

// =============================================================================
// Hero Configuration (static content)
// =============================================================================

/// Hero banner configuration.
#[derive(Clone)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_anchor: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Керамика ручной работы".to_string(),
            subtitle: "Изделия из глины в стиле японской эстетики".to_string(),
            button_text: "Смотреть каталог".to_string(),
            button_anchor: "#catalog".to_string(),
        }
    }
}

// =============================================================================
// Product and Review Views
// =============================================================================

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
    pub category: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.display(),
            image: product.image.clone(),
            category: product.category.clone(),
        }
    }
}

/// Review display data for templates.
#[derive(Clone)]
pub struct ReviewView {
    pub author: String,
    pub text: String,
    pub stars: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            author: review.author.clone(),
            text: review.text.clone(),
            stars: "★".repeat(usize::from(review.rating.value())),
        }
    }
}

/// A rendered informational section.
#[derive(Clone)]
pub struct SectionView {
    pub title: String,
    pub html: String,
}

// =============================================================================
// Template
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Hero banner configuration.
    pub hero: HeroConfig,
    /// Catalog products for the grid.
    pub products: Vec<ProductView>,
    /// Customer reviews.
    pub reviews: Vec<ReviewView>,
    /// About-the-studio section, if the content file loaded.
    pub about: Option<SectionView>,
    /// Delivery section, if the content file loaded.
    pub delivery: Option<SectionView>,
    /// Cart display data for the drawer.
    pub cart: CartView,
    /// Badge count (distinct cart lines).
    pub count: usize,
}

/// Display the home page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<HomeTemplate> {
    let cart = load_cart(&session).await?;
    let open = drawer_open(&session).await?;

    let section = |slug: &str| {
        state.content().section(slug).map(|s| SectionView {
            title: s.meta.title.clone(),
            html: s.content_html.clone(),
        })
    };

    let count = cart.line_count();
    Ok(HomeTemplate {
        hero: HeroConfig::default(),
        products: state.catalog().products().iter().map(ProductView::from).collect(),
        reviews: state.catalog().reviews().iter().map(ReviewView::from).collect(),
        about: section("about"),
        delivery: section("delivery"),
        cart: CartView::new(&cart, open),
        count,
    })
}
