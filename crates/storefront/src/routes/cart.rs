//! Cart route handlers.
//!
//! The optimistic cart lives in the session. Each handler loads it, applies
//! one action through the cart engine, stores the result and returns it as
//! JSON, so the UI can render the change before the commerce platform
//! confirms it.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use pineapple_cart::{CartAction, CartStore, UpdateType};
use pineapple_cart_core::{Cart, Product, ProductVariant};

use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::shopify::ShopifyCart;
use crate::state::AppState;

/// Cart snapshot plus the aggregates the cart badge and drawer need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub cart: Cart,
    pub line_count: usize,
    pub total_quantity: i64,
}

impl From<&CartStore> for CartResponse {
    fn from(store: &CartStore) -> Self {
        Self {
            cart: store.snapshot(),
            line_count: store.line_count(),
            total_quantity: store.total_quantity(),
        }
    }
}

/// Cart count badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartCountResponse {
    pub total_quantity: i64,
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub variant: ProductVariant,
    pub product: Product,
    pub quantity: Option<i64>,
}

/// Update cart request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub merchandise_id: String,
    pub update_type: UpdateType,
    pub quantity: Option<i64>,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub merchandise_id: String,
}

/// Replace cart request body.
#[derive(Debug, Deserialize)]
pub struct SetCartRequest {
    pub cart: Cart,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the session's cart into a store.
async fn load_store(state: &AppState, session: &Session) -> Result<CartStore> {
    let cart = session
        .get::<Cart>(session_keys::OPTIMISTIC_CART)
        .await?;
    Ok(CartStore::with_cart(state.engine().clone(), cart))
}

/// Save the store's cart back into the session.
async fn save_store(session: &Session, store: &CartStore) -> Result<()> {
    if let Some(cart) = store.cart() {
        session.insert(session_keys::OPTIMISTIC_CART, cart).await?;
    }
    Ok(())
}

/// Apply one action to the session's cart and respond with the result.
async fn dispatch(
    state: &AppState,
    session: &Session,
    action: CartAction,
) -> Result<Json<CartResponse>> {
    let mut store = load_store(state, session).await?;
    store.dispatch(action);
    save_store(session, &store).await?;
    Ok(Json(CartResponse::from(&store)))
}

// =============================================================================
// Handlers
// =============================================================================

/// Current cart.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartResponse>> {
    let store = load_store(&state, &session).await?;
    Ok(Json(CartResponse::from(&store)))
}

/// Cart count badge.
#[instrument(skip(state, session))]
pub async fn count(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CartCountResponse>> {
    let store = load_store(&state, &session).await?;
    Ok(Json(CartCountResponse {
        total_quantity: store.total_quantity(),
    }))
}

/// Add a variant to the cart.
#[instrument(skip(state, session, request), fields(variant_id = %request.variant.id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartResponse>> {
    let quantity = request.quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(AppError::BadRequest(format!(
            "quantity must be at least 1 (got {quantity})"
        )));
    }

    let action = CartAction::add(request.variant, request.product, quantity);
    dispatch(&state, &session, action).await
}

/// Change a line's quantity.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<CartResponse>> {
    if request.update_type == UpdateType::SetExact && request.quantity.is_none() {
        return Err(AppError::BadRequest(
            "set_exact requires a quantity".to_string(),
        ));
    }

    let action = CartAction::update(request.merchandise_id, request.update_type, request.quantity);
    dispatch(&state, &session, action).await
}

/// Remove a line.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<RemoveFromCartRequest>,
) -> Result<Json<CartResponse>> {
    dispatch(&state, &session, CartAction::remove(request.merchandise_id)).await
}

/// Empty the cart.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<Json<CartResponse>> {
    dispatch(&state, &session, CartAction::ClearCart).await
}

/// Replace the cart wholesale.
#[instrument(skip(state, session, request))]
pub async fn replace(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<SetCartRequest>,
) -> Result<Json<CartResponse>> {
    dispatch(&state, &session, CartAction::SetCart { cart: request.cart }).await
}

/// Replace the cart with the commerce platform's authoritative copy.
#[instrument(skip(state, session, server_cart), fields(cart_id = %server_cart.id))]
pub async fn sync(
    State(state): State<AppState>,
    session: Session,
    Json(server_cart): Json<ShopifyCart>,
) -> Result<Json<CartResponse>> {
    let cart = Cart::from(&server_cart);
    tracing::info!(
        lines = cart.line_count(),
        total_quantity = cart.total_quantity,
        "Reconciling optimistic cart with server cart"
    );
    dispatch(&state, &session, CartAction::SetCart { cart }).await
}

/// Apply any tagged cart action. Unknown action kinds leave the cart as is.
#[instrument(skip(state, session, action), fields(action = action.kind()))]
pub async fn actions(
    State(state): State<AppState>,
    session: Session,
    Json(action): Json<CartAction>,
) -> Result<Json<CartResponse>> {
    dispatch(&state, &session, action).await
}
