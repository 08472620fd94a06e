use std::sync::Arc;

use poem::session::Session;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get_items::{GetCartItemsParams, GetCartItemsUseCase};
use business::domain::cart::use_cases::get_total::{GetCartTotalParams, GetCartTotalUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};

use crate::api::cart::dto::{
    AddCartItemRequest, CartItemResponse, CartLineResponse, CartResponse, ClearedCartResponse,
    RemovedQuantityResponse,
};
use crate::api::cart::identity::resolve_cart_id;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    get_items_use_case: Arc<dyn GetCartItemsUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    get_total_use_case: Arc<dyn GetCartTotalUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        get_items_use_case: Arc<dyn GetCartItemsUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        get_total_use_case: Arc<dyn GetCartTotalUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            remove_item_use_case,
            get_items_use_case,
            clear_use_case,
            get_total_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints for the anonymous visitor's cart. The cart identity lives in
/// the cookie session and is resolved once per request.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the visitor's cart items, each resolved with its pie, plus
    /// the cart total.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, session: &Session) -> GetCartResponse {
        let cart_id = resolve_cart_id(session);

        let items = match self
            .get_items_use_case
            .execute(GetCartItemsParams {
                cart_id: cart_id.clone(),
            })
            .await
        {
            Ok(items) => items,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return GetCartResponse::InternalError(json);
            }
        };

        match self
            .get_total_use_case
            .execute(GetCartTotalParams { cart_id })
            .await
        {
            Ok(total) => GetCartResponse::Ok(Json(CartResponse {
                items: items.into_iter().map(CartItemResponse::from).collect(),
                total: total.to_string(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add one unit of a pie
    ///
    /// Creates the cart line at quantity 1 on the first add of a pie and
    /// increments it on every further add.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(
        &self,
        session: &Session,
        body: Json<AddCartItemRequest>,
    ) -> AddCartItemResponse {
        let pie_id = match Uuid::parse_str(&body.0.pie_id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return AddCartItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_pie_id".to_string(),
                }));
            }
        };
        let cart_id = resolve_cart_id(session);

        match self
            .add_item_use_case
            .execute(AddCartItemParams { cart_id, pie_id })
            .await
        {
            Ok(line) => AddCartItemResponse::Created(Json(line.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AddCartItemResponse::InternalError(json)
            }
        }
    }

    /// Remove one unit of a pie
    ///
    /// Decrements the line and returns the remaining quantity; 0 when the
    /// line was deleted or the pie was not in the cart.
    #[oai(path = "/cart/items/:pie_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, session: &Session, pie_id: Path<String>) -> RemoveCartItemResponse {
        let pie_id = match Uuid::parse_str(&pie_id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveCartItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "cart.invalid_pie_id".to_string(),
                }));
            }
        };
        let cart_id = resolve_cart_id(session);

        match self
            .remove_item_use_case
            .execute(RemoveCartItemParams { cart_id, pie_id })
            .await
        {
            Ok(quantity) => RemoveCartItemResponse::Ok(Json(RemovedQuantityResponse { quantity })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveCartItemResponse::InternalError(json)
            }
        }
    }

    /// Clear the cart
    ///
    /// Removes every line of the cart; clearing an empty cart is a no-op.
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, session: &Session) -> ClearCartResponse {
        let cart_id = resolve_cart_id(session);

        match self.clear_use_case.execute(ClearCartParams { cart_id }).await {
            Ok(count) => ClearCartResponse::Ok(Json(ClearedCartResponse { count })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 201)]
    Created(Json<CartLineResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<RemovedQuantityResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 200)]
    Ok(Json<ClearedCartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
