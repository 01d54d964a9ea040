use std::sync::Arc;

use poem::{Body, Request};
use poem_openapi::types::ParseFromJSON;
use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use business::domain::cart::use_cases::find_all::{FindAllCartsParams, FindAllCartsUseCase};
use business::domain::cart::use_cases::find_by_id::{FindCartByIdParams, FindCartByIdUseCase};
use business::domain::cart::use_cases::save::{SaveCartParams, SaveCartUseCase};
use business::domain::cart::use_cases::update::{UpdateCartParams, UpdateCartUseCase};

use crate::api::cart::dto::{AddCartRequest, CartEnvelope, CartListEnvelope, UpdateCartRequest};
use crate::api::error::{IntoErrorResponse, MessageEnvelope};
use crate::api::security::TokenService;
use crate::api::tags::ApiTags;

const INVALID_REQUEST: &str = "Invalid request";

pub struct CartApi {
    save_use_case: Arc<dyn SaveCartUseCase>,
    find_all_use_case: Arc<dyn FindAllCartsUseCase>,
    find_by_id_use_case: Arc<dyn FindCartByIdUseCase>,
    update_use_case: Arc<dyn UpdateCartUseCase>,
    delete_use_case: Arc<dyn DeleteCartUseCase>,
    tokens: Arc<TokenService>,
}

impl CartApi {
    pub fn new(
        save_use_case: Arc<dyn SaveCartUseCase>,
        find_all_use_case: Arc<dyn FindAllCartsUseCase>,
        find_by_id_use_case: Arc<dyn FindCartByIdUseCase>,
        update_use_case: Arc<dyn UpdateCartUseCase>,
        delete_use_case: Arc<dyn DeleteCartUseCase>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            save_use_case,
            find_all_use_case,
            find_by_id_use_case,
            update_use_case,
            delete_use_case,
            tokens,
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Decodes and validates a JSON body. Runs inside the handler so that id and
/// token failures are reported before body failures.
async fn read_json<T: ParseFromJSON>(body: Body) -> Result<T, String> {
    let text = body.into_string().await.map_err(|err| err.to_string())?;
    T::parse_from_json_string(&text).map_err(|err| err.into_message())
}

/// Shopping cart API
///
/// Endpoints for managing the cart of the authenticated user. Identity is read
/// from the `token` query parameter or an `Authorization: Bearer` header.
#[OpenApi]
impl CartApi {
    /// Add a product to the cart
    ///
    /// Creates a cart entry for the caller. Adding a product that is already in
    /// the cart increases its quantity instead.
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn save(&self, req: &Request, body: Body) -> SaveCartResponse {
        let user_id = match self.tokens.user_id(req) {
            Ok(user_id) => user_id,
            Err(err) => return SaveCartResponse::InternalError(err.into_error_response()),
        };

        let payload = match read_json::<AddCartRequest>(body).await {
            Ok(payload) => payload,
            Err(message) => return SaveCartResponse::BadRequest(MessageEnvelope::failure(message)),
        };

        let params = SaveCartParams {
            user_id,
            product_id: payload.product_id,
            quantity: payload.quantity,
        };

        match self.save_use_case.execute(params).await {
            Ok(cart) => SaveCartResponse::Created(Json(cart.into())),
            Err(err) => SaveCartResponse::InternalError(err.into_error_response()),
        }
    }

    /// List the cart
    ///
    /// Returns every cart entry of the caller, newest first.
    #[oai(path = "/carts", method = "get", tag = "ApiTags::Carts")]
    async fn find_all(&self, req: &Request) -> FindAllCartsResponse {
        let user_id = match self.tokens.user_id(req) {
            Ok(user_id) => user_id,
            Err(err) => return FindAllCartsResponse::InternalError(err.into_error_response()),
        };

        match self
            .find_all_use_case
            .execute(FindAllCartsParams { user_id })
            .await
        {
            Ok(carts) => FindAllCartsResponse::Ok(Json(carts.into())),
            Err(err) => FindAllCartsResponse::InternalError(err.into_error_response()),
        }
    }

    /// Get a cart entry by ID
    #[oai(path = "/carts/:id", method = "get", tag = "ApiTags::Carts")]
    async fn find_by_id(&self, id: Path<String>) -> FindCartByIdResponse {
        let Some(id) = parse_id(&id.0) else {
            return FindCartByIdResponse::BadRequest(MessageEnvelope::failure(INVALID_REQUEST));
        };

        match self
            .find_by_id_use_case
            .execute(FindCartByIdParams { id })
            .await
        {
            Ok(cart) => FindCartByIdResponse::Ok(Json(cart.into())),
            Err(err) => {
                tracing::debug!("cart {id} lookup failed: {err}");
                FindCartByIdResponse::NotFound(MessageEnvelope::failure(format!(
                    "data with id {id} not found"
                )))
            }
        }
    }

    /// Update a cart entry
    ///
    /// Replaces the product and/or quantity of an entry and reports how many
    /// rows changed.
    #[oai(path = "/carts/:id", method = "put", tag = "ApiTags::Carts")]
    async fn update(&self, id: Path<String>, body: Body) -> UpdateCartResponse {
        let Some(id) = parse_id(&id.0) else {
            return UpdateCartResponse::BadRequest(MessageEnvelope::failure(INVALID_REQUEST));
        };

        let payload = match read_json::<UpdateCartRequest>(body).await {
            Ok(payload) => payload,
            Err(message) => {
                return UpdateCartResponse::BadRequest(MessageEnvelope::failure(message));
            }
        };

        let params = UpdateCartParams {
            id,
            product_id: payload.product_id,
            quantity: payload.quantity,
        };

        match self.update_use_case.execute(params).await {
            Ok(count) => UpdateCartResponse::Ok(MessageEnvelope::success(format!(
                "Updated data amount {count}"
            ))),
            Err(err) => UpdateCartResponse::InternalError(err.into_error_response()),
        }
    }

    /// Remove a cart entry
    ///
    /// Deletes the entry if it belongs to the caller and reports how many rows
    /// were removed.
    #[oai(path = "/carts/:id", method = "delete", tag = "ApiTags::Carts")]
    async fn delete(&self, req: &Request, id: Path<String>) -> DeleteCartResponse {
        let Some(id) = parse_id(&id.0) else {
            return DeleteCartResponse::BadRequest(MessageEnvelope::failure(INVALID_REQUEST));
        };

        let user_id = match self.tokens.user_id(req) {
            Ok(user_id) => user_id,
            Err(err) => return DeleteCartResponse::InternalError(err.into_error_response()),
        };

        match self
            .delete_use_case
            .execute(DeleteCartParams { user_id, id })
            .await
        {
            Ok(count) => DeleteCartResponse::Ok(MessageEnvelope::success(format!(
                "Deleted data amount {count}"
            ))),
            Err(err) => DeleteCartResponse::InternalError(err.into_error_response()),
        }
    }
}

#[derive(ApiResponse)]
pub enum SaveCartResponse {
    #[oai(status = 201)]
    Created(Json<CartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<MessageEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<MessageEnvelope>),
}

#[derive(ApiResponse)]
pub enum FindAllCartsResponse {
    #[oai(status = 200)]
    Ok(Json<CartListEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<MessageEnvelope>),
}

#[derive(ApiResponse)]
pub enum FindCartByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<MessageEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<MessageEnvelope>),
}

#[derive(ApiResponse)]
pub enum UpdateCartResponse {
    #[oai(status = 200)]
    Ok(Json<MessageEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<MessageEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<MessageEnvelope>),
}

#[derive(ApiResponse)]
pub enum DeleteCartResponse {
    #[oai(status = 200)]
    Ok(Json<MessageEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<MessageEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<MessageEnvelope>),
}
