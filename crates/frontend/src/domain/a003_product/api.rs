use contracts::domain::a003_product::aggregate::{Product, ProductId, ProductPayload};

use crate::shared::api_utils::{ApiClient, ApiError};

pub async fn fetch_all(api: &ApiClient) -> Result<Vec<Product>, ApiError> {
    api.get_json("/products").await
}

pub async fn create(api: &ApiClient, payload: &ProductPayload) -> Result<(), ApiError> {
    api.post("/products", payload).await
}

pub async fn update(api: &ApiClient, id: ProductId, payload: &ProductPayload) -> Result<(), ApiError> {
    api.put(&format!("/products/{}", id), payload).await
}

pub async fn delete(api: &ApiClient, id: ProductId) -> Result<(), ApiError> {
    api.delete(&format!("/products/{}", id)).await
}
