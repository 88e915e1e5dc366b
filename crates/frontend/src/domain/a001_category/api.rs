use contracts::domain::a001_category::aggregate::{Category, CategoryId, CategoryPayload};

use crate::shared::api_utils::{ApiClient, ApiError};

pub async fn fetch_all(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    api.get_json("/categories").await
}

pub async fn create(api: &ApiClient, payload: &CategoryPayload) -> Result<(), ApiError> {
    api.post("/categories", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: CategoryId,
    payload: &CategoryPayload,
) -> Result<(), ApiError> {
    api.put(&format!("/categories/{}", id), payload).await
}

pub async fn delete(api: &ApiClient, id: CategoryId) -> Result<(), ApiError> {
    api.delete(&format!("/categories/{}", id)).await
}
