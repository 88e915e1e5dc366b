use contracts::domain::a002_subcategory::aggregate::{Subcategory, SubcategoryId, SubcategoryPayload};

use crate::shared::api_utils::{ApiClient, ApiError};

pub async fn fetch_all(api: &ApiClient) -> Result<Vec<Subcategory>, ApiError> {
    api.get_json("/subcategories").await
}

pub async fn create(api: &ApiClient, payload: &SubcategoryPayload) -> Result<(), ApiError> {
    api.post("/subcategories", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: SubcategoryId,
    payload: &SubcategoryPayload,
) -> Result<(), ApiError> {
    api.put(&format!("/subcategories/{}", id), payload).await
}

pub async fn delete(api: &ApiClient, id: SubcategoryId) -> Result<(), ApiError> {
    api.delete(&format!("/subcategories/{}", id)).await
}
