//! JSON body extractor that runs `validator` rules before the handler sees the value

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Request body that deserialized and passed its validation rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::invalid_body(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Rename {
        #[validate(length(min = 1, max = 8))]
        name: String,
    }

    fn request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let ValidatedJson(body) =
            ValidatedJson::<Rename>::from_request(request(r#"{"name":"mira"}"#), &())
                .await
                .unwrap();
        assert_eq!(body.name, "mira");
    }

    #[tokio::test]
    async fn test_rejects_broken_and_invalid_bodies() {
        let err = ValidatedJson::<Rename>::from_request(request("{"), &())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_BODY");

        let err = ValidatedJson::<Rename>::from_request(request(r#"{"name":""}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
