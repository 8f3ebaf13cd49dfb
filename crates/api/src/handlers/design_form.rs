//! Extractor for design submissions, which arrive either as a multipart
//! form (`type`, `url`, `file`) or as a JSON object (`type`, `url`).

use agentdeck_core::request::{DesignRequest, UploadedFile};
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;

use crate::error::AppError;

/// A [`DesignRequest`] read from either body encoding.
#[derive(Debug)]
pub struct DesignForm(pub DesignRequest);

impl<S> FromRequest<S> for DesignForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let Json(form) = Json::<DesignRequest>::from_request(req, state).await?;
            return Ok(DesignForm(form));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let mut form = DesignRequest::default();
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("type") => form.input_type = Some(field.text().await?),
                Some("url") => form.url = Some(field.text().await?),
                Some("file") => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?.to_vec();
                    form.file = Some(UploadedFile {
                        content_type,
                        bytes,
                    });
                }
                _ => {}
            }
        }
        Ok(DesignForm(form))
    }
}
