//! Admin panel: manuscript management over form posts

use std::collections::HashMap;

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::error_response;
use crate::domain::{DomainError, ManuscriptFields};
use crate::infrastructure::AppState;
use crate::infrastructure::file_store::Upload;

/// Raw admin form: text fields plus the optional `cover` and `pdf` file parts.
///
/// Accepts `multipart/form-data` (add/edit with files) and url-encoded bodies
/// (delete buttons post without files).
#[derive(Debug, Default)]
pub struct AdminSubmission {
    pub fields: HashMap<String, String>,
    pub cover: Option<Upload>,
    pub pdf: Option<Upload>,
}

#[axum::async_trait]
impl<S> FromRequest<S> for AdminSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self {
                fields,
                ..Default::default()
            });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let mut submission = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "cover" | "pdf" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.map_err(malformed)?;
                    let upload = Upload::new(filename, bytes.to_vec());
                    if name == "cover" {
                        submission.cover = Some(upload);
                    } else {
                        submission.pdf = Some(upload);
                    }
                }
                _ => {
                    let value = field.text().await.map_err(malformed)?;
                    submission.fields.insert(name, value);
                }
            }
        }

        Ok(submission)
    }
}

fn malformed(e: axum::extract::multipart::MultipartError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("Malformed form data: {}", e) })),
    )
        .into_response()
}

/// The three things the admin form can ask for
#[derive(Debug)]
pub enum AdminAction {
    Add {
        fields: ManuscriptFields,
        cover: Option<Upload>,
        pdf: Option<Upload>,
    },
    Edit {
        id: i32,
        fields: ManuscriptFields,
        cover: Option<Upload>,
        pdf: Option<Upload>,
    },
    Delete {
        id: i32,
    },
}

impl AdminSubmission {
    /// Resolve the action marker. When several markers are sent, add wins over
    /// edit and edit over delete.
    pub fn into_action(mut self) -> Result<AdminAction, DomainError> {
        if self.fields.contains_key("add_manuscript") {
            Ok(AdminAction::Add {
                fields: self.take_fields()?,
                cover: self.cover,
                pdf: self.pdf,
            })
        } else if self.fields.contains_key("edit_manuscript") {
            Ok(AdminAction::Edit {
                id: self.take_id()?,
                fields: self.take_fields()?,
                cover: self.cover,
                pdf: self.pdf,
            })
        } else if self.fields.contains_key("delete_manuscript") {
            Ok(AdminAction::Delete {
                id: self.take_id()?,
            })
        } else {
            Err(DomainError::Validation(
                "expected one of add_manuscript, edit_manuscript or delete_manuscript".to_string(),
            ))
        }
    }

    fn take(&mut self, key: &str) -> Result<String, DomainError> {
        self.fields
            .remove(key)
            .ok_or_else(|| DomainError::Validation(format!("missing field '{}'", key)))
    }

    fn take_id(&mut self) -> Result<i32, DomainError> {
        let raw = self.take("id")?;
        raw.trim()
            .parse()
            .map_err(|_| DomainError::Validation(format!("invalid manuscript id '{}'", raw)))
    }

    fn take_fields(&mut self) -> Result<ManuscriptFields, DomainError> {
        Ok(ManuscriptFields {
            title: self.take("title")?,
            era: self.take("era")?,
            genre: self.take("genre")?,
            description: self.take("description")?,
        })
    }
}

pub async fn admin_page(State(state): State<AppState>) -> impl IntoResponse {
    listing_response(&state, StatusCode::OK, json!({})).await
}

pub async fn admin_submit(
    State(state): State<AppState>,
    submission: AdminSubmission,
) -> impl IntoResponse {
    let action = match submission.into_action() {
        Ok(action) => action,
        Err(e) => return error_response(e),
    };

    match action {
        AdminAction::Add { fields, cover, pdf } => {
            match state.catalog.create(fields, cover, pdf).await {
                Ok(manuscript) => {
                    listing_response(
                        &state,
                        StatusCode::CREATED,
                        json!({ "message": "Manuscript added", "manuscript": manuscript }),
                    )
                    .await
                }
                Err(e) => error_response(e),
            }
        }
        AdminAction::Edit {
            id,
            fields,
            cover,
            pdf,
        } => match state.catalog.update(id, fields, cover, pdf).await {
            Ok(manuscript) => {
                listing_response(
                    &state,
                    StatusCode::OK,
                    json!({ "message": "Manuscript updated", "manuscript": manuscript }),
                )
                .await
            }
            Err(e) => error_response(e),
        },
        AdminAction::Delete { id } => match state.catalog.delete(id).await {
            Ok(()) => {
                listing_response(
                    &state,
                    StatusCode::OK,
                    json!({ "message": "Manuscript deleted" }),
                )
                .await
            }
            Err(e) => error_response(e),
        },
    }
}

/// Merge the current manuscript list into `body`
async fn listing_response(
    state: &AppState,
    status: StatusCode,
    mut body: serde_json::Value,
) -> Response {
    match state.catalog.list().await {
        Ok(manuscripts) => {
            body["total"] = json!(manuscripts.len());
            body["manuscripts"] = json!(manuscripts);
            (status, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}
