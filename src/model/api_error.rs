use super::CalcError;
use rocket::{
    http::{ContentType, Status},
    request::Request,
    response::{self, Responder, Response},
    serde::Serialize,
};
use std::io::Cursor;
use tracing::warn;

#[derive(Debug)]
pub struct ApiError {
    pub status: Status,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    pub fn new(status: Status, message: impl Into<String>) -> ApiError {
        ApiError {
            status,
            message: message.into(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        warn!(
            status = self.status.code,
            uri = %req.uri(),
            message = %self.message,
            "Request rejected"
        );

        let body = serde_json::to_string(&ErrorBody {
            error: &self.message,
        })
        .map_err(|_| Status::InternalServerError)?;

        Response::build()
            .header(ContentType::JSON)
            .status(self.status)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

impl From<CalcError> for ApiError {
    fn from(e: CalcError) -> Self {
        ApiError::new(e.status(), e.to_string())
    }
}
