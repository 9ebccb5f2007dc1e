use actix_web::{error, HttpRequest, HttpResponse};
use actix_web::error::UrlencodedError;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use log::warn;

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("invalid form submission")]
    InvalidForm,
    #[display("failed to render page")]
    RenderFailed,
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::InvalidForm => StatusCode::BAD_REQUEST,
            CustomError::RenderFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::html())
            .body(self.to_string())
    }
}

/// Form extractor failures become a plain html 400.
pub(crate) fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    warn!("rejecting form posted to {}, {}", req.path(), err);
    CustomError::InvalidForm.into()
}
