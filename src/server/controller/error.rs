use actix_web::{error, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use crate::server::database::RepositoryError;
use crate::server::usecase::create_order::CreateOrderError;

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum CustomError {
    #[display("invalid request: {_0}")]
    BadRequest(#[error(not(source))] String),
    #[display("order already exists")]
    Conflict,
    #[display("database error")]
    DbError,
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CustomError::Conflict => StatusCode::CONFLICT,
            CustomError::DbError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

impl From<RepositoryError> for CustomError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Duplicate(_) => CustomError::Conflict,
            RepositoryError::Db(_) => CustomError::DbError,
        }
    }
}

impl From<CreateOrderError<RepositoryError>> for CustomError {
    fn from(e: CreateOrderError<RepositoryError>) -> Self {
        match e {
            CreateOrderError::Invalid(e) => CustomError::BadRequest(e.to_string()),
            CreateOrderError::Repository(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use crate::server::model::order::OrderError;

    #[test]
    fn status_codes() {
        assert_eq!(CustomError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(CustomError::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(CustomError::DbError.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn from_create_order_error() {
        assert_eq!(
            CustomError::from(CreateOrderError::Invalid(OrderError::InvalidTax)),
            CustomError::BadRequest("invalid tax".to_string())
        );
        assert_eq!(
            CustomError::from(CreateOrderError::Repository(RepositoryError::Duplicate("1".into()))),
            CustomError::Conflict
        );
    }
}
