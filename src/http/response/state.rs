use crate::http::Error;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Body of a non-2xx response: the parsed JSON document when the server sent
/// one, the raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Json(Value),
    Text(String),
}

impl ErrorBody {
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(json) => ErrorBody::Json(json),
            Err(_) => ErrorBody::Text(text),
        }
    }

    /// The `message` field GitHub puts on its error documents.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorBody::Json(json) => json.get("message").and_then(Value::as_str),
            ErrorBody::Text(_) => None,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorBody::Json(json) => write!(f, "{}", json),
            ErrorBody::Text(text) => write!(f, "{}", text),
        }
    }
}

pub enum ErrorResponse {
    Status { status: u16, body: ErrorBody },
    Read(reqwest::Error),
    Parse(serde_json::Error),
}

pub enum Response<T> {
    Success(T),
    Error(ErrorResponse),
}

impl<T> Response<T> {
    pub fn collect(self) -> Result<T, Error> {
        match self {
            Response::Success(payload) => Ok(payload),
            Response::Error(ErrorResponse::Status { status, body }) => {
                Err(Error::Status { status, body })
            }
            Response::Error(ErrorResponse::Read(cause)) => Err(Error::ReadResponseText { cause }),
            Response::Error(ErrorResponse::Parse(cause)) => Err(Error::ParseResponse { cause }),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait AsyncFrom<T>: Sized {
    async fn async_from(value: T) -> Self;
}

impl<T> AsyncFrom<reqwest::Response> for Response<T>
where
    T: DeserializeOwned,
{
    async fn async_from(value: reqwest::Response) -> Self {
        let status = value.status().as_u16();

        let text = match value.text().await {
            Ok(text) => text,
            Err(err) => return Response::Error(ErrorResponse::Read(err)),
        };

        if !(200..300).contains(&status) {
            return Response::Error(ErrorResponse::Status {
                status,
                body: ErrorBody::from_text(text),
            });
        }

        match serde_json::from_str::<T>(&text) {
            Ok(payload) => Response::Success(payload),
            Err(err) => Response::Error(ErrorResponse::Parse(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[test]
    fn should_keep_json_error_bodies_parsed() {
        let body = ErrorBody::from_text(r#"{"message":"Validation Failed"}"#.to_string());

        assert_eq!(body, ErrorBody::Json(json!({"message": "Validation Failed"})));
        assert_eq!(body.message(), Some("Validation Failed"));
    }

    #[test]
    fn should_fall_back_to_raw_text() {
        let body = ErrorBody::from_text("Bad Gateway".to_string());

        assert_eq!(body, ErrorBody::Text("Bad Gateway".to_string()));
        assert_eq!(body.message(), None);
        assert_eq!(body.to_string(), "Bad Gateway");
    }

    #[tokio::test]
    async fn should_collect_success_payload() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/")
            .with_status(201)
            .with_body(r#"{"number":7}"#)
            .create_async()
            .await;

        let response = reqwest::get(server.url()).await?;
        let payload = Response::<Value>::async_from(response).await.collect()?;

        assert_eq!(payload, json!({"number": 7}));
        m.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_turn_non_success_status_into_error() -> Result<(), Box<dyn std::error::Error>>
    {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/")
            .with_status(422)
            .with_body(r#"{"message":"Validation Failed"}"#)
            .create_async()
            .await;

        let response = reqwest::get(server.url()).await?;
        let result = Response::<Value>::async_from(response).await.collect();

        match result {
            Err(Error::Status { status, body }) => {
                assert_eq!(status, 422);
                assert_eq!(body.message(), Some("Validation Failed"));
            }
            _ => panic!("expected a status error"),
        }
        m.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_report_unparseable_success_body() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let response = reqwest::get(server.url()).await?;
        let result = Response::<Value>::async_from(response).await.collect();

        assert!(matches!(result, Err(Error::ParseResponse { .. })));

        Ok(())
    }
}
