use super::{
    client::Client,
    request::{Body, HttpRequest, Method},
    response::{AsyncFrom, Response},
    Error,
};
use reqwest::header::HeaderMap;
use serde::{de::DeserializeOwned, Serialize};

pub trait RequestType {}
pub struct Get;
pub struct Post;

impl RequestType for Get {}
impl RequestType for Post {}

pub struct InitBuilder {}

impl InitBuilder {
    pub fn get(client: Client, url: impl Into<String>) -> RequestBuilder<Get> {
        RequestBuilder {
            _marker: std::marker::PhantomData,
            client,
            request: HttpRequest::new(Method::Get, url),
        }
    }

    pub fn post(client: Client, url: impl Into<String>) -> RequestBuilder<Post> {
        RequestBuilder {
            _marker: std::marker::PhantomData,
            client,
            request: HttpRequest::new(Method::Post, url),
        }
    }
}

pub struct RequestBuilder<T: RequestType> {
    _marker: std::marker::PhantomData<T>,
    client: Client,
    request: HttpRequest,
}

impl<T> RequestBuilder<T>
where
    T: RequestType,
{
    pub fn headers(mut self, headers: &HeaderMap) -> Self {
        self.request.headers(headers.clone());
        self
    }

    /// Sends the request and returns the raw transport response,
    /// whatever its status.
    pub async fn send(self) -> Result<reqwest::Response, Error> {
        self.client.send(self.request).await
    }

    /// Sends the request and deserializes a 2xx body into `R`.
    /// Any other status becomes [`Error::Status`].
    pub async fn fetch<R>(self) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let response = self.send().await?;
        Response::<R>::async_from(response).await.collect()
    }
}

impl RequestBuilder<Post> {
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, Error> {
        let value = serde_json::to_value(body).map_err(|cause| Error::Serialize { cause })?;
        self.request.body(Body::Json(value));
        Ok(self)
    }
}
