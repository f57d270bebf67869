use super::{
    request::{Body, HttpRequest},
    request_builder::{Get, InitBuilder, Post, RequestBuilder},
    Error,
};

#[derive(Clone, Debug)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new() -> Client {
        Client(reqwest::Client::new())
    }

    pub async fn send(&self, request: HttpRequest) -> Result<reqwest::Response, Error> {
        log::debug!("{:?} {}", request.method, request.url);

        let mut builder = self.0.request(request.method.into(), &request.url);

        if let Some(headers) = request.headers {
            builder = builder.headers(headers);
        }

        if let Some(body) = request.body {
            builder = match body {
                Body::Json(json) => builder.json(&json),
            }
        }

        builder
            .send()
            .await
            .map_err(|cause| Error::SendRequest { cause })
    }
}

pub trait ClientRequestBuilder {
    fn get(&self, url: impl Into<String>) -> RequestBuilder<Get>;
    fn post(&self, url: impl Into<String>) -> RequestBuilder<Post>;
}

impl ClientRequestBuilder for Client {
    fn get(&self, url: impl Into<String>) -> RequestBuilder<Get> {
        InitBuilder::get(self.clone(), url)
    }

    fn post(&self, url: impl Into<String>) -> RequestBuilder<Post> {
        InitBuilder::post(self.clone(), url)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
