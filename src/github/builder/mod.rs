mod create_pull_request_builder;

pub use create_pull_request_builder::CreatePullRequestBuilder;

#[allow(async_fn_in_trait)]
pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> super::error::Result<Self::Output>;
}
