mod state;

pub use state::AsyncFrom;
pub use state::ErrorBody;
pub use state::ErrorResponse;
pub use state::Response;
