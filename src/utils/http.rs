//! Retryable HTTP client construction for node JSON-RPC traffic.

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{
	default_on_request_failure, default_on_request_success, policies::ExponentialBackoff, Jitter,
	RetryTransientMiddleware, Retryable, RetryableStrategy,
};
use std::time::Duration;

/// Retry policy for requests against a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
	/// Maximum number of retries for transient errors
	pub max_retries: u32,
	/// Base of the exponential backoff
	pub base_for_backoff: u32,
	/// Backoff before the first retry
	pub initial_backoff: Duration,
	/// Upper bound of a single backoff
	pub max_backoff: Duration,
	/// Randomize backoff durations
	pub jitter: bool,
}

impl Default for RetryConfig {
	fn default() -> Self {
		Self {
			max_retries: 3,
			base_for_backoff: 2,
			initial_backoff: Duration::from_millis(250),
			max_backoff: Duration::from_secs(10),
			jitter: true,
		}
	}
}

impl RetryConfig {
	/// A policy that never retries, mostly useful in tests.
	pub fn no_retries() -> Self {
		Self {
			max_retries: 0,
			..Self::default()
		}
	}
}

/// Retries on connection failures and on the status codes `reqwest-retry` treats
/// as transient (408, 429, 5xx)
pub struct TransientErrorRetryStrategy;

impl RetryableStrategy for TransientErrorRetryStrategy {
	fn handle(
		&self,
		res: &Result<reqwest::Response, reqwest_middleware::Error>,
	) -> Option<Retryable> {
		match res {
			Ok(success) => default_on_request_success(success),
			Err(error) => default_on_request_failure(error),
		}
	}
}

/// Wraps `base_client` with exponential-backoff retries for transient failures.
pub fn create_retryable_http_client(
	config: &RetryConfig,
	base_client: reqwest::Client,
) -> ClientWithMiddleware {
	let jitter = if config.jitter {
		Jitter::Full
	} else {
		Jitter::None
	};

	let retry_policy = ExponentialBackoff::builder()
		.jitter(jitter)
		.base(config.base_for_backoff)
		.retry_bounds(config.initial_backoff, config.max_backoff)
		.build_with_max_retries(config.max_retries);

	ClientBuilder::new(base_client)
		.with(RetryTransientMiddleware::new_with_policy_and_strategy(
			retry_policy,
			TransientErrorRetryStrategy,
		))
		.build()
}
