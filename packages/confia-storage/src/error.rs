#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Http(#[from] reqwest::Error),
	#[error("Unexpected store response: {0}")]
	UnexpectedResponse(String),
}
