pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Conflict: {message}")]
	Conflict { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<stride_storage::Error> for Error {
	fn from(err: stride_storage::Error) -> Self {
		match err {
			stride_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			stride_storage::Error::NotFound(message) => Self::NotFound { message },
			stride_storage::Error::Conflict(message) => Self::Conflict { message },
			stride_storage::Error::Cache(message) => Self::Storage { message },
		}
	}
}
