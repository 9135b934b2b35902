use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdfmClientError {
    #[error("Upstream returned status {code}")]
    Status { code: u16, body: String },

    #[error("Request timed out")]
    Timeout,

    #[error(transparent)]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for IdfmClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            IdfmClientError::Timeout
        } else {
            IdfmClientError::Request(e)
        }
    }
}
