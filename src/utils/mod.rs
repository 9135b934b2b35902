pub mod credentials;
pub mod idfm_client;
pub mod idfm_client_error;
pub mod time_format;
pub mod tool_args;
