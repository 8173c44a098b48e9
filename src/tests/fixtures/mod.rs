pub mod channels;
pub mod http_server;
pub mod raw_fields;
pub mod state;
