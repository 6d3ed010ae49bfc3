pub mod http;
pub mod payment;
