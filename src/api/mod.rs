pub mod client;
pub mod customers;
pub mod domains;
pub mod query;

pub use client::ResellerClient;
pub use customers::{CustomerCreateParams, Customers};
pub use domains::Domains;
pub use query::Query;
