mod macros;

mod catalog_client;
mod order_client;
mod pizza_client;

pub use catalog_client::{CatalogClient, Menu};
pub use order_client::OrderClient;
pub use pizza_client::PizzaClient;
