pub mod order;
pub mod product;

pub use order::Order;
pub use product::Product;
