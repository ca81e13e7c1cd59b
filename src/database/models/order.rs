use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Product;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: String,
    pub total_price: f64,
    pub order_date: DateTime<Utc>,   // stamped server-side at creation
    pub products: Vec<Product>,      // denormalized snapshots, stored as JSONB
}
