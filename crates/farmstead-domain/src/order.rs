//! Order domain types.

use serde::{Deserialize, Serialize};

/// Collection an order lives in. Egg and livestock orders share one shape.
///
/// Wire format: the collection name, `"eggOrders"` or `"livestockOrders"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderCollection {
    EggOrders,
    LivestockOrders,
}

impl OrderCollection {
    /// Exact, case-sensitive match on the collection name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "eggOrders" => Some(Self::EggOrders),
            "livestockOrders" => Some(Self::LivestockOrders),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EggOrders => "eggOrders",
            Self::LivestockOrders => "livestockOrders",
        }
    }
}

/// One line of an order: a product label and how many were ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub quantity: i64,
}
