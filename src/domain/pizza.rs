use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

/// The base of a pizza. Only two kinds are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dough {
    Thin,
    Deep,
}

impl FromStr for Dough {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thin" => Ok(Dough::Thin),
            "deep" => Ok(Dough::Deep),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Dough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dough::Thin => write!(f, "thin"),
            Dough::Deep => write!(f, "deep"),
        }
    }
}

/// One (ingredient, amount) pairing on a pizza.
///
/// Name and unit cost are captured at composition time, so later catalog
/// edits or deletions never reprice or dangle an existing pizza.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PizzaLineItem {
    pub ingredient_id: Uuid,
    pub name: String,
    pub unit_cost: f64,
    pub amount: u32,
}

impl PizzaLineItem {
    pub fn line_price(&self) -> f64 {
        self.unit_cost * f64::from(self.amount)
    }
}

/// A composed pizza. Immutable once created; an order references it by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pizza {
    pub id: Uuid,
    pub dough: Dough,
    pub line_items: Vec<PizzaLineItem>,
}

impl Pizza {
    /// Sum of all line prices.
    pub fn price(&self) -> f64 {
        self.line_items.iter().map(PizzaLineItem::line_price).sum()
    }
}

/// Payload for persisting a composed pizza with its line items as a unit.
#[derive(Debug, Clone)]
pub struct PizzaCreate {
    pub dough: Dough,
    pub line_items: Vec<PizzaLineItem>,
}
