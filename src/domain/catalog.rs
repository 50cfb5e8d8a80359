use serde::Serialize;
use uuid::Uuid;

/// A named section of the menu, e.g. "Cheeses" or "Vegetables".
///
/// Deleting a group cascades to every ingredient in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientGroup {
    pub id: Uuid,
    pub name: String,
}

/// Payload for creating a new ingredient group.
#[derive(Debug, Clone)]
pub struct GroupCreate {
    pub name: String,
}

/// Payload for updating an existing ingredient group.
#[derive(Debug, Clone)]
pub struct GroupPatch {
    pub name: Option<String>,
}

/// A single orderable ingredient with its per-unit cost.
///
/// Names need not be unique; the id is the only identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub group_id: Uuid,
    pub unit_cost: f64,
}

/// Payload for creating a new ingredient.
#[derive(Debug, Clone)]
pub struct IngredientCreate {
    pub name: String,
    pub group_id: Uuid,
    pub unit_cost: f64,
}

/// Payload for updating an existing ingredient.
#[derive(Debug, Clone)]
pub struct IngredientPatch {
    pub name: Option<String>,
    pub group_id: Option<Uuid>,
    pub unit_cost: Option<f64>,
}

/// Shared name rule for groups and ingredients.
pub(crate) fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if name.len() > 64 {
        return Err("name must be at most 64 characters".to_string());
    }
    Ok(())
}

/// Unit costs must be actual non-negative numbers.
pub(crate) fn validate_unit_cost(unit_cost: f64) -> Result<(), String> {
    if !unit_cost.is_finite() || unit_cost < 0.0 {
        return Err(format!("unit cost must be non-negative, got {unit_cost}"));
    }
    Ok(())
}
