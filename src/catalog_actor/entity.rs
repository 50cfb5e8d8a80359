use uuid::Uuid;

use crate::actor_framework::Entity;
use crate::domain::catalog::{validate_name, validate_unit_cost};
use crate::domain::{
    GroupCreate, GroupPatch, Ingredient, IngredientCreate, IngredientGroup, IngredientPatch,
};

impl Entity for IngredientGroup {
    type Id = Uuid;
    type CreateParams = GroupCreate;
    type Patch = GroupPatch;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: Uuid, params: GroupCreate) -> Result<Self, String> {
        validate_name(&params.name)?;
        Ok(Self {
            id,
            name: params.name,
        })
    }

    fn on_update(&mut self, patch: GroupPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            validate_name(&name)?;
            self.name = name;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}

impl Entity for Ingredient {
    type Id = Uuid;
    type CreateParams = IngredientCreate;
    type Patch = IngredientPatch;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: Uuid, params: IngredientCreate) -> Result<Self, String> {
        validate_name(&params.name)?;
        validate_unit_cost(params.unit_cost)?;
        Ok(Self {
            id,
            name: params.name,
            group_id: params.group_id,
            unit_cost: params.unit_cost,
        })
    }

    /// Group existence for a moved ingredient is checked by the catalog
    /// client before the patch reaches the store.
    fn on_update(&mut self, patch: IngredientPatch) -> Result<(), String> {
        if let Some(ref name) = patch.name {
            validate_name(name)?;
        }
        if let Some(unit_cost) = patch.unit_cost {
            validate_unit_cost(unit_cost)?;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(group_id) = patch.group_id {
            self.group_id = group_id;
        }
        if let Some(unit_cost) = patch.unit_cost {
            self.unit_cost = unit_cost;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
