use uuid::Uuid;

use crate::actor_framework::Entity;
use crate::domain::{Pizza, PizzaCreate};

impl Entity for Pizza {
    type Id = Uuid;
    type CreateParams = PizzaCreate;
    type Patch = (); // No update path once composed
    type Action = ();
    type ActionResult = ();

    /// The pizza and its line items are stored as one unit. The composer
    /// skips zero amounts before building the payload; a zero here is an
    /// invariant violation and rejects the whole pizza.
    fn from_create_params(id: Uuid, params: PizzaCreate) -> Result<Self, String> {
        if params.line_items.iter().any(|li| li.amount == 0) {
            return Err("line items must have a positive amount".to_string());
        }
        Ok(Self {
            id,
            dough: params.dough,
            line_items: params.line_items,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
