use uuid::Uuid;

use crate::actor_framework::Entity;
use crate::domain::{ConfirmOutcome, Order, OrderCreate};
use super::actions::{OrderAction, OrderActionResult};

impl Entity for Order {
    type Id = Uuid;
    type CreateParams = OrderCreate;
    type Patch = (); // Orders change through actions only
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    /// Orders start as drafts: no contact info, nothing submitted or
    /// confirmed.
    fn from_create_params(id: Uuid, params: OrderCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            email: None,
            phone: None,
            name: None,
            pizza_id: params.pizza_id,
            submitted: false,
            confirmed: false,
            confirmed_at: None,
            created_at: params.created_at,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::SubmitContact(contact) => {
                self.email = Some(contact.email);
                self.phone = Some(contact.phone);
                self.name = Some(contact.name);
                self.submitted = true;
                Ok(OrderActionResult::SubmitContact(self.clone()))
            }
            OrderAction::Confirm { supplied, expected, at } => {
                // An already-confirmed order short-circuits without
                // re-checking the code.
                if self.confirmed {
                    return Ok(OrderActionResult::Confirm(ConfirmOutcome::AlreadyConfirmed(
                        self.clone(),
                    )));
                }
                if supplied == expected {
                    self.confirmed = true;
                    self.confirmed_at = Some(at);
                    Ok(OrderActionResult::Confirm(ConfirmOutcome::Confirmed(self.clone())))
                } else {
                    Ok(OrderActionResult::Confirm(ConfirmOutcome::InvalidToken))
                }
            }
        }
    }
}
