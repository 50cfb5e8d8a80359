use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use super::PizzaClient;
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::confirm::CodeGenerator;
use crate::domain::{ConfirmOutcome, ContactInfo, Order, OrderCreate};
use crate::email::{confirmation_email, confirmation_link, EmailSender};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Client for the order store.
///
/// Handles the lifecycle orchestration: validating the pizza on
/// creation, dispatching the confirmation email on submission, and
/// recomputing the expected code when a confirmation link is visited.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    pizza_client: PizzaClient,
    codes: CodeGenerator,
    email: Arc<dyn EmailSender>,
    base_url: String,
    email_from: String,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        pizza_client: PizzaClient,
        codes: CodeGenerator,
        email: Arc<dyn EmailSender>,
        base_url: String,
        email_from: String,
    ) -> Self {
        Self {
            inner,
            pizza_client,
            codes,
            email,
            base_url,
            email_from,
        }
    }

    fn comm(e: FrameworkError) -> OrderError {
        OrderError::ActorCommunicationError(e.to_string())
    }

    /// Order-facing routes carry the id as a string; anything that is
    /// not a well-formed UUID fails here, before any lookup.
    fn parse_id(raw: &str) -> Result<Uuid, OrderError> {
        Uuid::parse_str(raw).map_err(|_| OrderError::MalformedId(raw.to_string()))
    }

    /// Creates a draft order wrapping an existing pizza.
    #[instrument(skip(self))]
    pub async fn create_order(&self, pizza_id: Uuid) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        match self.pizza_client.get_pizza(pizza_id).await {
            Ok(Some(pizza)) => debug!(line_items = pizza.line_items.len(), "Pizza validated"),
            Ok(None) => {
                error!("Pizza not found");
                return Err(OrderError::PizzaNotFound(pizza_id));
            }
            Err(e) => {
                error!(error = %e, "Pizza validation failed");
                return Err(OrderError::ActorCommunicationError(e.to_string()));
            }
        }

        let id = self
            .inner
            .create(OrderCreate {
                pizza_id,
                created_at: Utc::now(),
            })
            .await
            .map_err(Self::comm)?;
        info!(order_id = %id, "Order created");

        self.inner
            .get(id)
            .await
            .map_err(Self::comm)?
            .ok_or(OrderError::NotFound(id))
    }

    /// Saves contact details, marks the order submitted and dispatches
    /// the confirmation email. Re-submission overwrites the contact
    /// fields and sends the email again.
    #[instrument(skip(self, contact))]
    pub async fn submit_contact(
        &self,
        order_id: &str,
        contact: ContactInfo,
    ) -> Result<Order, OrderError> {
        let id = Self::parse_id(order_id)?;
        contact.validate().map_err(OrderError::ValidationError)?;

        let result = self
            .inner
            .perform_action(id, OrderAction::SubmitContact(contact))
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => OrderError::NotFound(id),
                other => Self::comm(other),
            })?;
        let order = match result {
            OrderActionResult::SubmitContact(order) => order,
            other => {
                return Err(OrderError::ActorCommunicationError(format!(
                    "Unexpected result: {other:?}"
                )))
            }
        };

        let pizza = self
            .pizza_client
            .get_pizza(order.pizza_id)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
            .ok_or(OrderError::PizzaNotFound(order.pizza_id))?;

        let code = self.codes.code_for(&order);
        let link = confirmation_link(&self.base_url, order.id, &code);
        let message = confirmation_email(&order, &pizza, &self.email_from, &link);
        // A failed send is not rolled back: the order stays submitted
        // and the customer can re-submit to trigger a resend.
        match self.email.send(message).await {
            Ok(()) => info!(order_id = %order.id, "Confirmation email dispatched"),
            Err(e) => warn!(error = %e, order_id = %order.id, "Confirmation email failed"),
        }

        Ok(order)
    }

    /// Handles a confirmation-link visit.
    #[instrument(skip(self, supplied_code))]
    pub async fn confirm(
        &self,
        order_id: &str,
        supplied_code: &str,
    ) -> Result<ConfirmOutcome, OrderError> {
        let id = Self::parse_id(order_id)?;
        let order = self
            .inner
            .get(id)
            .await
            .map_err(Self::comm)?
            .ok_or(OrderError::NotFound(id))?;

        // The expected code is recomputed from the order's current
        // state; nothing is ever stored.
        let expected = self.codes.code_for(&order);
        let result = self
            .inner
            .perform_action(
                id,
                OrderAction::Confirm {
                    supplied: supplied_code.to_string(),
                    expected,
                    at: Utc::now(),
                },
            )
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => OrderError::NotFound(id),
                other => Self::comm(other),
            })?;

        match result {
            OrderActionResult::Confirm(outcome) => {
                match &outcome {
                    ConfirmOutcome::Confirmed(_) => info!(order_id = %id, "Order confirmed"),
                    ConfirmOutcome::AlreadyConfirmed(_) => {
                        debug!(order_id = %id, "Order already confirmed")
                    }
                    ConfirmOutcome::InvalidToken => {
                        warn!(order_id = %id, "Invalid confirmation token")
                    }
                }
                Ok(outcome)
            }
            other => Err(OrderError::ActorCommunicationError(format!(
                "Unexpected result: {other:?}"
            ))),
        }
    }

    /// Submitted orders, newest first. Drafts never appear here.
    #[instrument(skip(self))]
    pub async fn list_submitted(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders: Vec<Order> = self
            .inner
            .list()
            .await
            .map_err(Self::comm)?
            .into_iter()
            .filter(|o| o.submitted)
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// Total price of the wrapped pizza.
    #[instrument(skip(self))]
    pub async fn order_total(&self, order_id: Uuid) -> Result<f64, OrderError> {
        let order = self
            .inner
            .get(order_id)
            .await
            .map_err(Self::comm)?
            .ok_or(OrderError::NotFound(order_id))?;
        let pizza = self
            .pizza_client
            .get_pizza(order.pizza_id)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
            .ok_or(OrderError::PizzaNotFound(order.pizza_id))?;
        Ok(pizza.price())
    }
}

crate::impl_client_get!(OrderClient, crate::domain::Order, crate::order_actor::OrderError, order);
