use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::CatalogClient;
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Dough, Pizza, PizzaCreate, PizzaLineItem};
use crate::pizza_actor::PizzaError;

/// Client for the pizza store. Composition resolves ingredient prices
/// through the catalog before anything is persisted.
#[derive(Clone)]
pub struct PizzaClient {
    inner: ResourceClient<Pizza>,
    catalog: CatalogClient,
}

impl PizzaClient {
    pub fn new(inner: ResourceClient<Pizza>, catalog: CatalogClient) -> Self {
        Self { inner, catalog }
    }

    /// Builds and persists a pizza from a dough choice and
    /// (ingredient id, amount) selections.
    ///
    /// Zero amounts are skipped and create no line item. The pizza and
    /// its line items are written as one store message, so any failure
    /// before that point leaves nothing behind.
    #[instrument(skip(self, selections))]
    pub async fn compose(
        &self,
        dough: &str,
        selections: &[(Uuid, u32)],
    ) -> Result<Pizza, PizzaError> {
        let dough: Dough = dough.parse().map_err(PizzaError::InvalidDough)?;

        let mut line_items = Vec::new();
        for &(ingredient_id, amount) in selections {
            if amount == 0 {
                continue;
            }
            let ingredient = self
                .catalog
                .get_ingredient(ingredient_id)
                .await
                .map_err(|e| PizzaError::ActorCommunicationError(e.to_string()))?
                .ok_or(PizzaError::UnknownIngredient(ingredient_id))?;
            // Snapshot name and cost so catalog edits never reprice this
            // pizza.
            line_items.push(PizzaLineItem {
                ingredient_id,
                name: ingredient.name,
                unit_cost: ingredient.unit_cost,
                amount,
            });
        }

        let id = self
            .inner
            .create(PizzaCreate { dough, line_items })
            .await
            .map_err(|e| match e {
                FrameworkError::Rejected(msg) => PizzaError::ValidationError(msg),
                other => PizzaError::ActorCommunicationError(other.to_string()),
            })?;
        info!(pizza_id = %id, "Pizza composed");

        self.inner
            .get(id)
            .await
            .map_err(|e| PizzaError::ActorCommunicationError(e.to_string()))?
            .ok_or(PizzaError::NotFound(id))
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, PizzaError> {
        debug!("Sending request");
        self.inner
            .list()
            .await
            .map_err(|e| PizzaError::ActorCommunicationError(e.to_string()))
    }
}

crate::impl_client_get!(PizzaClient, crate::domain::Pizza, crate::pizza_actor::PizzaError, pizza);
