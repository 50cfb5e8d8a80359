use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::actor_framework::ResourceActor;
use crate::clients::{CatalogClient, OrderClient, PizzaClient};
use crate::config::Config;
use crate::confirm::CodeGenerator;
use crate::domain::{Ingredient, IngredientGroup, Order, Pizza};
use crate::email::{EmailSender, LogEmailSender};

/// The main application system that wires up all store actors and
/// clients.
///
/// Responsible for starting the actors, injecting the confirmation
/// secret and email collaborator, and handling shutdown.
pub struct PizzeriaSystem {
    pub catalog_client: CatalogClient,
    pub pizza_client: PizzaClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PizzeriaSystem {
    /// Production wiring: emails go to the log-only sender.
    pub fn new(config: &Config) -> Self {
        Self::with_email_sender(config, Arc::new(LogEmailSender))
    }

    pub fn with_email_sender(config: &Config, email: Arc<dyn EmailSender>) -> Self {
        // 1. Catalog stores
        let (group_actor, group_resource) = ResourceActor::<IngredientGroup>::new(32, Uuid::new_v4);
        let (ingredient_actor, ingredient_resource) =
            ResourceActor::<Ingredient>::new(32, Uuid::new_v4);
        let catalog_client = CatalogClient::new(group_resource, ingredient_resource);

        // 2. Pizza store, composing against the catalog
        let (pizza_actor, pizza_resource) = ResourceActor::<Pizza>::new(32, Uuid::new_v4);
        let pizza_client = PizzaClient::new(pizza_resource, catalog_client.clone());

        // 3. Order store with the injected secret and email collaborator
        let (order_actor, order_resource) = ResourceActor::<Order>::new(32, Uuid::new_v4);
        let order_client = OrderClient::new(
            order_resource,
            pizza_client.clone(),
            CodeGenerator::new(&config.confirm_secret),
            email,
            config.base_url.clone(),
            config.email_from.clone(),
        );

        let handles = vec![
            tokio::spawn(group_actor.run()),
            tokio::spawn(ingredient_actor.run()),
            tokio::spawn(pizza_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        info!("Pizzeria system started");

        Self {
            catalog_client,
            pizza_client,
            order_client,
            handles,
        }
    }

    /// Drops all clients, which closes the store channels; the actors
    /// drain and exit.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.pizza_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
