mod domain;
mod clients;

mod app_system;
mod config;
mod confirm;
mod email;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod catalog_actor;
mod order_actor;
mod pizza_actor;

use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, PizzeriaSystem};
use crate::config::Config;
use crate::confirm::CodeGenerator;
use crate::domain::{ConfirmOutcome, ContactInfo, GroupCreate, IngredientCreate};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting pizzeria storefront engine");

    let config = Config::load();
    let codes = CodeGenerator::new(&config.confirm_secret);

    // Create the entire system (starts all store actors)
    let system = PizzeriaSystem::new(&config);

    // Seed a small catalog
    let span = tracing::info_span!("catalog_seeding");
    let (cheese, olives) = async {
        info!("Seeding catalog");
        let cheeses = system
            .catalog_client
            .create_group(GroupCreate { name: "Cheeses".to_string() })
            .await
            .map_err(|e| e.to_string())?;
        let vegetables = system
            .catalog_client
            .create_group(GroupCreate { name: "Vegetables".to_string() })
            .await
            .map_err(|e| e.to_string())?;
        let cheese = system
            .catalog_client
            .create_ingredient(IngredientCreate {
                name: "Mozzarella".to_string(),
                group_id: cheeses,
                unit_cost: 1.5,
            })
            .await
            .map_err(|e| e.to_string())?;
        let olives = system
            .catalog_client
            .create_ingredient(IngredientCreate {
                name: "Olives".to_string(),
                group_id: vegetables,
                unit_cost: 0.5,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((cheese, olives))
    }
    .instrument(span)
    .await?;

    let menu = system.catalog_client.menu_json().await.map_err(|e| e.to_string())?;
    info!(menu = %menu, "Catalog ready");

    // Walk one order through its whole lifecycle
    let span = tracing::info_span!("order_processing");
    let result = async {
        let pizza = system
            .pizza_client
            .compose("thin", &[(cheese, 2), (olives, 3)])
            .await
            .map_err(|e| e.to_string())?;
        info!(pizza_id = %pizza.id, dough = %pizza.dough, price = pizza.price(), "Pizza composed");

        let order = system
            .order_client
            .create_order(pizza.id)
            .await
            .map_err(|e| e.to_string())?;
        info!(order_id = %order.id, "Draft order created");

        let order = system
            .order_client
            .submit_contact(
                &order.id.to_string(),
                ContactInfo {
                    email: "alice@example.com".to_string(),
                    phone: "5551234".to_string(),
                    name: "Alice".to_string(),
                },
            )
            .await
            .map_err(|e| e.to_string())?;

        // Simulate the customer clicking the emailed link.
        let code = codes.code_for(&order);
        let outcome = system
            .order_client
            .confirm(&order.id.to_string(), &code)
            .await
            .map_err(|e| e.to_string())?;
        match &outcome {
            ConfirmOutcome::Confirmed(confirmed) => {
                info!(order_id = %confirmed.id, confirmed_at = ?confirmed.confirmed_at, "Order confirmed")
            }
            other => info!(?other, "Confirmation link visited"),
        }

        let total = system
            .order_client
            .order_total(order.id)
            .await
            .map_err(|e| e.to_string())?;
        info!(total, "Order total");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = result {
        error!(error = %e, "Order processing failed");
    }

    let submitted = system.order_client.list_submitted().await.map_err(|e| e.to_string())?;
    info!(count = submitted.len(), "Submitted orders");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
