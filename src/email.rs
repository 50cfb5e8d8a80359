use async_trait::async_trait;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::domain::{Order, Pizza};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmailError {
    #[error("Email dispatch failed: {0}")]
    Dispatch(String),
}

/// One outgoing message handed to the delivery collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub subject: String,
    pub body_html: String,
    pub from: String,
    pub to: String,
}

/// Delivery collaborator. Dispatch is a synchronous, best-effort side
/// effect of contact submission; callers decide what a failure means.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: EmailMessage) -> Result<(), EmailError>;
}

/// Development sender that writes the message to the log instead of a
/// mail relay.
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!(
            from = %message.from,
            to = %message.to,
            subject = %message.subject,
            body = %message.body_html,
            "Email dispatched (log only)"
        );
        Ok(())
    }
}

/// The link a customer visits to confirm their order.
pub fn confirmation_link(base_url: &str, order_id: Uuid, code: &str) -> String {
    format!(
        "{}/order/{}/confirm/{}",
        base_url.trim_end_matches('/'),
        order_id,
        code
    )
}

/// Renders the confirmation email for a submitted order: the pizza
/// summary plus the confirmation link.
pub fn confirmation_email(order: &Order, pizza: &Pizza, from: &str, link: &str) -> EmailMessage {
    let name = order.name.as_deref().unwrap_or("customer");
    let phone = order.phone.as_deref().unwrap_or("-");
    let items: String = pizza
        .line_items
        .iter()
        .map(|li| format!("<li>{} x{} ({:.2})</li>", li.name, li.amount, li.line_price()))
        .collect();
    EmailMessage {
        subject: "Confirm order".to_string(),
        body_html: format!(
            "<p>Hello {name},</p>\
             <p>Your {dough} pizza:</p>\
             <ul>{items}</ul>\
             <p>Total: {total:.2}</p>\
             <p>Please confirm your order by visiting \
             <a href=\"{link}\">{link}</a>.</p>\
             <p>We will reach you at {phone} once the order is confirmed.</p>",
            dough = pizza.dough,
            total = pizza.price(),
        ),
        from: from.to_string(),
        to: order.email.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::domain::{Dough, PizzaLineItem};

    fn sample_pizza() -> Pizza {
        Pizza {
            id: Uuid::new_v4(),
            dough: Dough::Thin,
            line_items: vec![PizzaLineItem {
                ingredient_id: Uuid::new_v4(),
                name: "Mozzarella".to_string(),
                unit_cost: 1.5,
                amount: 2,
            }],
        }
    }

    #[test]
    fn link_has_the_expected_shape() {
        let id = Uuid::new_v4();
        let link = confirmation_link("http://shop.local/", id, "deadbeef");
        assert_eq!(link, format!("http://shop.local/order/{id}/confirm/deadbeef"));
    }

    #[test]
    fn email_is_addressed_to_the_order_and_embeds_the_link() {
        let pizza = sample_pizza();
        let order = Order {
            id: Uuid::new_v4(),
            email: Some("alice@example.com".to_string()),
            phone: Some("5551234".to_string()),
            name: Some("Alice".to_string()),
            pizza_id: pizza.id,
            submitted: true,
            confirmed: false,
            confirmed_at: None,
            created_at: Utc::now(),
        };
        let link = confirmation_link("http://shop.local", order.id, "cafe");
        let message = confirmation_email(&order, &pizza, "orders@shop.local", &link);
        assert_eq!(message.to, "alice@example.com");
        assert_eq!(message.from, "orders@shop.local");
        assert!(message.body_html.contains(&link));
        assert!(message.body_html.contains("Alice"));
        assert!(message.body_html.contains("Mozzarella x2"));
        assert!(message.body_html.contains("Total: 3.00"));
    }
}
