use crate::config::scenario::{ObserverScenario, ShopStep};
use crate::core::shop::{OnlineShop, ShopCustomer};
use crate::core::{Console, Customer, Shop};
use std::collections::HashMap;
use std::rc::Rc;

/// Replays the scenario's steps against a fresh shop and returns it.
///
/// Customers are created once per declared id and keep their handle for the
/// whole run, so an id always refers to the same customer even when display
/// names repeat. Steps naming an undeclared id are skipped;
/// `ScenarioConfig::validate` rejects them up front.
pub fn run<C>(console: &C, scenario: &ObserverScenario) -> OnlineShop
where
    C: Console + Clone + 'static,
{
    tracing::info!(shop = %scenario.shop_name, "Running observer demo");

    let mut shop = OnlineShop::new(scenario.shop_name.clone());

    let customers: HashMap<&str, Rc<dyn Customer>> = scenario
        .customers
        .iter()
        .map(|entry| {
            let customer: Rc<dyn Customer> =
                Rc::new(ShopCustomer::new(entry.display_name(), console.clone()));
            (entry.id(), customer)
        })
        .collect();

    for step in &scenario.steps {
        match step {
            ShopStep::Register { customer } => match customers.get(customer.as_str()) {
                Some(handle) => shop.register(Rc::clone(handle)),
                None => tracing::warn!(customer = %customer, "register skipped, unknown customer"),
            },
            ShopStep::Unregister { customer } => match customers.get(customer.as_str()) {
                Some(handle) => shop.unregister(handle),
                None => tracing::warn!(customer = %customer, "unregister skipped, unknown customer"),
            },
            ShopStep::AddProduct { product } => shop.add_product(product.clone()),
        }
    }

    shop
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::RecordingConsole;
    use crate::config::scenario::CustomerEntry;

    #[test]
    fn test_default_run() {
        let console = RecordingConsole::new();
        let shop = run(&console, &ObserverScenario::default());

        assert_eq!(
            console.lines(),
            vec![
                "Dear Alice, new products available: [Smartphone]",
                "Dear Bob, new products available: [Smartphone]",
                "Dear Alice, new products available: [Smartphone, Laptop]",
            ]
        );
        assert_eq!(shop.shop_name(), "MyShop");
        assert_eq!(shop.customer_count(), 1);
    }

    #[test]
    fn test_same_name_customers_stay_distinct() {
        let console = RecordingConsole::new();
        let sam = |id: &str| CustomerEntry::WithId {
            id: id.to_string(),
            name: "Sam".to_string(),
        };
        let scenario = ObserverScenario {
            shop_name: "MyShop".to_string(),
            customers: vec![sam("sam-1"), sam("sam-2")],
            steps: vec![
                ShopStep::Register {
                    customer: "sam-1".to_string(),
                },
                ShopStep::Register {
                    customer: "sam-2".to_string(),
                },
                ShopStep::Unregister {
                    customer: "sam-2".to_string(),
                },
                ShopStep::AddProduct {
                    product: "Camera".to_string(),
                },
            ],
        };

        let shop = run(&console, &scenario);

        assert_eq!(shop.customer_count(), 1);
        assert_eq!(
            console.lines(),
            vec!["Dear Sam, new products available: [Camera]"]
        );
    }

    #[test]
    fn test_undeclared_customer_is_skipped() {
        let console = RecordingConsole::new();
        let scenario = ObserverScenario {
            shop_name: "MyShop".to_string(),
            customers: vec![],
            steps: vec![
                ShopStep::Register {
                    customer: "Ghost".to_string(),
                },
                ShopStep::AddProduct {
                    product: "Lamp".to_string(),
                },
            ],
        };

        let shop = run(&console, &scenario);

        assert_eq!(shop.customer_count(), 0);
        assert_eq!(shop.available_products(), ["Lamp"]);
        assert!(console.is_empty());
    }
}
