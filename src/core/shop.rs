use crate::core::{Console, Customer, Shop};
use crate::utils::format::format_list;
use std::rc::Rc;

/// Subject holding registered customers and an append-only product list.
///
/// The shop shares, but does not own, its customers: whoever created a
/// customer keeps its handle and uses that same handle to unregister.
pub struct OnlineShop {
    shop_name: String,
    customers: Vec<Rc<dyn Customer>>,
    available_products: Vec<String>,
}

impl OnlineShop {
    pub fn new(shop_name: impl Into<String>) -> Self {
        Self {
            shop_name: shop_name.into(),
            customers: Vec::new(),
            available_products: Vec::new(),
        }
    }

    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    pub fn available_products(&self) -> &[String] {
        &self.available_products
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Commits the product, then notifies every registered customer.
    pub fn add_product(&mut self, product: impl Into<String>) {
        let product = product.into();
        tracing::debug!(shop = %self.shop_name, product = %product, "adding product");
        self.available_products.push(product);
        self.notify_customers();
    }
}

impl Shop for OnlineShop {
    /// No duplicate check: a customer registered twice is notified twice.
    fn register(&mut self, customer: Rc<dyn Customer>) {
        tracing::debug!(shop = %self.shop_name, customer = customer.name(), "register");
        self.customers.push(customer);
    }

    /// Removes the first registration of this exact customer. Unknown customers are ignored.
    fn unregister(&mut self, customer: &Rc<dyn Customer>) {
        let position = self
            .customers
            .iter()
            .position(|registered| std::ptr::addr_eq(Rc::as_ptr(registered), Rc::as_ptr(customer)));

        match position {
            Some(index) => {
                self.customers.remove(index);
                tracing::debug!(shop = %self.shop_name, customer = customer.name(), "unregister");
            }
            None => {
                tracing::debug!(
                    shop = %self.shop_name,
                    customer = customer.name(),
                    "unregister ignored, customer not registered"
                );
            }
        }
    }

    fn notify_customers(&self) {
        for customer in &self.customers {
            customer.update(&self.available_products);
        }
    }
}

/// Customer that writes each notification to a console.
#[derive(Debug, Clone)]
pub struct ShopCustomer<C: Console> {
    customer_name: String,
    console: C,
}

impl<C: Console> ShopCustomer<C> {
    pub fn new(customer_name: impl Into<String>, console: C) -> Self {
        Self {
            customer_name: customer_name.into(),
            console,
        }
    }
}

impl<C: Console> Customer for ShopCustomer<C> {
    fn name(&self) -> &str {
        &self.customer_name
    }

    fn update(&self, available_products: &[String]) {
        self.console.emit(&format!(
            "Dear {}, new products available: {}",
            self.customer_name,
            format_list(available_products)
        ));
    }
}
