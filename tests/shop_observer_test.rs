use pattern_catalog::{Customer, OnlineShop, RecordingConsole, Shop, ShopCustomer};
use std::cell::RefCell;
use std::rc::Rc;

struct Inbox {
    name: String,
    received: RefCell<Vec<Vec<String>>>,
}

impl Inbox {
    fn new(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            received: RefCell::new(Vec::new()),
        })
    }

    fn received(&self) -> Vec<Vec<String>> {
        self.received.borrow().clone()
    }
}

impl Customer for Inbox {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, available_products: &[String]) {
        self.received.borrow_mut().push(available_products.to_vec());
    }
}

fn products(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_alice_and_bob_walkthrough() {
    let mut shop = OnlineShop::new("MyShop");
    let alice = Inbox::new("Alice");
    let bob = Inbox::new("Bob");
    let bob_handle: Rc<dyn Customer> = bob.clone();

    shop.register(alice.clone());
    shop.register(bob_handle.clone());
    shop.add_product("Smartphone");

    assert_eq!(alice.received(), vec![products(&["Smartphone"])]);
    assert_eq!(bob.received(), vec![products(&["Smartphone"])]);

    shop.unregister(&bob_handle);
    shop.add_product("Laptop");

    assert_eq!(
        alice.received(),
        vec![products(&["Smartphone"]), products(&["Smartphone", "Laptop"])]
    );
    assert_eq!(bob.received().len(), 1);
}

#[test]
fn test_unregister_absent_customer_leaves_list_unchanged() {
    let mut shop = OnlineShop::new("MyShop");
    let alice: Rc<dyn Customer> = Inbox::new("Alice");
    let never_registered: Rc<dyn Customer> = Inbox::new("Zed");

    shop.register(alice.clone());
    shop.unregister(&never_registered);
    assert_eq!(shop.customer_count(), 1);

    shop.unregister(&alice);
    shop.unregister(&alice);
    assert_eq!(shop.customer_count(), 0);
}

#[test]
fn test_products_keep_duplicates_in_insertion_order() {
    let mut shop = OnlineShop::new("MyShop");
    let alice = Inbox::new("Alice");
    shop.register(alice.clone());

    shop.add_product("Cable");
    shop.add_product("Cable");

    assert_eq!(shop.available_products(), ["Cable", "Cable"]);
    assert_eq!(alice.received().last(), Some(&products(&["Cable", "Cable"])));
}

#[test]
fn test_notify_customers_resends_current_list() {
    let console = RecordingConsole::new();
    let mut shop = OnlineShop::new("MyShop");
    shop.register(Rc::new(ShopCustomer::new("Alice", console.clone())));
    shop.register(Rc::new(ShopCustomer::new("Bob", console.clone())));

    shop.add_product("Smartphone");
    console.take();
    shop.notify_customers();

    assert_eq!(
        console.lines(),
        vec![
            "Dear Alice, new products available: [Smartphone]",
            "Dear Bob, new products available: [Smartphone]",
        ]
    );
}
