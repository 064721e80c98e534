use crate::utils::error::{PatternError, Result};
use crate::utils::validation::{validate_declared_name, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Sample data driving the demos. A section left out of the file falls back
/// to the built-in data; a section that is present is taken as written, with
/// missing lists empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub adapter: AdapterScenario,
    #[serde(default)]
    pub factory: FactoryScenario,
    #[serde(default)]
    pub observer: ObserverScenario,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterScenario {
    /// Paid through the legacy gateway directly.
    #[serde(default)]
    pub legacy_amounts: Vec<f64>,
    /// Paid through the adapter over the new gateway.
    #[serde(default)]
    pub adapter_amounts: Vec<f64>,
}

impl Default for AdapterScenario {
    fn default() -> Self {
        Self {
            legacy_amounts: vec![15000.00],
            adapter_amounts: vec![23500.00],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryScenario {
    #[serde(default)]
    pub orders: Vec<FactoryOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryOrder {
    /// Absent means "no type given".
    #[serde(rename = "type", default)]
    pub type_tag: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl FactoryOrder {
    pub fn new(type_tag: &str, fields: &[&str]) -> Self {
        Self {
            type_tag: Some(type_tag.to_string()),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl Default for FactoryScenario {
    fn default() -> Self {
        Self {
            orders: vec![
                FactoryOrder::new("TABLET", &["Paracetamol", "500"]),
                FactoryOrder::new("SYRUP", &["CoughSyrup", "Cherry"]),
                FactoryOrder::new("INJECTION", &["Insulin", "10.0"]),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverScenario {
    #[serde(default = "default_shop_name")]
    pub shop_name: String,
    /// One customer is created per entry; steps refer to them by id.
    #[serde(default)]
    pub customers: Vec<CustomerEntry>,
    #[serde(default)]
    pub steps: Vec<ShopStep>,
}

fn default_shop_name() -> String {
    "MyShop".to_string()
}

/// `"Alice"` declares a customer whose id is its name; `{ id = "sam-2", name = "Sam" }`
/// lets two customers share a display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerEntry {
    Named(String),
    WithId { id: String, name: String },
}

impl CustomerEntry {
    pub fn id(&self) -> &str {
        match self {
            CustomerEntry::Named(name) => name,
            CustomerEntry::WithId { id, .. } => id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            CustomerEntry::Named(name) | CustomerEntry::WithId { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ShopStep {
    Register { customer: String },
    Unregister { customer: String },
    AddProduct { product: String },
}

impl Default for ObserverScenario {
    fn default() -> Self {
        Self {
            shop_name: default_shop_name(),
            customers: vec![
                CustomerEntry::Named("Alice".to_string()),
                CustomerEntry::Named("Bob".to_string()),
            ],
            steps: vec![
                ShopStep::Register {
                    customer: "Alice".to_string(),
                },
                ShopStep::Register {
                    customer: "Bob".to_string(),
                },
                ShopStep::AddProduct {
                    product: "Smartphone".to_string(),
                },
                ShopStep::Unregister {
                    customer: "Bob".to_string(),
                },
                ShopStep::AddProduct {
                    product: "Laptop".to_string(),
                },
            ],
        }
    }
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入場景
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析場景
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SHOP_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PatternError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let observer = &self.observer;
        validate_non_empty_string("observer.shop_name", &observer.shop_name)?;

        let mut seen = HashSet::new();
        for customer in &observer.customers {
            validate_non_empty_string("observer.customers.id", customer.id())?;
            validate_non_empty_string("observer.customers.name", customer.display_name())?;
            if !seen.insert(customer.id()) {
                return Err(PatternError::InvalidConfigValueError {
                    field: "observer.customers.id".to_string(),
                    value: customer.id().to_string(),
                    reason: "Customer id declared more than once".to_string(),
                });
            }
        }

        let known_ids: Vec<&str> = observer.customers.iter().map(CustomerEntry::id).collect();
        for step in &observer.steps {
            match step {
                ShopStep::Register { customer } | ShopStep::Unregister { customer } => {
                    validate_declared_name("observer.steps.customer", customer, &known_ids)?;
                }
                ShopStep::AddProduct { .. } => {}
            }
        }

        Ok(())
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
