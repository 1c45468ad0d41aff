use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Software,
    Service,
}

/// Which tier of a product the customer is buying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    Base,
    Premium,
}

impl Edition {
    pub fn label(&self) -> &'static str {
        match self {
            Edition::Base => "base",
            Edition::Premium => "premium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub kind: ProductKind,
    pub base_price: f64,
    pub premium_price: f64,
    pub description: &'static str,
}

impl Product {
    pub fn price(&self, edition: Edition) -> f64 {
        match edition {
            Edition::Base => self.base_price,
            Edition::Premium => self.premium_price,
        }
    }
}

/// Products offered by the storefront.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            Product {
                id: 1,
                name: "Development License",
                kind: ProductKind::Software,
                base_price: 0.1,
                premium_price: 0.2,
                description: "Annual software development license",
            },
            Product {
                id: 2,
                name: "Cloud Storage Pro",
                kind: ProductKind::Service,
                base_price: 0.05,
                premium_price: 0.1,
                description: "Secure cloud storage solution",
            },
            Product {
                id: 3,
                name: "Security Suite",
                kind: ProductKind::Software,
                base_price: 0.15,
                premium_price: 0.25,
                description: "Enterprise security solution",
            },
            Product {
                id: 4,
                name: "API Access",
                kind: ProductKind::Service,
                base_price: 0.08,
                premium_price: 0.15,
                description: "10,000 API calls package",
            },
            Product {
                id: 5,
                name: "Database License",
                kind: ProductKind::Software,
                base_price: 0.12,
                premium_price: 0.22,
                description: "Enterprise database solution",
            },
            Product {
                id: 6,
                name: "Tech Support",
                kind: ProductKind::Service,
                base_price: 0.07,
                premium_price: 0.12,
                description: "24/7 technical support package",
            },
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}
