use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{CategoryId, Entity, ProductId, ValueObject};
use catalog_cqrs::Command;

/// Command: create a product with these fields.
///
/// Every field is required; there is no builder and no `Default`, so a
/// partially filled command cannot exist. The command performs no validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    /// Exact fixed-point price (never a float).
    pub price: Decimal,
    pub stock: u32,
    pub category_id: CategoryId,
}

impl CreateProduct {
    pub fn new(name: impl Into<String>, price: Decimal, stock: u32, category_id: CategoryId) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
            category_id,
        }
    }
}

impl ValueObject for CreateProduct {}

impl Command for CreateProduct {
    type Output = ProductDto;

    fn command_type(&self) -> &'static str {
        "products.create_product"
    }
}

/// Product entity.
///
/// Built by the create handler, then handed to a repository which assigns the
/// identity. `created_at` is fixed at construction and has no setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    price: Decimal,
    stock: u32,
    category_id: CategoryId,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Create a transient (not yet persisted) product.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        stock: u32,
        category_id: CategoryId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
            stock,
            category_id,
            created_at,
        }
    }

    /// Copy the command's fields into a transient product stamped with `created_at`.
    pub fn from_command(command: CreateProduct, created_at: DateTime<Utc>) -> Self {
        let CreateProduct {
            name,
            price,
            stock,
            category_id,
        } = command;
        Self::new(name, price, stock, category_id, created_at)
    }

    /// Attach the identity assigned by persistence.
    ///
    /// Intended for repository adapters only.
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }
}

/// Read shape returned to callers after a product is created.
///
/// A snapshot: every field is populated and there are no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    id: ProductId,
    name: String,
    price: Decimal,
    stock: u32,
}

impl ProductDto {
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }
}

impl ValueObject for ProductDto {}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CreateProduct {
        CreateProduct::new("Widget", Decimal::new(999, 2), 10, CategoryId::new(3))
    }

    #[test]
    fn commands_compare_by_value() {
        assert_eq!(widget(), widget());
        assert_ne!(
            widget(),
            CreateProduct::new("Widget", Decimal::new(999, 2), 11, CategoryId::new(3))
        );
    }

    #[test]
    fn from_command_copies_fields_and_stays_transient() {
        let at = Utc::now();
        let product = Product::from_command(widget(), at);

        assert_eq!(product.name(), "Widget");
        assert_eq!(product.price(), Decimal::new(999, 2));
        assert_eq!(product.stock(), 10);
        assert_eq!(product.category_id(), CategoryId::new(3));
        assert_eq!(product.created_at(), at);
        assert!(product.id().is_none());
        assert!(!product.is_persisted());
    }

    #[test]
    fn with_id_keeps_creation_timestamp() {
        let at = Utc::now();
        let product = Product::from_command(widget(), at).with_id(ProductId::new(42));

        assert_eq!(product.id(), Some(&ProductId::new(42)));
        assert_eq!(product.created_at(), at);
    }

    #[test]
    fn command_type_is_stable() {
        assert_eq!(widget().command_type(), "products.create_product");
    }

    #[test]
    fn dto_serializes_with_all_fields() {
        let dto = ProductDto::new(ProductId::new(42), "Widget", Decimal::new(999, 2), 10);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["id"], 42);
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], "9.99");
        assert_eq!(json["stock"], 10);
    }
}
