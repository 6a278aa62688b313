use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};
use stockroom_products::Product;

/// How `Inventory::add` treats an id that is already in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Append regardless. Later duplicates are unreachable by id.
    #[default]
    AllowDuplicates,
    /// Refuse the add with `DomainError::Conflict`.
    RejectDuplicates,
}

/// Ordered in-memory product store.
///
/// Insertion order is preserved and is the listing order. Every id-based
/// operation works on the first product carrying that id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
    id_policy: IdPolicy,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_policy(id_policy: IdPolicy) -> Self {
        Self {
            products: Vec::new(),
            id_policy,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Append a product at the end of the store.
    ///
    /// Always succeeds under `IdPolicy::AllowDuplicates`.
    pub fn add(&mut self, product: Product) -> DomainResult<()> {
        let id = *product.id();
        if self.id_policy == IdPolicy::RejectDuplicates && self.find_by_id(id).is_some() {
            tracing::warn!(product_id = %id, "rejected duplicate product id");
            return Err(DomainError::conflict(format!("product {id} already exists")));
        }

        tracing::debug!(
            product_id = %id,
            perishable = product.is_perishable(),
            position = self.products.len(),
            "product added"
        );
        self.products.push(product);
        Ok(())
    }

    /// First product with this id, if any.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| *p.id() == id)
    }

    fn find_by_id_mut(&mut self, id: ProductId) -> DomainResult<&mut Product> {
        match self.products.iter_mut().find(|p| *p.id() == id) {
            Some(product) => Ok(product),
            None => {
                tracing::warn!(product_id = %id, "product not found");
                Err(DomainError::not_found(id))
            }
        }
    }

    /// Overwrite name, price and quantity. The id and variant field are kept.
    pub fn update(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity_in_stock: i64,
    ) -> DomainResult<()> {
        let product = self.find_by_id_mut(id)?;
        product.set_name(name);
        product.set_price(price);
        product.set_quantity_in_stock(quantity_in_stock);

        tracing::debug!(product_id = %id, price, quantity_in_stock, "product updated");
        Ok(())
    }

    /// Apply a signed stock delta; returns the new quantity.
    pub fn adjust_stock(&mut self, id: ProductId, delta: i64) -> DomainResult<i64> {
        let product = self.find_by_id_mut(id)?;
        let quantity = product.adjust_stock(delta);

        tracing::debug!(product_id = %id, delta, quantity, "stock adjusted");
        Ok(quantity)
    }

    /// Descriptions of every product, in store order.
    pub fn list_all(&self) -> Vec<String> {
        self.products.iter().map(Product::describe).collect()
    }
}
