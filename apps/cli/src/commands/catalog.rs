//! # Catalog Commands

use serde::Serialize;
use shopcart_core::{Catalog, Product};
use tracing::debug;

/// The products on offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub products: Vec<Product>,
}

/// Lists the catalog in display order.
pub fn list_products(catalog: &Catalog) -> CatalogResponse {
    debug!(count = catalog.len(), "list_products command");
    CatalogResponse {
        products: catalog.products().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_products_keeps_order() {
        let response = list_products(&Catalog::default());
        let names: Vec<&str> = response.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Auriculares inalámbricos",
                "Teclado mecánico",
                "Mouse gamer",
                "Monitor 24 pulgadas"
            ]
        );
    }
}
