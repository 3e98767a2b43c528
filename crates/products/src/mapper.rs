use catalog_core::Entity;
use catalog_cqrs::{Mapper, MappingError};

use crate::product::{Product, ProductDto};

/// Projects a persisted `Product` into its `ProductDto` read shape.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductDtoMapper;

impl Mapper<Product, ProductDto> for ProductDtoMapper {
    fn map(&self, product: &Product) -> Result<ProductDto, MappingError> {
        let id = *product.id().ok_or(MappingError::MissingField("id"))?;

        Ok(ProductDto::new(
            id,
            product.name(),
            product.price(),
            product.stock(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{CategoryId, ProductId};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn transient() -> Product {
        Product::new("Gadget", Decimal::new(12_50, 2), 4, CategoryId::new(1), Utc::now())
    }

    #[test]
    fn maps_persisted_product() {
        let product = transient().with_id(ProductId::new(7));

        let dto = ProductDtoMapper.map(&product).unwrap();
        assert_eq!(
            dto,
            ProductDto::new(ProductId::new(7), "Gadget", Decimal::new(12_50, 2), 4)
        );
    }

    #[test]
    fn rejects_product_without_identity() {
        let err = ProductDtoMapper.map(&transient()).unwrap_err();
        assert_eq!(err, MappingError::MissingField("id"));
    }
}
