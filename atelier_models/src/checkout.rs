use nutype::nutype;
use url::Url;

/// Opaque product tier token as sent by the pricing page.
#[nutype(derive(
    Debug, Clone, PartialEq, Eq, From, Deref, Serialize, Deserialize
))]
pub struct ProductId(String);

/// Price in minor currency units (cents).
#[nutype(derive(
    Debug, Clone, Copy, PartialEq, Eq, From, Deref, Serialize, Deserialize
))]
pub struct UnitAmount(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub product_id: Option<ProductId>,
    /// Origin of the requesting page; `None` falls back to the configured
    /// local development origin.
    pub origin: Option<Url>,
}

/// Immutable product tier table, defined once at startup and shared
/// read-only across requests.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    tiers: Vec<(ProductId, UnitAmount)>,
    default_amount: UnitAmount,
}

impl ProductCatalog {
    /// Resolve a product id to its unit price. Unknown ids resolve to the
    /// default amount instead of failing; the pricing page and this table
    /// are maintained together and a mismatch should not block a sale.
    pub fn unit_amount(&self, product_id: &ProductId) -> UnitAmount {
        self.tiers
            .iter()
            .find(|(id, _)| id == product_id)
            .map(|&(_, amount)| amount)
            .unwrap_or(self.default_amount)
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self {
            tiers: [
                ("prod_SKtGY4NCeUcq50", 49_900),  // Starter Site
                ("prod_SKtJ2tDcekTr2s", 99_900),  // Business Site
                ("prod_SKtKDhawq0GveH", 179_900), // Pro Site
                ("prod_SKtPeWgzmn1OPK", 249_900), // E-Commerce Site
            ]
            .into_iter()
            .map(|(id, amount)| (ProductId::from(id.to_owned()), UnitAmount::from(amount)))
            .collect(),
            default_amount: UnitAmount::from(99_900),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tiers() {
        let catalog = ProductCatalog::default();
        for (id, expected) in [
            ("prod_SKtGY4NCeUcq50", 49_900),
            ("prod_SKtJ2tDcekTr2s", 99_900),
            ("prod_SKtKDhawq0GveH", 179_900),
            ("prod_SKtPeWgzmn1OPK", 249_900),
        ] {
            let amount = catalog.unit_amount(&ProductId::from(id.to_owned()));
            assert_eq!(amount, UnitAmount::from(expected));
        }
    }

    #[test]
    fn unknown_tier_falls_back_to_default() {
        let catalog = ProductCatalog::default();
        let amount = catalog.unit_amount(&ProductId::from("prod_doesnotexist".to_owned()));
        assert_eq!(amount, UnitAmount::from(99_900));
    }
}
