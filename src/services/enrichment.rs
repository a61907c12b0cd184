//! Joins cart rows and order line items with live product and hotel data.
//!
//! Lines whose product or hotel can no longer be found are dropped from the
//! view instead of failing the request; each drop is logged at `warn`.
//! Any other storage failure is propagated.

use std::collections::{hash_map::Entry, HashMap};

use crate::{db_interaction::{FoodRepository, RepositoryError}, domain::UserCartProduct, models::{CartEntry, Hotel, OrderLineItem}};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrichmentLine{
    pub product_id: i32,
    pub quantity: i32,
    pub price_at_purchase: Option<f64>
}

impl From<&CartEntry> for EnrichmentLine {
    fn from(entry: &CartEntry) -> Self {
        Self{
            product_id: entry.product_id,
            quantity: entry.quantity,
            price_at_purchase: None
        }
    }
}

impl From<&OrderLineItem> for EnrichmentLine {
    fn from(item: &OrderLineItem) -> Self {
        Self{
            product_id: item.product_id,
            quantity: item.quantity,
            price_at_purchase: Some(item.price_at_purchase)
        }
    }
}

#[tracing::instrument(
    "Enriching lines with product and hotel details",
    skip_all,
    fields(lines = lines.len())
)]
pub fn enrich_lines<R>(
    repository: &R,
    lines: &[EnrichmentLine]
) -> Result<Vec<UserCartProduct>, RepositoryError>
where
    R: FoodRepository + ?Sized
{
    if lines.is_empty() {
        return Ok(Vec::new())
    }

    let mut product_ids: Vec<i32> = lines.iter().map(|line| line.product_id).collect();
    product_ids.sort_unstable();
    product_ids.dedup();

    let products: HashMap<i32, _> = repository.get_product_details(&product_ids)?
        .into_iter()
        .map(|product| (product.id, product))
        .collect();

    let mut hotels: HashMap<i32, Result<Hotel, RepositoryError>> = HashMap::new();
    let mut enriched = Vec::with_capacity(lines.len());

    for line in lines {
        let Some(product) = products.get(&line.product_id) else {
            tracing::warn!(
                product_id = line.product_id,
                "Dropping line whose product no longer exists"
            );
            continue;
        };

        let hotel = match hotels.entry(product.hotel_id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let hotel = match repository.get_hotel_by_id(product.hotel_id) {
                    Err(e) if !e.is_not_found() => return Err(e),
                    lookup => lookup
                };
                entry.insert(hotel)
            }
        };

        let hotel = match hotel {
            Ok(hotel) => hotel,
            Err(e) => {
                tracing::warn!(
                    product_id = product.id,
                    hotel_id = product.hotel_id,
                    error = %e,
                    "Dropping product whose hotel could not be resolved"
                );
                continue;
            }
        };

        let mut view = UserCartProduct::new(product, hotel, line.quantity);
        if let Some(price) = line.price_at_purchase {
            view = view.with_price_at_purchase(price);
        }
        enriched.push(view);
    }

    Ok(enriched)
}
