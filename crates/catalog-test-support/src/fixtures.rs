//! Product fixtures and canned API payloads.

use catalog_api_models::Product;

/// Build a single product whose fields derive from `id`.
#[must_use]
pub fn product(id: i64) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        description: format!("Description for product {id}"),
        price: 9.99 + f64::from(u32::try_from(id).unwrap_or(0)),
        image_url: (id % 2 == 0).then(|| format!("https://images.example/{id}.png")),
    }
}

/// Build `count` products with ids `1..=count`, in id order.
#[must_use]
pub fn products(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|id| product(i64::try_from(id).unwrap_or(i64::MAX)))
        .collect()
}

/// Build products whose names are the given strings, ids in input order.
#[must_use]
pub fn named_products(names: &[&str]) -> Vec<Product> {
    names
        .iter()
        .zip(1_i64..)
        .map(|(name, id)| Product {
            name: (*name).to_string(),
            ..product(id)
        })
        .collect()
}

/// JSON body the server sends for a listing of `count` products.
#[must_use]
pub fn products_json(count: usize) -> String {
    serde_json::to_string(&products(count)).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_are_sequential_and_stable() {
        let list = products(3);
        assert_eq!(list.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list, products(3));
    }

    #[test]
    fn only_even_products_carry_images() {
        assert!(product(1).image_url.is_none());
        assert!(product(2).image_url.is_some());
    }

    #[test]
    fn named_products_keep_order() {
        let list = named_products(&["apple", "apricot"]);
        assert_eq!(list[0].name, "apple");
        assert_eq!(list[1].id, 2);
    }

    #[test]
    fn products_json_round_trips_count() {
        let body = products_json(4);
        let decoded: Vec<Product> = serde_json::from_str(&body).unwrap_or_default();
        assert_eq!(decoded.len(), 4);
    }
}
