//! The static, read-only product catalog.
//!
//! The demo ships six compiled-in products. There is no mutation and no
//! network fetch; `browse` filters and sorts a copy for listing responses.

use minishop_core::{Price, Product, ProductId};
use serde::{Deserialize, Serialize};

/// Catalog listing sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Catalog insertion order.
    #[default]
    Default,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

/// A static customer testimonial shown on the storefront landing page.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: u32,
    /// Reviewer display name.
    pub name: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub comment: String,
    /// Name of the reviewed product.
    pub product: String,
}

/// The read-only catalog source.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// The demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        let products = vec![
            demo_product(
                "p1",
                "Wireless Mechanical Keyboard",
                12999,
                "RGB backlight, tactile brown switches. Ultra-low latency.",
                "https://placehold.co/300x200/4F46E5/FFFFFF?text=Keyboard",
            ),
            demo_product(
                "p2",
                "Noise-Cancelling Headphones",
                24900,
                "Industry-leading noise cancellation, 30-hour battery life.",
                "https://placehold.co/300x200/10B981/FFFFFF?text=Headphones",
            ),
            demo_product(
                "p3",
                "4K Ultra HD Monitor",
                49950,
                "27-inch display with HDR support and 144Hz refresh rate.",
                "https://placehold.co/300x200/F97316/FFFFFF?text=Monitor",
            ),
            demo_product(
                "p4",
                "Ergonomic Desk Chair",
                31575,
                "Full lumbar support, breathable mesh, and adjustable height.",
                "https://placehold.co/300x200/EF4444/FFFFFF?text=Chair",
            ),
            demo_product(
                "p5",
                "Smart Home Speaker",
                8999,
                "Voice assistant built-in with premium 360-degree sound quality.",
                "https://placehold.co/300x200/06B6D4/FFFFFF?text=Speaker",
            ),
            demo_product(
                "p6",
                "Portable SSD 1TB",
                15999,
                "Blazing fast external storage for creative professionals.",
                "https://placehold.co/300x200/6366F1/FFFFFF?text=SSD",
            ),
        ];

        let reviews = vec![
            demo_review(
                1,
                "Alex T.",
                5,
                "The keyboard is fantastic! The tactile switches feel great and the low latency is noticeable.",
                "Wireless Mechanical Keyboard",
            ),
            demo_review(
                2,
                "Sarah L.",
                4,
                "Headphones are excellent for travel, amazing noise cancellation.",
                "Noise-Cancelling Headphones",
            ),
            demo_review(
                3,
                "Mike R.",
                5,
                "The monitor resolution is stunning. Perfect for gaming and work.",
                "4K Ultra HD Monitor",
            ),
        ];

        Self { products, reviews }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// The static customer testimonials.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Filter by a case-insensitive search query and sort for listing.
    ///
    /// The query matches substrings of the product name or description.
    #[must_use]
    pub fn browse(&self, query: Option<&str>, sort: SortOption) -> Vec<Product> {
        let needle = query.map(str::to_lowercase).unwrap_or_default();

        let mut results: Vec<Product> = self
            .products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        match sort {
            SortOption::Default => {}
            SortOption::PriceAsc => results.sort_by_key(|p| p.price),
            SortOption::PriceDesc => {
                results.sort_by_key(|p| std::cmp::Reverse(p.price));
            }
        }

        results
    }
}

fn demo_product(id: &str, name: &str, cents: i64, description: &str, image: &str) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_owned(),
        price: Price::from_cents(cents),
        description: description.to_owned(),
        image: image.to_owned(),
    }
}

fn demo_review(id: u32, name: &str, rating: u8, comment: &str, product: &str) -> Review {
    Review {
        id,
        name: name.to_owned(),
        rating,
        comment: comment.to_owned(),
        product: product.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_has_six_products() {
        assert_eq!(Catalog::demo().all().len(), 6);
    }

    #[test]
    fn test_get_known_product() {
        let catalog = Catalog::demo();
        let product = catalog.get(&ProductId::from("p1")).unwrap();
        assert_eq!(product.name, "Wireless Mechanical Keyboard");
        assert_eq!(product.price, Price::from_cents(12999));
    }

    #[test]
    fn test_get_unknown_product() {
        assert!(Catalog::demo().get(&ProductId::from("p99")).is_none());
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let results = Catalog::demo().browse(Some("KEYBOARD"), SortOption::Default);
        assert_eq!(results.len(), 1);
        assert_eq!(results.first().unwrap().id, ProductId::from("p1"));
    }

    #[test]
    fn test_search_matches_description() {
        let results = Catalog::demo().browse(Some("battery"), SortOption::Default);
        assert_eq!(results.len(), 1);
        assert_eq!(results.first().unwrap().id, ProductId::from("p2"));
    }

    #[test]
    fn test_search_no_match() {
        assert!(
            Catalog::demo()
                .browse(Some("flux capacitor"), SortOption::Default)
                .is_empty()
        );
    }

    #[test]
    fn test_sort_price_ascending() {
        let results = Catalog::demo().browse(None, SortOption::PriceAsc);
        let prices: Vec<Price> = results.iter().map(|p| p.price).collect();
        let mut sorted = prices.clone();
        sorted.sort();
        assert_eq!(prices, sorted);
        assert_eq!(results.first().unwrap().id, ProductId::from("p5"));
    }

    #[test]
    fn test_reviews_reference_catalog_products() {
        let catalog = Catalog::demo();
        let reviews = catalog.reviews();
        assert_eq!(reviews.len(), 3);

        for review in reviews {
            assert!((1..=5).contains(&review.rating));
            assert!(catalog.all().iter().any(|p| p.name == review.product));
        }
    }

    #[test]
    fn test_sort_price_descending() {
        let results = Catalog::demo().browse(None, SortOption::PriceDesc);
        assert_eq!(results.first().unwrap().id, ProductId::from("p3"));
        assert_eq!(results.last().unwrap().id, ProductId::from("p5"));
    }
}
