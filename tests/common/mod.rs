//! Common test utilities and fixtures

#![allow(dead_code)]

use community_strategies::IdentifiersProvider;

/// Bases used by every integration test
pub fn test_identifiers() -> IdentifiersProvider {
    IdentifiersProvider::new("https://app.community.test", "https://www.community.test")
}

/// Sample API responses for testing
pub mod api_responses {
    /// Strategy list as returned by the community API
    pub const STRATEGIES: &str = r#"[
        {
            "id": "5b1c7a",
            "slug": "crypto-basket-top-10",
            "author_id": "team",
            "content": {
                "name_translations": { "en": "Top 10 Basket", "fr": "Panier Top 10" },
                "description_translations": { "en": "Market cap weighted" }
            },
            "category": {
                "slug": "coingecko-index",
                "name_translations": { "en": "Index" },
                "type": "index",
                "metadata": { "external_link": { "features": "crypto-basket" } }
            },
            "results": {
                "profitability": { "1m": 4.1, "3m": 12.5, "6m": 20.0 },
                "reference_market_profitability": { "1m": 3.2, "3m": 11.0, "6m": 11.0 }
            },
            "logo_url": "",
            "attributes": { "risk": "high", "exchanges": ["binance"] },
            "visibility": "public",
            "metadata": "",
            "created_at": "2024-01-01T00:00:00Z"
        },
        {
            "id": "9f2e11",
            "slug": "btc-smart-dca",
            "author_id": "alice",
            "content": { "name_translations": { "en": "BTC Smart DCA" } },
            "category": {
                "slug": "dca",
                "name_translations": { "en": "DCA", "fr": "Investissement programmé" },
                "type": "strategy",
                "metadata": {
                    "external_link": { "blog": "what-is-dca", "features": "dca" }
                }
            },
            "results": {
                "profitability": {},
                "reference_market_profitability": {}
            },
            "logo_url": "https://cdn.community.test/logos/btc-dca.png",
            "attributes": { "risk": "reckless" },
            "visibility": "public"
        },
        {
            "id": "c0ffee",
            "slug": "eth-grid",
            "category": null,
            "content": {},
            "attributes": {}
        }
    ]"#;
}
