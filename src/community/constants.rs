//! Static lookup tables keyed by category slug
//!
//! Unknown slugs are simply absent from these tables; callers fall back to
//! the generic defaults below.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Locale used when the caller has no preference
pub const DEFAULT_LOCALE: &str = "en";

/// Logo filename used for categories without a dedicated logo
pub const DEFAULT_LOGO_NAME: &str = "default_strategy.png";

/// Best bucket label reported when no reference profitability is known
pub const DEFAULT_TIME_UNIT: &str = "1m";

/// Category display names that take precedence over payload translations
pub static CATEGORY_NAME_TRANSLATIONS_BY_SLUG: Lazy<
    HashMap<&'static str, HashMap<&'static str, &'static str>>,
> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("coingecko-index", HashMap::from([("en", "Crypto Basket")]));
    m
});

/// Landing-site paths replacing the strategy page for some categories
pub static FORCED_URL_PATH_BY_SLUG: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| {
        let mut m = HashMap::new();
        m.insert("coingecko-index", "features/crypto-basket");
        m
    });

pub static DEFAULT_LOGO_NAME_BY_SLUG: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| {
        let mut m = HashMap::new();
        m.insert("coingecko-index", "crypto-basket.png");
        m
    });

/// Categories whose strategies are refreshed automatically by the platform
pub static AUTO_UPDATED_CATEGORIES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["coingecko-index"]));

/// Categories only available through the paid extension
pub static EXTENSION_CATEGORIES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["coingecko-index"]));
