use std::collections::HashSet;

/// Brand owners kept by the brand filter.
///
/// Matched exactly and case-sensitively. Several owners appear under more
/// than one spelling ("KROGER", "The Kroger Co.", ...) because the source
/// data spells them that way; the list is kept as-is rather than normalized.
pub const BRAND_OWNERS: &[&str] = &[
    "The Kroger Co.",
    "HY-VEE",
    "HY-VEE FISH MARKET",
    "KROGER",
    "PUBLIX",
    "TRADER JOE'S",
    "AHOLD",
    "Whole Foods Market, Inc.",
    "Wal-Mart Stores, Inc.",
    "WHOLE FOODS MARKET",
    "TRADER JACQUES",
    "WHOLE FOODS MARKETS",
    "TRADER GIOTTO'S",
    "TRADER MING'S",
    "TRADER JOSE'S",
    "Ahold Usa, Inc.",
    "Giant Eagle, Inc.",
    "Hy-Vee, Inc.",
    "WAL-MART",
    "GIANT EAGLE MARKET DISTRICT",
    "Publix Super Markets, Inc.",
    "DOLLAR GENERAL CORPORATION",
    "PUBLIX BAKERY",
    "Aldi Inc.",
    "Ahold USA, Inc.",
    "Family Dollar Stores Inc.",
    "Costco Companies Inc.",
    "Dollar Tree Stores, Inc.",
    "Walgreens Co.",
    "CVS Pharmacy, Inc.",
    "Piggly Wiggly Company",
    "ALDI",
    "365 WHOLE FOODS MARKET",
    "Wal-Mart United States",
    "The Kroger Company",
    "365 by Whole Foods Market Services",
    "WHOLE FOODS MARKET - PGC",
    "Piggly Wiggly North Carolina, LLC",
    "Kroger Corporate Brands",
    "WALMART",
    "Albertsons Companies",
];

/// Immutable set of accepted brand-owner names
#[derive(Debug, Clone)]
pub struct BrandAllowlist {
    owners: HashSet<String>,
}

impl BrandAllowlist {
    pub fn new<I, S>(owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BrandAllowlist {
            owners: owners.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in [`BRAND_OWNERS`] list
    pub fn standard() -> Self {
        Self::new(BRAND_OWNERS.iter().copied())
    }

    /// Whether `brand_owner`, with surrounding whitespace trimmed, is listed
    pub fn contains(&self, brand_owner: &str) -> bool {
        self.owners.contains(brand_owner.trim())
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

impl Default for BrandAllowlist {
    fn default() -> Self {
        Self::standard()
    }
}
