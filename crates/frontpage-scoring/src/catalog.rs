//! Id-indexed lookup over the article and ad catalogs.
//!
//! Catalogs arrive as plain lists from the content service. Scoring looks
//! entries up by id for every slot, so they are indexed once up front.
//! If an id appears twice, the first entry wins.

use std::collections::BTreeMap;

use frontpage_types::{AdCatalogEntry, AdId, ArticleCatalogEntry, ArticleId};

/// Article and ad reference data for one editing session.
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    articles: BTreeMap<ArticleId, ArticleCatalogEntry>,
    ads: BTreeMap<AdId, AdCatalogEntry>,
}

impl ContentCatalog {
    /// Index the given catalog lists.
    pub fn new<A, D>(articles: A, ads: D) -> Self
    where
        A: IntoIterator<Item = ArticleCatalogEntry>,
        D: IntoIterator<Item = AdCatalogEntry>,
    {
        let mut catalog = Self::default();
        for article in articles {
            catalog.articles.entry(article.id).or_insert(article);
        }
        for ad in ads {
            catalog.ads.entry(ad.id).or_insert(ad);
        }
        catalog
    }

    /// Look up an article.
    pub fn article(&self, id: ArticleId) -> Option<&ArticleCatalogEntry> {
        self.articles.get(&id)
    }

    /// Look up an advertisement.
    pub fn ad(&self, id: AdId) -> Option<&AdCatalogEntry> {
        self.ads.get(&id)
    }

    /// Number of indexed articles.
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Number of indexed advertisements.
    pub fn ad_count(&self) -> usize {
        self.ads.len()
    }
}
