// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search, cascading filters, and autocomplete for a catalog of Japanese swords.
//!
//! Everything here is a pure function over an in-memory record list: no
//! network, no persistence, no UI. [`Catalog`] bundles a record set with its
//! derived facet index and memoizes facet counts.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │   load/      │───▶│  meito.rs    │───▶│   catalog.rs     │
//! │ (manifest,   │    │ (enrichment) │    │ (records, index, │
//! │  rayon read) │    └──────────────┘    │  count memo)     │
//! └──────────────┘                        └────────┬─────────┘
//!                                                  │
//!         ┌────────────────────────┬───────────────┼─────────────────┐
//!         ▼                        ▼               ▼                 ▼
//! ┌──────────────┐    ┌──────────────────┐  ┌─────────────┐  ┌─────────────┐
//! │  search/     │    │  filter/         │  │  index/     │  │ suggest.rs  │
//! │ (parser,     │───▶│ (predicates,     │  │ (facet      │─▶│ (scoring/,  │
//! │  matcher)    │    │  cascade,        │  │  tallies)   │  │  cursor)    │
//! └──────────────┘    │  pipeline)       │  └─────────────┘  └─────────────┘
//!                     └────────┬─────────┘
//!                              │ per-record predicates
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌────────────┐   ┌──────────┐
//!        │ tier.rs  │   │ period.rs  │   │ media.rs │
//!        └──────────┘   └────────────┘   └──────────┘
//! ```
//!
//! # Modules
//!
//! | Module       | Responsibility                                         |
//! |--------------|--------------------------------------------------------|
//! | `types`      | records, fields, facets, selections, tags, groups      |
//! | `search`     | search-input parsing, validation, boundary matching    |
//! | `period`     | year and keyword resolution to eras                    |
//! | `tier`       | authentication tiers and the tier filter               |
//! | `meito`      | famous-sword names                                     |
//! | `media`      | attachment lists and thumbnails                        |
//! | `index`      | facet index for autocomplete                           |
//! | `scoring`    | relevance scores and ranking                           |
//! | `suggest`    | grouped suggestions and keyboard cursor                |
//! | `filter`     | result pipeline and cascading counts                   |
//! | `permalink`  | filter state as a query string                         |
//! | `load`       | catalog directories on disk                            |
//! | `contracts`  | debug-build invariant checks                           |
//!
//! # Usage
//!
//! ```ignore
//! use meikan::{Catalog, FacetSelection, Facet, SearchTag};
//!
//! let catalog = meikan::load_catalog(Path::new("data/catalog"))?;
//! let tags = vec![catalog.parse_tag("\"Juyo 12\"")?];
//! let selection = FacetSelection::default().with(Facet::School, "Soshu");
//!
//! let visible = catalog.filter(&tags, &selection, &[]);
//! let counts = catalog.facet_counts(&selection, &tags);
//! let suggestions = catalog.suggest("masa");
//! ```

pub mod catalog;
pub mod contracts;
pub mod error;
pub mod filter;
pub mod index;
pub mod load;
pub mod media;
pub mod meito;
pub mod period;
pub mod permalink;
pub mod scoring;
pub mod search;
pub mod suggest;
pub mod testing;
pub mod tier;
pub mod types;

// Re-exports for public API
pub use catalog::{dataset_fingerprint, Catalog};
pub use error::{MeikanError, Result};
pub use filter::{
    compute_facet_counts, filter_records, get_authentication_counts, get_available_filter_options,
    get_media_counts, get_option_counts, get_period_counts, CountMap, FacetCounts, FilterOptions,
};
pub use index::{build_autocomplete_index, Category, FacetEntry, FacetIndex};
pub use load::{load_catalog, load_catalog_with_progress, CatalogManifest, EngineConfig};
pub use media::{has_media, parse_media_attachments, priority_thumbnail, MediaItem};
pub use meito::{enrich_with_meito, extract_meito, is_meito};
pub use period::{get_sword_periods, matches_period_filter, Era};
pub use permalink::{filters_to_url_params, has_active_filters, parse_url_filters, UrlFilters};
pub use search::{
    highlight_match, matches_search_terms, parse_search_input, validate_search_input,
    HighlightRange, SearchInputError, TermSet,
};
pub use suggest::{
    count_total_suggestions, generate_suggestions, Suggestion, SuggestionCursor, SuggestionGroup,
};
pub use tier::{authentication_levels, matches_authentication, AuthTier};
pub use types::{
    Facet, FacetSelection, Field, FilterGroup, LengthRange, MediaFilter, SearchTag, SwordRecord,
};
