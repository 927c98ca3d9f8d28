//! Generated output derived from the locale table.
//!
//! - **Routes**: every public path per locale, as JSON
//! - **Sitemap**: `sitemap.xml` with `hreflang` alternates
//!
//! Both start from the same content grouping, so a page is listed in exactly
//! the locales that publish it.

pub mod routes;
pub mod sitemap;
