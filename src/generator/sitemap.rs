//! Sitemap generation.
//!
//! Every localized page gets a `<url>`, and pages that exist in more than one
//! locale list all their variants as `hreflang` alternates.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:xhtml="http://www.w3.org/1999/xhtml">
//!   <url>
//!     <loc>https://example.com/ar/</loc>
//!     <xhtml:link rel="alternate" hreflang="en-US" href="https://example.com/"/>
//!     <xhtml:link rel="alternate" hreflang="ar-EG" href="https://example.com/ar/"/>
//!   </url>
//! </urlset>
//! ```

use crate::content::{Entry, EntryFilter, group_by_locale};
use crate::generator::routes::logical_paths;
use crate::i18n::{I18n, LocaleKey};
use crate::log;
use anyhow::{Context, Result};
use quick_xml::escape::escape;
use std::fs;
use std::path::Path;
use url::Url;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    alternates: Vec<AlternateLink>,
}

#[derive(Clone)]
struct AlternateLink {
    hreflang: String,
    href: String,
}

impl Sitemap {
    /// Collect every published page of every locale under `site`.
    ///
    /// Only the scheme and authority of `site` are used; its path is already
    /// part of the base path.
    pub fn build(i18n: &I18n, site: &Url, entries: &[Entry]) -> Result<Self> {
        let groups = group_by_locale(entries, &EntryFilter::supported(i18n, false));

        // logical path -> locales publishing it, first appearance wins
        let mut pages: Vec<(String, Vec<&LocaleKey>)> = Vec::new();
        for (key, group) in i18n.locales().zip(&groups) {
            for logical in logical_paths(&group.entries) {
                match pages.iter_mut().find(|(path, _)| *path == logical) {
                    Some((_, keys)) => keys.push(key),
                    None => pages.push((logical, vec![key])),
                }
            }
        }

        let mut urls = Vec::new();
        for (logical, keys) in &pages {
            let links = i18n
                .alternates(logical)
                .into_iter()
                .filter(|alt| keys.contains(&alt.locale))
                .map(|alt| -> Result<AlternateLink> {
                    let href = i18n.absolute_url(alt.locale, logical, site)?;
                    Ok(AlternateLink {
                        hreflang: alt.lang_tag.to_string(),
                        href: String::from(href),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            for link in &links {
                urls.push(UrlEntry {
                    loc: link.href.clone(),
                    alternates: if links.len() > 1 {
                        links.clone()
                    } else {
                        Vec::new()
                    },
                });
            }
        }

        Ok(Self { urls })
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\" xmlns:xhtml=\"");
        xml.push_str(XHTML_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape(&entry.loc));
            xml.push_str("</loc>\n");
            for link in entry.alternates {
                xml.push_str("    <xhtml:link rel=\"alternate\" hreflang=\"");
                xml.push_str(&escape(&link.hreflang));
                xml.push_str("\" href=\"");
                xml.push_str(&escape(&link.href));
                xml.push_str("\"/>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    pub fn write(self, path: &Path) -> Result<()> {
        let count = self.len();
        let xml = self.into_xml();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "{} ({} urls)", path.display(), count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::test_i18n;

    fn site() -> Url {
        Url::parse("https://example.com/astro/").unwrap()
    }

    #[test]
    fn test_sitemap_encodes_decoded_base_once() {
        let i18n = test_i18n(&["en", "zh"], "en", "/博客");
        let site = Url::parse("https://example.com/博客/").unwrap();
        let entries = vec![Entry::new("zh/a b")];
        let xml = Sitemap::build(&i18n, &site, &entries).unwrap().into_xml();

        assert!(xml.contains("<loc>https://example.com/%E5%8D%9A%E5%AE%A2/</loc>"));
        assert!(xml.contains("<loc>https://example.com/%E5%8D%9A%E5%AE%A2/zh/</loc>"));
        assert!(xml.contains("<loc>https://example.com/%E5%8D%9A%E5%AE%A2/zh/posts/a%20b/</loc>"));
        assert!(!xml.contains("%25"));
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap { urls: vec![] }.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}""#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_roots_have_alternates() {
        let i18n = test_i18n(&["en", "ar"], "en", "/astro");
        let sitemap = Sitemap::build(&i18n, &site(), &[]).unwrap();
        assert_eq!(sitemap.len(), 2);

        let xml = sitemap.into_xml();
        assert!(xml.contains("<loc>https://example.com/astro/</loc>"));
        assert!(xml.contains("<loc>https://example.com/astro/ar/</loc>"));
        assert!(xml.contains(
            r#"<xhtml:link rel="alternate" hreflang="ar-XX" href="https://example.com/astro/ar/"/>"#
        ));
        // 2 urls x 2 alternates
        assert_eq!(xml.matches("<xhtml:link").count(), 4);
    }

    #[test]
    fn test_sitemap_single_locale_page_has_no_alternates() {
        let i18n = test_i18n(&["en", "ar"], "en", "/");
        let entries = vec![
            Entry::new("en/hello"),
            Entry::new("ar/hello"),
            Entry::new("en/only-english"),
            Entry {
                draft: true,
                ..Entry::new("ar/draft")
            },
        ];
        let xml = Sitemap::build(&i18n, &site(), &entries).unwrap().into_xml();

        assert_eq!(xml.matches("<url>").count(), 5);
        assert!(xml.contains("<loc>https://example.com/ar/posts/hello/</loc>"));
        assert!(!xml.contains("draft"));

        let only = xml
            .split("<url>")
            .find(|block| block.contains("only-english"))
            .unwrap();
        assert!(!only.contains("xhtml:link"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/search?q=a&b=c".to_string(),
                alternates: vec![AlternateLink {
                    hreflang: "en".into(),
                    href: "https://example.com/?a=1&b=2".into(),
                }],
            }],
        };
        let xml = sitemap.into_xml();

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
        assert!(xml.contains(r#"href="https://example.com/?a=1&amp;b=2""#));
    }

    #[test]
    fn test_sitemap_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public/sitemap.xml");
        let i18n = test_i18n(&["en"], "en", "/");

        Sitemap::build(&i18n, &site(), &[]).unwrap().write(&path).unwrap();

        let xml = fs::read_to_string(&path).unwrap();
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(!xml.contains("xhtml:link rel"));
    }
}
