//! Document metadata: title composition, SEO and social preview tags
//!
//! [`SiteMetadata`] is a plain immutable record built once from [`AppConfig`]
//! at startup. The shell turns it into head tags through [`SiteMetadata::head_tags`];
//! routed pages only contribute their own title.

use url::Url;

use crate::config::AppConfig;

pub const SITE_NAME: &str = "Career OS";
pub const DEFAULT_TITLE: &str = "Career OS - Skill Development & Job Readiness Platform";
pub const TITLE_TEMPLATE: &str = "%s | Career OS";

const DESCRIPTION: &str = "Enterprise-grade skill development and job readiness platform with AI-powered recommendations and ATS-compliant resume builder.";
const SOCIAL_DESCRIPTION: &str =
    "Enterprise-grade skill development and job readiness platform with AI-powered recommendations.";
const KEYWORDS: &[&str] = &[
    "career development",
    "skill learning",
    "job readiness",
    "resume builder",
    "ATS optimization",
];

/// Title with a root default and a template applied to page titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTemplate {
    pub default: &'static str,
    pub template: &'static str,
}

impl TitleTemplate {
    /// Compose the document title for a page.
    ///
    /// A missing or blank page title yields the default title.
    pub fn resolve(&self, page_title: Option<&str>) -> String {
        match page_title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => self.template.replacen("%s", title, 1),
            None => self.default.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
    pub url: Option<&'static str>,
}

/// Which values browsers may auto-link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDetection {
    pub email: bool,
    pub address: bool,
    pub telephone: bool,
}

impl FormatDetection {
    /// Content of the `format-detection` meta tag, or `None` when nothing is disabled.
    pub fn content(&self) -> Option<String> {
        let disabled: Vec<&str> = [
            ("telephone", self.telephone),
            ("address", self.address),
            ("email", self.email),
        ]
        .into_iter()
        .filter(|(_, enabled)| !enabled)
        .map(|(name, _)| name)
        .collect();

        if disabled.is_empty() {
            return None;
        }

        Some(
            disabled
                .iter()
                .map(|name| format!("{}=no", name))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub kind: &'static str,
    pub locale: &'static str,
    pub url: Url,
    pub title: &'static str,
    pub description: &'static str,
    pub site_name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub creator: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePreview {
    None,
    Standard,
    Large,
}

impl ImagePreview {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagePreview::None => "none",
            ImagePreview::Standard => "standard",
            ImagePreview::Large => "large",
        }
    }
}

/// Crawl directives. A preview length of `-1` means "no limit".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    pub max_video_preview: i32,
    pub max_image_preview: ImagePreview,
    pub max_snippet: i32,
}

fn index_follow(index: bool, follow: bool) -> [&'static str; 2] {
    [
        if index { "index" } else { "noindex" },
        if follow { "follow" } else { "nofollow" },
    ]
}

impl Robots {
    pub fn content(&self) -> String {
        index_follow(self.index, self.follow).join(", ")
    }
}

impl GoogleBot {
    pub fn content(&self) -> String {
        let [index, follow] = index_follow(self.index, self.follow);
        format!(
            "{}, {}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            index,
            follow,
            self.max_video_preview,
            self.max_image_preview.as_str(),
            self.max_snippet
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification {
    pub google: Option<String>,
}

/// A single tag to place in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    /// `<meta name=.. content=..>`
    Meta { name: &'static str, content: String },
    /// `<meta property=.. content=..>` (Open Graph)
    Property { property: &'static str, content: String },
    /// `<link rel=.. href=..>`
    Link { rel: &'static str, href: String },
}

/// Everything the document head needs to know about the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: TitleTemplate,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub authors: Vec<Author>,
    pub creator: &'static str,
    pub publisher: &'static str,
    pub format_detection: FormatDetection,
    pub metadata_base: Url,
    pub canonical: Url,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
    pub verification: Verification,
}

/// Build the site metadata from configuration.
pub fn site_metadata(config: &AppConfig) -> SiteMetadata {
    let base = config.app_url.clone();

    SiteMetadata {
        title: TitleTemplate {
            default: DEFAULT_TITLE,
            template: TITLE_TEMPLATE,
        },
        description: DESCRIPTION,
        keywords: KEYWORDS,
        authors: vec![Author {
            name: "Career OS Team",
            url: None,
        }],
        creator: SITE_NAME,
        publisher: SITE_NAME,
        format_detection: FormatDetection {
            email: false,
            address: false,
            telephone: false,
        },
        canonical: resolve_path(&base, "/"),
        open_graph: OpenGraph {
            kind: "website",
            locale: "en_US",
            url: resolve_path(&base, "/"),
            title: DEFAULT_TITLE,
            description: SOCIAL_DESCRIPTION,
            site_name: SITE_NAME,
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: DEFAULT_TITLE,
            description: SOCIAL_DESCRIPTION,
            creator: "@careeros",
        },
        robots: Robots {
            index: true,
            follow: true,
            google_bot: GoogleBot {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: ImagePreview::Large,
                max_snippet: -1,
            },
        },
        verification: Verification {
            google: config.google_site_verification.clone(),
        },
        metadata_base: base,
    }
}

/// Resolve a site-relative path against the metadata base.
pub fn resolve_path(base: &Url, path: &str) -> Url {
    base.join(path).unwrap_or_else(|_| base.clone())
}

impl SiteMetadata {
    /// Resolve a site-relative path against this site's base URL.
    pub fn absolute(&self, path: &str) -> Url {
        resolve_path(&self.metadata_base, path)
    }

    /// The head tags this metadata produces, in document order.
    pub fn head_tags(&self) -> Vec<HeadTag> {
        let mut tags = vec![
            HeadTag::Meta {
                name: "description",
                content: self.description.to_string(),
            },
            HeadTag::Meta {
                name: "keywords",
                content: self.keywords.join(","),
            },
        ];

        for author in &self.authors {
            tags.push(HeadTag::Meta {
                name: "author",
                content: author.name.to_string(),
            });
            if let Some(url) = author.url {
                tags.push(HeadTag::Link {
                    rel: "author",
                    href: url.to_string(),
                });
            }
        }

        tags.push(HeadTag::Meta {
            name: "creator",
            content: self.creator.to_string(),
        });
        tags.push(HeadTag::Meta {
            name: "publisher",
            content: self.publisher.to_string(),
        });
        tags.push(HeadTag::Meta {
            name: "robots",
            content: self.robots.content(),
        });
        tags.push(HeadTag::Meta {
            name: "googlebot",
            content: self.robots.google_bot.content(),
        });
        tags.push(HeadTag::Link {
            rel: "canonical",
            href: self.canonical.to_string(),
        });

        if let Some(token) = &self.verification.google {
            tags.push(HeadTag::Meta {
                name: "google-site-verification",
                content: token.clone(),
            });
        }

        if let Some(content) = self.format_detection.content() {
            tags.push(HeadTag::Meta {
                name: "format-detection",
                content,
            });
        }

        let og = &self.open_graph;
        tags.extend([
            HeadTag::Property {
                property: "og:title",
                content: og.title.to_string(),
            },
            HeadTag::Property {
                property: "og:description",
                content: og.description.to_string(),
            },
            HeadTag::Property {
                property: "og:url",
                content: og.url.to_string(),
            },
            HeadTag::Property {
                property: "og:site_name",
                content: og.site_name.to_string(),
            },
            HeadTag::Property {
                property: "og:locale",
                content: og.locale.to_string(),
            },
            HeadTag::Property {
                property: "og:type",
                content: og.kind.to_string(),
            },
        ]);

        let tw = &self.twitter;
        tags.extend([
            HeadTag::Meta {
                name: "twitter:card",
                content: tw.card.to_string(),
            },
            HeadTag::Meta {
                name: "twitter:creator",
                content: tw.creator.to_string(),
            },
            HeadTag::Meta {
                name: "twitter:title",
                content: tw.title.to_string(),
            },
            HeadTag::Meta {
                name: "twitter:description",
                content: tw.description.to_string(),
            },
        ]);

        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata_for(app_url: Option<&str>, token: Option<&str>) -> SiteMetadata {
        let config = AppConfig::from_lookup(|key| match key {
            crate::config::APP_URL_VAR => app_url.map(str::to_string),
            crate::config::SITE_VERIFICATION_VAR => token.map(str::to_string),
            _ => None,
        });
        site_metadata(&config)
    }

    fn find_meta<'a>(tags: &'a [HeadTag], wanted: &str) -> Option<&'a str> {
        tags.iter().find_map(|tag| match tag {
            HeadTag::Meta { name, content } if *name == wanted => Some(content.as_str()),
            _ => None,
        })
    }

    #[test]
    fn page_title_is_composed_with_template() {
        let metadata = metadata_for(None, None);
        assert_eq!(
            metadata.title.resolve(Some("Resume Builder")),
            "Resume Builder | Career OS"
        );
    }

    #[test]
    fn missing_page_title_uses_default() {
        let metadata = metadata_for(None, None);
        assert_eq!(
            metadata.title.resolve(None),
            "Career OS - Skill Development & Job Readiness Platform"
        );
        assert_eq!(metadata.title.resolve(Some("  ")), DEFAULT_TITLE);
    }

    #[test]
    fn canonical_resolves_against_base_url() {
        let metadata = metadata_for(None, None);
        assert_eq!(metadata.metadata_base.as_str(), "http://localhost:3000/");
        assert_eq!(metadata.canonical.as_str(), "http://localhost:3000/");
        assert_eq!(metadata.open_graph.url.as_str(), "http://localhost:3000/");

        let metadata = metadata_for(Some("https://careeros.app"), None);
        assert_eq!(metadata.canonical.as_str(), "https://careeros.app/");
        assert_eq!(
            metadata.absolute("/resume-builder").as_str(),
            "https://careeros.app/resume-builder"
        );
    }

    #[test]
    fn crawl_directives_allow_everything() {
        let metadata = metadata_for(None, None);
        let tags = metadata.head_tags();
        assert_eq!(find_meta(&tags, "robots"), Some("index, follow"));
        assert_eq!(
            find_meta(&tags, "googlebot"),
            Some("index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1")
        );
    }

    #[test]
    fn verification_tag_only_present_with_token() {
        let tags = metadata_for(None, None).head_tags();
        assert_eq!(find_meta(&tags, "google-site-verification"), None);

        let tags = metadata_for(None, Some("token-42")).head_tags();
        assert_eq!(find_meta(&tags, "google-site-verification"), Some("token-42"));
    }

    #[test]
    fn format_detection_disables_all_autolinking() {
        let tags = metadata_for(None, None).head_tags();
        assert_eq!(
            find_meta(&tags, "format-detection"),
            Some("telephone=no, address=no, email=no")
        );
    }

    #[test]
    fn social_tags_carry_site_identity() {
        let tags = metadata_for(None, None).head_tags();
        assert_eq!(find_meta(&tags, "twitter:card"), Some("summary_large_image"));
        assert_eq!(find_meta(&tags, "twitter:creator"), Some("@careeros"));
        assert!(tags.contains(&HeadTag::Property {
            property: "og:site_name",
            content: "Career OS".to_string(),
        }));
        assert!(tags.contains(&HeadTag::Link {
            rel: "canonical",
            href: "http://localhost:3000/".to_string(),
        }));
    }
}
