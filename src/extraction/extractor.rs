// src/extraction/extractor.rs
use anyhow::{Context, Result};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::selectors::{
    SelectorRule, JOB_DESCRIPTION_RULES, MAIN_CONTENT_SELECTOR, MIN_MAIN_CONTENT_CHARS,
    MIN_SELECTION_CHARS, MIN_SELECTOR_CHARS,
};
use super::text::{char_len, normalize_whitespace};
use crate::core::{keys, LocalStore};
use crate::error::MailerError;
use crate::notifier::{Notice, Notifier, AUTO_HIDE_AFTER};
use crate::types::{ExtractedJobPosting, Extraction, ExtractionSource};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FETCH_TIMEOUT_SECS: u64 = 30;

pub const EXTRACTED_MESSAGE: &str =
    "Job posting extracted! Run `jobmail generate` to draft your email.";

pub struct JobPostingExtractor {
    rules: Vec<(SelectorRule, Selector)>,
    main_content: Selector,
}

impl JobPostingExtractor {
    pub fn new() -> Result<Self> {
        Self::with_rules(JOB_DESCRIPTION_RULES.iter().copied())
    }

    /// Build an extractor probing `rules` in the given order
    pub fn with_rules(rules: impl IntoIterator<Item = SelectorRule>) -> Result<Self> {
        let rules = rules
            .into_iter()
            .map(|rule| parse_selector(rule.selector).map(|selector| (rule, selector)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            main_content: parse_selector(MAIN_CONTENT_SELECTOR)?,
        })
    }

    /// Best-effort lookup: selector table, then the user's selection, then
    /// the page's main landmark.
    pub fn extract(&self, document: &Html, selection: Option<&str>) -> Option<Extraction> {
        self.from_selectors(document)
            .or_else(|| Self::from_selection(selection))
            .or_else(|| self.from_main_content(document))
    }

    pub fn extract_from_html(&self, html: &str, selection: Option<&str>) -> Option<Extraction> {
        let document = Html::parse_document(html);
        self.extract(&document, selection)
    }

    /// Plain-text form of [`extract`](Self::extract); empty when nothing qualified
    pub fn extract_text(&self, html: &str, selection: Option<&str>) -> String {
        self.extract_from_html(html, selection)
            .map(|e| e.text)
            .unwrap_or_default()
    }

    fn from_selectors(&self, document: &Html) -> Option<Extraction> {
        for (rule, selector) in &self.rules {
            for element in document.select(selector) {
                let text = element_text(element);
                let trimmed = text.trim();
                if char_len(trimmed) > MIN_SELECTOR_CHARS {
                    debug!("Matched {} ({})", rule.selector, rule.site);
                    return Some(Extraction {
                        text: trimmed.to_string(),
                        source: ExtractionSource::Selector,
                        selector: Some(rule.selector),
                    });
                }
            }
        }
        None
    }

    fn from_selection(selection: Option<&str>) -> Option<Extraction> {
        let trimmed = selection?.trim();
        (char_len(trimmed) > MIN_SELECTION_CHARS).then(|| Extraction {
            text: trimmed.to_string(),
            source: ExtractionSource::Selection,
            selector: None,
        })
    }

    fn from_main_content(&self, document: &Html) -> Option<Extraction> {
        let element = document.select(&self.main_content).next()?;
        let text = element_text(element);
        let trimmed = text.trim();
        if char_len(trimmed) <= MIN_MAIN_CONTENT_CHARS {
            return None;
        }

        Some(Extraction {
            text: normalize_whitespace(trimmed),
            source: ExtractionSource::MainContent,
            selector: None,
        })
    }

    /// Extract, persist the hit with a timestamp and tell the user either way
    pub async fn extract_and_store(
        &self,
        html: &str,
        selection: Option<&str>,
        store: &LocalStore,
        notifier: &dyn Notifier,
    ) -> Result<Option<Extraction>> {
        let Some(extraction) = self.extract_from_html(html, selection) else {
            warn!("No job posting found in page");
            notifier.notify(
                Notice::error(MailerError::ExtractionMiss.to_string())
                    .with_auto_hide(AUTO_HIDE_AFTER),
            );
            return Ok(None);
        };

        info!(
            "Extracted {} chars via {:?}",
            char_len(&extraction.text),
            extraction.source
        );
        store
            .set(
                keys::EXTRACTED_JOB_POSTING,
                &ExtractedJobPosting::new(extraction.text.clone()),
            )
            .await?;
        notifier.notify(Notice::success(EXTRACTED_MESSAGE));

        Ok(Some(extraction))
    }
}

/// Concatenated descendant text, like the DOM's `textContent`
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| anyhow::anyhow!("Invalid selector '{}': {:?}", selector, e))
}

/// Loads page HTML from a URL or a local file
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        info!("Fetching job page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch job page")?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        response
            .text()
            .await
            .context("Failed to read response body")
    }

    /// `source` is fetched when it looks like an http(s) URL, read from disk otherwise
    pub async fn load(&self, source: &str) -> Result<String> {
        if source.starts_with("http://") || source.starts_with("https://") {
            self.fetch_html(source).await
        } else {
            let path = Path::new(source);
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read page: {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::selectors::SiteHint;

    fn long(word: &str, n: usize) -> String {
        vec![word; n].join(" ")
    }

    #[test]
    fn test_selector_priority_beats_document_order() {
        let generic = long("generic", 30);
        let indeed = long("indeed", 30);
        let html = format!(
            r#"<html><body>
                <div class="job-details">{}</div>
                <div id="jobDescriptionText">{}</div>
            </body></html>"#,
            generic, indeed
        );
        let extractor = JobPostingExtractor::new().unwrap();
        let extraction = extractor.extract_from_html(&html, None).unwrap();

        assert_eq!(extraction.text, indeed);
        assert_eq!(extraction.source, ExtractionSource::Selector);
        assert_eq!(extraction.selector, Some("#jobDescriptionText"));
    }

    #[test]
    fn test_short_matches_are_skipped_in_document_order() {
        let body = long("responsibilities", 10);
        let html = format!(
            r#"<div class="description__text">too short</div>
               <div class="description__text">  {}  </div>"#,
            body
        );
        let extractor = JobPostingExtractor::new().unwrap();
        assert_eq!(extractor.extract_text(&html, None), body);
    }

    #[test]
    fn test_exactly_threshold_is_rejected() {
        let text = "x".repeat(MIN_SELECTOR_CHARS);
        let html = format!(r#"<div class="job-description">{}</div>"#, text);
        let extractor = JobPostingExtractor::new().unwrap();
        assert_eq!(extractor.extract_text(&html, None), "");
    }

    #[test]
    fn test_selection_fallback() {
        let selection = format!("  {}  ", "a".repeat(51));
        let extractor = JobPostingExtractor::new().unwrap();
        let extraction = extractor
            .extract_from_html("<p>nothing here</p>", Some(&selection))
            .unwrap();
        assert_eq!(extraction.source, ExtractionSource::Selection);
        assert_eq!(extraction.text, "a".repeat(51));

        assert!(extractor
            .extract_from_html("<p>nothing</p>", Some(&"a".repeat(50)))
            .is_none());
    }

    #[test]
    fn test_main_content_fallback_is_normalized() {
        let paragraph = long("word", 30);
        let html = format!(
            "<main>\n\n   {}   \n\n\n\n  {}    more   words  \n</main>",
            paragraph, paragraph
        );
        let extractor = JobPostingExtractor::new().unwrap();
        let extraction = extractor.extract_from_html(&html, None).unwrap();

        assert_eq!(extraction.source, ExtractionSource::MainContent);
        assert_eq!(
            extraction.text,
            format!("{}\n\n{} more words", paragraph, paragraph)
        );
        assert!(!extraction.text.contains("  "));
        assert!(!extraction.text.contains("\n\n\n"));
    }

    #[test]
    fn test_short_main_content_is_a_miss() {
        let extractor = JobPostingExtractor::new().unwrap();
        let html = format!("<div role=\"main\">{}</div>", "m".repeat(200));
        assert!(extractor.extract_from_html(&html, None).is_none());
        assert_eq!(extractor.extract_text(&html, Some("short")), "");
    }

    #[test]
    fn test_custom_rules() {
        let html = format!(r#"<section class="vacancy">{}</section>"#, "v".repeat(120));
        let extractor = JobPostingExtractor::with_rules([SelectorRule {
            selector: "section.vacancy",
            site: SiteHint::Generic,
        }])
        .unwrap();
        assert_eq!(extractor.extract_text(&html, None), "v".repeat(120));
    }

    #[test]
    fn test_invalid_rule_is_rejected() {
        let result = JobPostingExtractor::with_rules([SelectorRule {
            selector: "[[",
            site: SiteHint::Generic,
        }]);
        assert!(result.is_err());
    }
}
