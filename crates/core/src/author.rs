//! The publication flow.
//!
//! Turns a [`StoryDraft`] (the raw authoring-form fields) into a finished
//! [`Story`]: validates the required fields, fills every optional field with
//! its documented default, stamps the publication date, and assigns a unique
//! id from the generator.

use crate::constants::{
    COVER_IMAGE_URL_BASE, DEFAULT_AUTHOR, DEFAULT_READ_TIME, EXCERPT_PREVIEW_CHARS,
    PUBLICATION_DATE_FORMAT,
};
use crate::error::{StoryError, StoryResult};
use crate::story::{Category, Story, StoryId};
use chrono::{DateTime, Utc};

/// The raw fields of the authoring form, before validation and defaulting.
///
/// `Default` mirrors the form's initial state: category `Prevention`, the
/// standard read-time label, everything else empty.
#[derive(Debug, Clone)]
pub struct StoryDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub author: String,
    pub read_time: String,
    pub image_url: String,
}

impl Default for StoryDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: Category::Prevention,
            author: String::new(),
            read_time: DEFAULT_READ_TIME.to_string(),
            image_url: String::new(),
        }
    }
}

/// Generates unique story ids from the publication instant.
///
/// An id is the millisecond epoch timestamp rendered as a decimal string, the
/// same shape as ids in previously persisted collections. The timestamp is
/// bumped by 1 ms whenever the clock has not advanced past the previously
/// issued id, so two publishes within the same millisecond never collide.
#[derive(Debug, Clone, Default)]
pub struct StoryIdGenerator {
    last_millis: Option<i64>,
}

impl StoryIdGenerator {
    /// Creates a generator with no issued ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new unique id from the current wall clock.
    pub fn next(&mut self) -> StoryId {
        self.next_from(Utc::now().timestamp_millis())
    }

    /// Issues a new id for the instant `now_millis`, bumping past the last
    /// issued id if the clock has not advanced.
    fn next_from(&mut self, now_millis: i64) -> StoryId {
        let millis = match self.last_millis {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_millis = Some(millis);
        StoryId::new(millis.to_string())
    }
}

/// Service that publishes drafts into finished stories.
#[derive(Debug, Clone, Default)]
pub struct PublishService {
    generator: StoryIdGenerator,
}

impl PublishService {
    /// Creates a new `PublishService` with a fresh id generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `draft` and turns it into a finished story.
    ///
    /// Required fields: a title or content that is empty after trimming rejects
    /// the whole draft — no partial save. Every other field falls back to its
    /// default when empty:
    ///
    /// - excerpt: the first [`EXCERPT_PREVIEW_CHARS`] characters of the title,
    ///   followed by `...`
    /// - author: [`DEFAULT_AUTHOR`]
    /// - read time: [`DEFAULT_READ_TIME`]
    /// - cover image: a generated url seeded by the new story's id
    ///
    /// The publication date is stamped from the current wall clock in the
    /// short human-readable form (`Aug 5, 2026`).
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::InvalidInput`] if the title or content is blank.
    pub fn publish(&mut self, draft: StoryDraft) -> StoryResult<Story> {
        self.publish_at(draft, Utc::now())
    }

    fn publish_at(&mut self, draft: StoryDraft, now: DateTime<Utc>) -> StoryResult<Story> {
        if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
            return Err(StoryError::InvalidInput(
                "a story needs at least a title and content".into(),
            ));
        }

        let id = self.generator.next_from(now.timestamp_millis());

        let excerpt = if draft.excerpt.trim().is_empty() {
            let preview: String = draft.title.chars().take(EXCERPT_PREVIEW_CHARS).collect();
            format!("{preview}...")
        } else {
            draft.excerpt
        };

        let author = if draft.author.trim().is_empty() {
            DEFAULT_AUTHOR.to_string()
        } else {
            draft.author
        };

        let read_time = if draft.read_time.trim().is_empty() {
            DEFAULT_READ_TIME.to_string()
        } else {
            draft.read_time
        };

        let image_url = if draft.image_url.trim().is_empty() {
            format!("{COVER_IMAGE_URL_BASE}/{id}/800/600")
        } else {
            draft.image_url
        };

        Ok(Story {
            id,
            title: draft.title,
            excerpt,
            content: draft.content,
            category: draft.category,
            author,
            date: now.format(PUBLICATION_DATE_FORMAT).to_string(),
            image_url,
            read_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> StoryDraft {
        StoryDraft {
            title: "The Silent Rhythm".to_string(),
            content: "Body text.".to_string(),
            ..StoryDraft::default()
        }
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 5, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_publish_rejects_blank_title() {
        let mut service = PublishService::new();
        let result = service.publish(StoryDraft {
            title: "   ".to_string(),
            ..draft()
        });
        assert!(matches!(result, Err(StoryError::InvalidInput(_))));
    }

    #[test]
    fn test_publish_rejects_blank_content() {
        let mut service = PublishService::new();
        let result = service.publish(StoryDraft {
            content: String::new(),
            ..draft()
        });
        assert!(matches!(result, Err(StoryError::InvalidInput(_))));
    }

    #[test]
    fn test_publish_keeps_provided_fields() {
        let mut service = PublishService::new();
        let story = service
            .publish(StoryDraft {
                excerpt: "A short summary.".to_string(),
                author: "Dr Smith".to_string(),
                read_time: "8 min read".to_string(),
                image_url: "https://example.org/cover.png".to_string(),
                category: Category::MentalHealth,
                ..draft()
            })
            .unwrap();

        assert_eq!(story.excerpt, "A short summary.");
        assert_eq!(story.author, "Dr Smith");
        assert_eq!(story.read_time, "8 min read");
        assert_eq!(story.image_url, "https://example.org/cover.png");
        assert_eq!(story.category, Category::MentalHealth);
    }

    #[test]
    fn test_publish_defaults_excerpt_from_title() {
        let mut service = PublishService::new();
        let story = service.publish(draft()).unwrap();
        assert_eq!(story.excerpt, "The Silent Rhythm...");
    }

    #[test]
    fn test_publish_truncates_long_title_for_excerpt() {
        let mut service = PublishService::new();
        let long_title = "t".repeat(150);
        let story = service
            .publish(StoryDraft {
                title: long_title,
                ..draft()
            })
            .unwrap();
        assert_eq!(story.excerpt, format!("{}...", "t".repeat(100)));
    }

    #[test]
    fn test_publish_defaults_author_and_read_time() {
        let mut service = PublishService::new();
        let story = service
            .publish(StoryDraft {
                read_time: String::new(),
                ..draft()
            })
            .unwrap();
        assert_eq!(story.author, "HealthScope Contributor");
        assert_eq!(story.read_time, "5 min read");
    }

    #[test]
    fn test_publish_defaults_cover_url_seeded_by_id() {
        let mut service = PublishService::new();
        let story = service.publish_at(draft(), instant()).unwrap();
        assert_eq!(
            story.image_url,
            format!("https://picsum.photos/seed/{}/800/600", story.id)
        );
    }

    #[test]
    fn test_publish_date_format_has_no_zero_padding() {
        let mut service = PublishService::new();
        let story = service.publish_at(draft(), instant()).unwrap();
        assert_eq!(story.date, "Aug 5, 2026");
    }

    #[test]
    fn test_publish_id_is_millisecond_epoch_string() {
        let mut service = PublishService::new();
        let now = instant();
        let story = service.publish_at(draft(), now).unwrap();
        assert_eq!(story.id.as_str(), now.timestamp_millis().to_string());
    }

    #[test]
    fn test_generator_bumps_on_identical_instant() {
        let mut generator = StoryIdGenerator::new();
        let first = generator.next_from(1_000);
        let second = generator.next_from(1_000);
        let third = generator.next_from(1_000);

        assert_eq!(first.as_str(), "1000");
        assert_eq!(second.as_str(), "1001");
        assert_eq!(third.as_str(), "1002");
    }

    #[test]
    fn test_generator_bumps_on_clock_going_backwards() {
        let mut generator = StoryIdGenerator::new();
        let first = generator.next_from(2_000);
        let second = generator.next_from(1_500);

        assert_eq!(first.as_str(), "2000");
        assert_eq!(second.as_str(), "2001");
    }

    #[test]
    fn test_generator_follows_advancing_clock() {
        let mut generator = StoryIdGenerator::new();
        generator.next_from(1_000);
        let next = generator.next_from(5_000);
        assert_eq!(next.as_str(), "5000");
    }

    #[test]
    fn test_rapid_publishes_never_collide() {
        let mut service = PublishService::new();
        let now = instant();
        let first = service.publish_at(draft(), now).unwrap();
        let second = service.publish_at(draft(), now).unwrap();
        assert_ne!(first.id, second.id);
    }
}
