//! Sentiment-feed evidence source.
//!
//! Posts returned by a `FeedClient` are cleaned, scored against a small
//! polarity lexicon, and grouped by sentiment. Positive posts support the
//! claim; negative and neutral posts do not.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use claimcheck_contracts::evidence::{EvidenceRecord, ResultBundle, Stance};
use claimcheck_core::EvidenceSource;

use crate::feed::{FeedClient, Post};

/// Posts requested per search unless configured otherwise.
pub const DEFAULT_MAX_POSTS: usize = 10;

const EXPLANATION_PREFIX: &str = "My search on social media";

/// Word polarities. Anything not listed scores zero.
const LEXICON: &[(&str, i32)] = &[
    ("amazing", 2),
    ("awesome", 2),
    ("best", 2),
    ("better", 1),
    ("enjoy", 1),
    ("energy", 1),
    ("fit", 1),
    ("fun", 1),
    ("glad", 1),
    ("good", 1),
    ("great", 2),
    ("happy", 2),
    ("healthy", 1),
    ("love", 2),
    ("nice", 1),
    ("strong", 1),
    ("awful", -2),
    ("bad", -1),
    ("boring", -1),
    ("crash", -1),
    ("diabetes", -1),
    ("harmful", -2),
    ("hate", -2),
    ("pain", -1),
    ("poor", -1),
    ("sad", -2),
    ("sick", -1),
    ("terrible", -2),
    ("tired", -1),
    ("unhealthy", -1),
    ("useless", -2),
    ("worst", -2),
];

/// Mentions, non-alphanumeric characters, and links. Matches become spaces.
static SCRUB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(@[A-Za-z0-9]+)|([^0-9A-Za-z \t])|(\w+://\S+)").expect("scrub pattern is valid")
});

/// Words that flip the polarity of the word right after them.
const NEGATORS: &[&str] = &["not", "no", "never", "dont", "isnt", "nothing"];

/// Overall tone of one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Bundle group and label a post of this sentiment is filed under.
    fn placement(self) -> (Stance, &'static str) {
        match self {
            Sentiment::Positive => (Stance::Supporting, "positive"),
            Sentiment::Neutral => (Stance::Contradicting, "neutral"),
            Sentiment::Negative => (Stance::Contradicting, "negative"),
        }
    }
}

/// Lexicon-based polarity classifier for short posts.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    lexicon: HashMap<&'static str, i32>,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    /// Strip mentions, links, and punctuation; lowercase what is left.
    pub fn clean(text: &str) -> String {
        SCRUB_PATTERN
            .replace_all(text, " ")
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Summed word polarity of the cleaned text.
    pub fn polarity(&self, text: &str) -> i32 {
        let cleaned = Self::clean(text);
        let mut score = 0;
        let mut negate = false;
        for word in cleaned.split(' ') {
            if NEGATORS.contains(&word) {
                negate = true;
                continue;
            }
            let value = self.lexicon.get(word).copied().unwrap_or(0);
            score += if negate { -value } else { value };
            negate = false;
        }
        score
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        match self.polarity(text) {
            p if p > 0 => Sentiment::Positive,
            0 => Sentiment::Neutral,
            _ => Sentiment::Negative,
        }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// An `EvidenceSource` that reads public mood about a scenario from a feed.
pub struct SentimentFeed {
    client: Box<dyn FeedClient>,
    classifier: SentimentClassifier,
    max_posts: usize,
    result: ResultBundle,
}

impl SentimentFeed {
    pub fn new(client: Box<dyn FeedClient>) -> Self {
        Self {
            client,
            classifier: SentimentClassifier::new(),
            max_posts: DEFAULT_MAX_POSTS,
            result: ResultBundle::new(),
        }
    }

    /// Request at most `max_posts` posts per search (at least one).
    pub fn with_max_posts(mut self, max_posts: usize) -> Self {
        self.max_posts = max_posts.max(1);
        self
    }

    /// The bundle stored by the most recent query.
    pub fn result(&self) -> &ResultBundle {
        &self.result
    }

    /// Classify `posts`, keeping a shared post only once.
    fn bundle(&self, posts: Vec<Post>) -> ResultBundle {
        let mut bundle = ResultBundle::new();
        let mut kept: HashSet<(String, Sentiment)> = HashSet::new();

        for post in posts {
            let sentiment = self.classifier.classify(&post.text);
            let key = (post.text, sentiment);
            if post.repost_count > 0 && kept.contains(&key) {
                continue;
            }
            let (stance, label) = sentiment.placement();
            bundle.push(stance, label, EvidenceRecord::new(key.0.clone()));
            kept.insert(key);
        }
        bundle
    }
}

impl EvidenceSource for SentimentFeed {
    fn name(&self) -> &str {
        "sentiment-feed"
    }

    /// A failed search is logged and leaves an empty bundle behind.
    fn query(&mut self, scenario: &str) -> &ResultBundle {
        let posts = match self.client.search(scenario, self.max_posts) {
            Ok(posts) => posts,
            Err(e) => {
                warn!(
                    client = %self.client.name(),
                    scenario = %scenario,
                    error = %e,
                    "feed search failed, continuing without social evidence"
                );
                Vec::new()
            }
        };

        self.result = self.bundle(posts);
        debug!(
            client = %self.client.name(),
            posts = self.result.total_count(),
            positive = self.result.supporting_count(),
            "feed posts classified"
        );
        &self.result
    }

    /// `0` without positive posts, otherwise the positive share rescaled
    /// from [0, 1] to [-1, 1].
    fn confidence(&self) -> f64 {
        let positive = self.result.supporting_count();
        if positive == 0 {
            return 0.0;
        }
        (positive as f64 / self.result.total_count() as f64 - 0.5) * 2.0
    }

    fn explain(&self, positive: bool) -> String {
        let confidence = self.confidence();
        if confidence == 0.0 {
            return format!("{EXPLANATION_PREFIX} has not yielded any result for this statement.");
        }
        if positive == (confidence > 0.0) {
            format!("{EXPLANATION_PREFIX} confirmed this result.")
        } else {
            format!("{EXPLANATION_PREFIX} contradicted this result but did not provide a lot of evidence for it.")
        }
    }
}

#[cfg(test)]
mod tests {
    use claimcheck_contracts::evidence::Stance;
    use claimcheck_core::EvidenceSource;

    use crate::feed::{Post, StaticFeed, UnavailableFeed};

    use super::{Sentiment, SentimentClassifier, SentimentFeed};

    fn post(text: &str, repost_count: u32) -> Post {
        Post { text: text.to_string(), repost_count }
    }

    fn feed_with(posts: Vec<Post>) -> SentimentFeed {
        SentimentFeed::new(Box::new(StaticFeed::default().with_posts("q", posts)))
    }

    // ── Classifier ────────────────────────────────────────────────────────────

    #[test]
    fn clean_drops_mentions_links_and_punctuation() {
        assert_eq!(
            SentimentClassifier::clean("@coachli Great run!!! https://t.co/abc #Fit"),
            "great run fit"
        );
        assert_eq!(SentimentClassifier::clean("   "), "");
    }

    #[test]
    fn link_glued_to_a_word_keeps_the_word() {
        assert_eq!(SentimentClassifier::clean("great!https://t.co/x"), "great");
        assert_eq!(
            SentimentClassifier::new().classify("great!https://t.co/x"),
            Sentiment::Positive
        );
    }

    #[test]
    fn mention_stops_at_the_first_non_alphanumeric() {
        assert_eq!(SentimentClassifier::clean("@coach_li eats well"), "li eats well");
    }

    #[test]
    fn classify_by_summed_polarity() {
        let classifier = SentimentClassifier::new();
        assert_eq!(classifier.classify("I love this, great day"), Sentiment::Positive);
        assert_eq!(classifier.classify("Went for a walk."), Sentiment::Neutral);
        assert_eq!(classifier.classify("Feeling awful and sad"), Sentiment::Negative);
        // +1 healthy, -1 boring, -1 tired
        assert_eq!(classifier.polarity("healthy food is boring and I am tired"), -1);
    }

    #[test]
    fn negation_flips_the_next_word() {
        let classifier = SentimentClassifier::new();
        assert_eq!(classifier.classify("Sugar is not good for kids"), Sentiment::Negative);
        assert_eq!(classifier.classify("never sad when I run"), Sentiment::Positive);
    }

    // ── Source behaviour ──────────────────────────────────────────────────────

    #[test]
    fn no_posts_is_empty_and_zero() {
        let mut feed = feed_with(vec![]);
        assert!(feed.query("q").is_empty());
        assert_eq!(feed.confidence(), 0.0);
        assert_eq!(
            feed.explain(true),
            "My search on social media has not yielded any result for this statement."
        );
    }

    #[test]
    fn posts_are_grouped_by_sentiment() {
        let mut feed = feed_with(vec![
            post("great news", 0),
            post("terrible news", 0),
            post("plain news", 0),
        ]);
        let bundle = feed.query("q");

        assert_eq!(bundle.supporting_count(), 1);
        assert_eq!(bundle.total_count(), 3);
        assert_eq!(bundle.records(Stance::Contradicting, "neutral").map(<[_]>::len), Some(1));
        assert_eq!(bundle.records(Stance::Contradicting, "negative").map(<[_]>::len), Some(1));
    }

    /// Shared posts are kept once; unshared duplicates are kept every time.
    #[test]
    fn reposted_duplicates_are_kept_once() {
        let mut feed = feed_with(vec![
            post("happy days", 4),
            post("happy days", 4),
            post("sad days", 0),
            post("sad days", 0),
        ]);
        let bundle = feed.query("q");

        assert_eq!(bundle.supporting_count(), 1);
        assert_eq!(bundle.total_count(), 3);
    }

    /// 3 positive posts of 4 → (0.75 − 0.5) × 2 = 0.5.
    #[test]
    fn confidence_from_positive_share() {
        let mut feed = feed_with(vec![
            post("great", 0),
            post("love it", 0),
            post("happy", 0),
            post("awful", 0),
        ]);
        feed.query("q");
        assert_eq!(feed.confidence(), 0.5);
        assert_eq!(feed.explain(true), "My search on social media confirmed this result.");
        assert_eq!(
            feed.explain(false),
            "My search on social media contradicted this result but did not provide a lot of evidence for it."
        );
    }

    /// Non-empty bundle without positive posts scores zero.
    #[test]
    fn only_negative_posts_score_zero() {
        let mut feed = feed_with(vec![post("awful", 0), post("bad", 0)]);
        assert!(!feed.query("q").is_empty());
        assert_eq!(feed.confidence(), 0.0);
    }

    #[test]
    fn max_posts_limits_the_search() {
        let mut feed = feed_with(vec![post("great", 0), post("awful", 0), post("awful", 0)]).with_max_posts(1);
        assert_eq!(feed.query("q").total_count(), 1);
        assert_eq!(feed.confidence(), 1.0);
    }

    #[test]
    fn unreachable_feed_degrades_to_empty_bundle() {
        let mut feed = SentimentFeed::new(Box::new(UnavailableFeed::new("offline")));
        assert!(feed.query("Healthy people are happy").is_empty());
        assert_eq!(feed.confidence(), 0.0);
    }

    #[test]
    fn query_replaces_previous_result() {
        let mut feed = feed_with(vec![post("great", 0)]);
        assert!(!feed.query("q").is_empty());
        assert!(feed.query("other query").is_empty());
        assert!(feed.result().is_empty());
    }

    #[test]
    fn bundled_healthy_feed_leans_positive() {
        let mut feed = SentimentFeed::new(Box::new(StaticFeed::bundled().unwrap()));
        let bundle = feed.query("Healthy people are happy");

        // Six posts, one reposted duplicate dropped; three are positive.
        assert_eq!(bundle.total_count(), 5);
        assert_eq!(bundle.supporting_count(), 3);
        assert!((feed.confidence() - 0.2).abs() < 1e-9);
    }
}
