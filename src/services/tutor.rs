//! Tutor response selection.
//!
//! DESIGN
//! ======
//! The tutor is a rule-based responder, not a model. One free-text input maps
//! to exactly one canned response through three stages, in order:
//!
//! 1. Scope guard — fixed phrase fragments for topics outside the lesson;
//!    any hit short-circuits topic matching.
//! 2. Topic rules — an ordered `(keywords, response)` table, first match
//!    wins. Ordering is load-bearing: the surah rule sits above the broader
//!    quran rule so "how many surahs are in the quran" is never shadowed.
//! 3. Fallback — a uniformly random member of a fixed pool, so unrecognized
//!    input degrades instead of erroring.
//!
//! The randomness source is a caller-supplied `Rng` so tests can seed it.

use rand::Rng;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

// =============================================================================
// RESPONSE TABLES
// =============================================================================

/// Out-of-lesson phrase fragments, checked before topic classification.
const SCOPE_GUARD: &[&str] = &[
    "how to perform prayer",
    "fasting rules",
    "zakat calculation",
    "five pillars",
    "hajj rites",
];

const OUT_OF_SCOPE_RESPONSE: &str = "That question goes beyond the scope of this lesson. \
     Please ask your teacher about it, or explore our other courses covering that topic.";

struct TopicRule {
    keywords: &'static [&'static str],
    response: &'static str,
}

/// Ordered decision table. First rule whose any keyword is a substring of
/// the lower-cased input wins.
const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        keywords: &["surah", "chapter"],
        response: "The Quran contains 114 surahs (chapters), classified as Meccan or Medinan \
                   depending on when and where they were revealed. They vary greatly in length, \
                   from Al-Kawthar with 3 verses to Al-Baqarah with 286.",
    },
    TopicRule {
        keywords: &["tajweed", "recitation"],
        response: "Tajweed is the set of rules governing pronunciation during recitation of the \
                   Quran. It's important because it preserves the original way the Quran was \
                   revealed.",
    },
    TopicRule {
        keywords: &["harakaat", "vowel", "fatha", "kasra", "damma"],
        response: "The vowel marks (harakaat) give sound to the letters: fatha makes an 'a' \
                   sound, kasra an 'i' sound, and damma a 'u' sound. Sukoon indicates the \
                   absence of a vowel.",
    },
    TopicRule {
        keywords: &["letter", "alphabet", "pronounce"],
        response: "The Arabic alphabet has 28 letters, read from right to left, and each letter \
                   is pronounced from a specific articulation point (makhraj). The letter you're \
                   asking about is pronounced from the throat — try making a soft sound while \
                   exhaling gently.",
    },
    TopicRule {
        keywords: &["niyyah", "intention"],
        response: "This concept refers to the importance of intention (niyyah) before any \
                   action. The Prophet Muhammad \u{fdfa} said: \"Actions are judged by \
                   intentions.\"",
    },
    // Broad rule last so the specific ones above are never shadowed.
    TopicRule {
        keywords: &["quran", "ayat", "verse"],
        response: "The Quran is the central religious text of Islam, divided into 114 surahs and \
                   6,236 ayat (verses), and grouped into 30 juz of roughly equal length. It is \
                   the primary source of Islamic law and practice.",
    },
];

/// Generic responses for input no rule recognizes.
pub const FALLBACK_POOL: &[&str] = &[
    "That's a great question! Could you point me to the part of the lesson you're reading? \
     I'll walk you through it step by step.",
    "You're doing great! Remember that learning the Quran takes time and consistent practice. \
     The Prophet Muhammad \u{fdfa} said: \"The best among you are those who learn the Quran \
     and teach it.\"",
    "Let's work through that together. Re-read the section above and tell me which word or \
     rule is unclear, and I'll explain it.",
];

// =============================================================================
// SELECTOR
// =============================================================================

/// Map one free-text input to exactly one response.
///
/// Pure function of (input, fixed tables, rng); never returns an empty
/// string. Callers reject empty/whitespace-only input before invoking this.
pub fn select_response<R: Rng>(input: &str, rng: &mut R) -> &'static str {
    let normalized = input.to_lowercase();

    if SCOPE_GUARD.iter().any(|frag| normalized.contains(frag)) {
        return OUT_OF_SCOPE_RESPONSE;
    }

    for rule in TOPIC_RULES {
        if rule.keywords.iter().any(|kw| normalized.contains(kw)) {
            return rule.response;
        }
    }

    FALLBACK_POOL[rng.random_range(0..FALLBACK_POOL.len())]
}

// =============================================================================
// CONVERSATION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One entry in the conversation log. Never mutated or deleted within a
/// session; the whole log is discarded with the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct Utterance {
    pub id: Uuid,
    pub speaker: Speaker,
    pub content: String,
    /// Unix seconds.
    pub timestamp: i64,
}

impl Utterance {
    fn now(speaker: Speaker, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            content,
            timestamp: OffsetDateTime::now_utc().unix_timestamp(),
        }
    }
}

/// Insertion-ordered log for one tutor widget instance.
#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub id: Uuid,
    pub lesson_title: String,
    pub utterances: Vec<Utterance>,
}

impl Conversation {
    /// Start a conversation seeded with the welcome message.
    #[must_use]
    pub fn start(lesson_title: &str) -> Self {
        let welcome = format!(
            "\u{1f44b} Assalamu alaikum! I'm your AI tutor for \"{lesson_title}\". \
             Ask me any questions about this lesson and I'll help you understand better."
        );
        Self {
            id: Uuid::new_v4(),
            lesson_title: lesson_title.to_owned(),
            utterances: vec![Utterance::now(Speaker::Assistant, welcome)],
        }
    }

    /// Append one user utterance and its assistant reply as a single step.
    ///
    /// Every accepted user utterance is paired with exactly one assistant
    /// utterance appended directly after it; the pair is built atomically so
    /// the invariant cannot be observed half-applied.
    pub fn send<R: Rng>(&mut self, input: &str, rng: &mut R) -> (Utterance, Utterance) {
        let user = Utterance::now(Speaker::User, input.trim().to_owned());
        let reply = Utterance::now(Speaker::Assistant, select_response(input, rng).to_owned());
        self.utterances.push(user.clone());
        self.utterances.push(reply.clone());
        (user, reply)
    }
}

#[cfg(test)]
#[path = "tutor_test.rs"]
mod tests;
