//! Static course catalog.
//!
//! DESIGN
//! ======
//! The catalog is a fixed, build-time data set: eight courses across three
//! subjects, with the full lesson list seeded for the Quran Reading Basics
//! course. There is no query engine — lookups are linear scans and filtering
//! is a pure predicate over the in-memory slice, which is acceptable because
//! the data set is small and never grows at runtime.

use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// Difficulty level of a course, 1 through 4.
pub type Level = u8;

/// Human-readable name for a level number.
#[must_use]
pub fn level_name(level: Level) -> &'static str {
    match level {
        1 => "Beginner",
        2 => "Foundation",
        3 => "Intermediate",
        4 => "Advanced",
        _ => "Unknown",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: &'static str,
    pub size: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Instructor {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: &'static str,
    pub course_id: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub resources: Vec<Resource>,
    pub completed: bool,
    pub next_lesson_id: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub level: Level,
    pub subject: &'static str,
    pub duration: &'static str,
    pub lesson_count: u32,
    pub enrolled: u32,
    pub rating: f64,
    pub skills: Vec<&'static str>,
    pub prerequisites: &'static str,
    pub objectives: Vec<&'static str>,
    pub instructors: Vec<Instructor>,
    pub resources: Vec<Resource>,
}

// =============================================================================
// FILTER
// =============================================================================

/// Course filter: all present predicates are ANDed.
///
/// Search matches title or description, case-insensitive; level and subject
/// are exact-equality matches. An absent field means "all".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    pub search: Option<String>,
    pub level: Option<Level>,
    pub subject: Option<String>,
}

impl CourseFilter {
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|term| {
            let term = term.to_lowercase();
            course.title.to_lowercase().contains(&term) || course.description.to_lowercase().contains(&term)
        });
        let matches_level = self.level.is_none_or(|level| course.level == level);
        let matches_subject = self
            .subject
            .as_deref()
            .is_none_or(|subject| course.subject == subject);

        matches_search && matches_level && matches_subject
    }
}

// =============================================================================
// CATALOG
// =============================================================================

pub struct Catalog {
    courses: Vec<Course>,
    lessons: Vec<Lesson>,
}

impl Catalog {
    /// Build the seeded catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self { courses: seed_courses(), lessons: seed_lessons() }
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Courses matching the filter, in catalog order.
    #[must_use]
    pub fn filter_courses(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }

    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    /// Lessons of one course, in curriculum order.
    #[must_use]
    pub fn course_lessons(&self, course_id: &str) -> Vec<&Lesson> {
        self.lessons
            .iter()
            .filter(|l| l.course_id == course_id)
            .collect()
    }
}

// =============================================================================
// SEED DATA
// =============================================================================

fn seed_courses() -> Vec<Course> {
    vec![
        Course {
            id: "course1",
            title: "Quran Reading Basics",
            description: "Learn the fundamental rules of reading the Quran with proper pronunciation.",
            level: 1,
            subject: "Quran",
            duration: "8 weeks",
            lesson_count: 16,
            enrolled: 120,
            rating: 4.8,
            skills: vec!["Quranic Arabic", "Letter Recognition", "Basic Tajweed", "Reading Practice"],
            prerequisites: "None - suitable for absolute beginners",
            objectives: vec![
                "Recognize and pronounce all Arabic letters correctly",
                "Read words with proper vowel marks",
                "Understand basic Tajweed rules",
                "Build confidence in reading simple Quranic verses",
            ],
            instructors: vec![Instructor {
                id: "teacher1",
                name: "Umar Abdullah",
                role: "Quran Teacher",
                bio: "Certified Quran teacher with 10+ years of experience teaching children and adults.",
            }],
            resources: vec![
                Resource { id: "resource1", title: "Arabic Alphabet Chart", kind: "PDF", size: "1.2 MB" },
                Resource { id: "resource2", title: "Letter Pronunciation Guide", kind: "Audio", size: "15 MB" },
                Resource { id: "resource3", title: "Practice Workbook", kind: "PDF", size: "3.5 MB" },
            ],
        },
        Course {
            id: "course2",
            title: "Islamic Etiquettes",
            description: "Discover the beautiful manners and etiquettes taught in Islam for daily life.",
            level: 1,
            subject: "Islamic Studies",
            duration: "6 weeks",
            lesson_count: 12,
            enrolled: 85,
            rating: 4.6,
            skills: vec![],
            prerequisites: "None",
            objectives: vec![],
            instructors: vec![],
            resources: vec![],
        },
        Course {
            id: "course3",
            title: "Arabic Alphabet",
            description: "Master the Arabic alphabet and basic vocabulary with fun interactive lessons.",
            level: 1,
            subject: "Arabic",
            duration: "4 weeks",
            lesson_count: 8,
            enrolled: 150,
            rating: 4.9,
            skills: vec![],
            prerequisites: "None",
            objectives: vec![],
            instructors: vec![],
            resources: vec![],
        },
        Course {
            id: "course4",
            title: "Tajweed Rules",
            description: "Learn the rules of Tajweed to perfect your Quranic recitation.",
            level: 2,
            subject: "Quran",
            duration: "10 weeks",
            lesson_count: 20,
            enrolled: 95,
            rating: 4.7,
            skills: vec![],
            prerequisites: "Quran Reading Basics or equivalent",
            objectives: vec![],
            instructors: vec![],
            resources: vec![],
        },
        Course {
            id: "course5",
            title: "Prophets' Stories",
            description: "Explore the inspiring stories of the prophets mentioned in the Quran.",
            level: 2,
            subject: "Islamic Studies",
            duration: "12 weeks",
            lesson_count: 24,
            enrolled: 110,
            rating: 4.9,
            skills: vec![],
            prerequisites: "None",
            objectives: vec![],
            instructors: vec![],
            resources: vec![],
        },
        Course {
            id: "course6",
            title: "Arabic Grammar Basics",
            description: "Introduction to Arabic grammar rules and sentence structure.",
            level: 2,
            subject: "Arabic",
            duration: "8 weeks",
            lesson_count: 16,
            enrolled: 75,
            rating: 4.5,
            skills: vec![],
            prerequisites: "Arabic Alphabet",
            objectives: vec![],
            instructors: vec![],
            resources: vec![],
        },
        Course {
            id: "course7",
            title: "Surah Memorization",
            description: "Memorize selected surahs from Juz Amma with proper Tajweed.",
            level: 3,
            subject: "Quran",
            duration: "16 weeks",
            lesson_count: 32,
            enrolled: 90,
            rating: 4.8,
            skills: vec![],
            prerequisites: "Tajweed Rules",
            objectives: vec![],
            instructors: vec![],
            resources: vec![],
        },
        Course {
            id: "course8",
            title: "Islamic History",
            description: "Learn about the early Islamic history and the lives of the companions.",
            level: 3,
            subject: "Islamic Studies",
            duration: "14 weeks",
            lesson_count: 28,
            enrolled: 80,
            rating: 4.7,
            skills: vec![],
            prerequisites: "None",
            objectives: vec![],
            instructors: vec![],
            resources: vec![],
        },
    ]
}

fn seed_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: "lesson1-1",
            course_id: "course1",
            title: "Introduction to the Quran",
            duration: "30 minutes",
            description: "Learn about the significance and structure of the Holy Quran.",
            content: "The Quran is the central religious text of Islam, divided into 114 surahs \
                      (chapters) and 6,236 ayat (verses), further grouped into 30 juz of roughly \
                      equal length. Learning to read it begins with the Arabic alphabet, vowel \
                      marks (harakaat), and the pronunciation rules of tajweed.",
            resources: vec![
                Resource { id: "resource1-1", title: "Introduction to Quran PDF", kind: "PDF", size: "2.3 MB" },
                Resource {
                    id: "resource1-2",
                    title: "Structure of the Quran - Infographic",
                    kind: "Image",
                    size: "1.1 MB",
                },
            ],
            completed: true,
            next_lesson_id: Some("lesson1-2"),
        },
        Lesson {
            id: "lesson1-2",
            course_id: "course1",
            title: "Arabic Alphabet - Part 1",
            duration: "45 minutes",
            description: "Introduction to the first set of Arabic letters.",
            content: "The Arabic alphabet has 28 letters, written and read from right to left. \
                      Letters change form depending on their position in a word, and most connect \
                      to each other. This lesson covers the first fourteen letters, from Alif to \
                      Khaa.",
            resources: vec![
                Resource { id: "resource2-1", title: "Arabic Alphabet Chart - Part 1", kind: "PDF", size: "1.5 MB" },
                Resource { id: "resource2-2", title: "Letter Pronunciation Audio", kind: "Audio", size: "8.2 MB" },
            ],
            completed: true,
            next_lesson_id: Some("lesson1-3"),
        },
        Lesson {
            id: "lesson1-3",
            course_id: "course1",
            title: "Arabic Alphabet - Part 2",
            duration: "45 minutes",
            description: "Learn the remaining Arabic letters and their pronunciations.",
            content: "This lesson completes the alphabet with the second set of letters, from Dal \
                      to Sad, and introduces connecting letters into simple words such as Bism, \
                      Kitab, and Qalam.",
            resources: vec![
                Resource { id: "resource3-1", title: "Complete Arabic Alphabet Chart", kind: "PDF", size: "2.0 MB" },
                Resource { id: "resource3-2", title: "Letter Connections Guide", kind: "PDF", size: "1.8 MB" },
            ],
            completed: true,
            next_lesson_id: Some("lesson1-4"),
        },
        Lesson {
            id: "lesson1-4",
            course_id: "course1",
            title: "Vowel Marks (Harakaat)",
            duration: "40 minutes",
            description: "Understanding Fatha, Kasra, and Damma.",
            content: "The three main vowel marks give sound to the letters: fatha (a), kasra (i), \
                      and damma (u). Sukoon marks the absence of a vowel. With these, simple words \
                      like Kataba and Qalamun become readable.",
            resources: vec![
                Resource { id: "resource4-1", title: "Vowel Marks Guide", kind: "PDF", size: "1.6 MB" },
                Resource { id: "resource4-2", title: "Pronunciation Practice Audio", kind: "Audio", size: "10.5 MB" },
            ],
            completed: false,
            next_lesson_id: Some("lesson1-5"),
        },
        Lesson {
            id: "lesson1-5",
            course_id: "course1",
            title: "Connecting Letters",
            duration: "50 minutes",
            description: "Practice joining letters to form words.",
            content: "Lesson content coming soon...",
            resources: vec![],
            completed: false,
            next_lesson_id: Some("lesson1-6"),
        },
        Lesson {
            id: "lesson1-6",
            course_id: "course1",
            title: "Reading Simple Words",
            duration: "45 minutes",
            description: "Start reading basic Quranic words.",
            content: "Lesson content coming soon...",
            resources: vec![],
            completed: false,
            next_lesson_id: None,
        },
    ]
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
