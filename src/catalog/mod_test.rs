use super::*;

fn catalog() -> Catalog {
    Catalog::seed()
}

#[test]
fn seed_has_eight_courses() {
    assert_eq!(catalog().courses().len(), 8);
}

#[test]
fn course_lookup_by_id() {
    let cat = catalog();
    assert_eq!(cat.course("course1").map(|c| c.title), Some("Quran Reading Basics"));
    assert!(cat.course("no-such-course").is_none());
}

#[test]
fn lesson_lookup_by_id() {
    let cat = catalog();
    let lesson = cat.lesson("lesson1-4").expect("seeded lesson");
    assert_eq!(lesson.title, "Vowel Marks (Harakaat)");
    assert!(!lesson.completed);
    assert!(cat.lesson("lesson9-9").is_none());
}

#[test]
fn course_lessons_in_curriculum_order() {
    let cat = catalog();
    let lessons = cat.course_lessons("course1");
    assert_eq!(lessons.len(), 6);
    assert_eq!(lessons[0].id, "lesson1-1");
    assert_eq!(lessons[5].id, "lesson1-6");
    assert_eq!(lessons[5].next_lesson_id, None);
}

#[test]
fn empty_filter_matches_everything() {
    let cat = catalog();
    assert_eq!(cat.filter_courses(&CourseFilter::default()).len(), 8);
}

#[test]
fn filter_predicates_are_anded() {
    let cat = catalog();
    let filter = CourseFilter {
        search: Some("tajweed".to_owned()),
        level: Some(2),
        subject: Some("Quran".to_owned()),
    };
    let matched = cat.filter_courses(&filter);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "course4");
}

#[test]
fn filter_search_is_case_insensitive_over_title_and_description() {
    let cat = catalog();
    let filter = CourseFilter { search: Some("TAJWEED".to_owned()), ..CourseFilter::default() };
    let matched = cat.filter_courses(&filter);
    // "Tajweed Rules" by title, "Quran Reading Basics" excluded (description
    // says "pronunciation", not "tajweed"), "Surah Memorization" by description.
    let ids: Vec<&str> = matched.iter().map(|c| c.id).collect();
    assert!(ids.contains(&"course4"));
    assert!(ids.contains(&"course7"));
    assert!(!ids.contains(&"course1"));
}

#[test]
fn filter_level_is_exact() {
    let cat = catalog();
    let filter = CourseFilter { level: Some(3), ..CourseFilter::default() };
    let matched = cat.filter_courses(&filter);
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|c| c.level == 3));
}

#[test]
fn filter_subject_is_exact_not_substring() {
    let cat = catalog();
    let filter = CourseFilter { subject: Some("Islamic".to_owned()), ..CourseFilter::default() };
    assert!(cat.filter_courses(&filter).is_empty());

    let filter = CourseFilter { subject: Some("Islamic Studies".to_owned()), ..CourseFilter::default() };
    assert_eq!(cat.filter_courses(&filter).len(), 3);
}

#[test]
fn filter_is_idempotent() {
    let cat = catalog();
    let filter = CourseFilter {
        search: Some("tajweed".to_owned()),
        level: Some(2),
        subject: Some("Quran".to_owned()),
    };
    let once: Vec<&str> = cat.filter_courses(&filter).iter().map(|c| c.id).collect();
    let twice: Vec<&str> = cat
        .filter_courses(&filter)
        .into_iter()
        .filter(|c| filter.matches(c))
        .map(|c| c.id)
        .collect();
    assert_eq!(once, twice);
}

#[test]
fn level_names() {
    assert_eq!(level_name(1), "Beginner");
    assert_eq!(level_name(2), "Foundation");
    assert_eq!(level_name(3), "Intermediate");
    assert_eq!(level_name(4), "Advanced");
    assert_eq!(level_name(9), "Unknown");
}
