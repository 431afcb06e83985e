//! Role-gated dashboard summaries.
//!
//! The dashboards are pure presentation in the original; this route only
//! assembles the mock data each role's view renders. Course progress for the
//! seeded course is derived live from the catalog, everything else is fixed.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::routes::auth::AuthUser;
use crate::services::auth::UserRole;
use crate::services::progress;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CourseProgressCard {
    pub course_id: &'static str,
    pub title: &'static str,
    pub progress: u32,
    pub last_accessed: &'static str,
}

#[derive(Serialize)]
pub struct ChildSummary {
    pub name: &'static str,
    pub age: u8,
    pub level: u8,
    pub courses: u8,
    pub recent_progress: u32,
    pub recent_activity: &'static str,
}

#[derive(Serialize)]
pub struct ClassSummary {
    pub title: &'static str,
    pub students: u32,
    pub schedule: &'static str,
}

#[derive(Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Dashboard {
    Student { name: String, recent_courses: Vec<CourseProgressCard> },
    Parent { name: String, children: Vec<ChildSummary> },
    Teacher { name: String, classes: Vec<ClassSummary> },
}

/// `GET /api/dashboard` — summary for the logged-in user's role.
pub async fn dashboard(State(state): State<AppState>, auth: AuthUser) -> Json<Dashboard> {
    let dashboard = match auth.user.role {
        UserRole::Student => {
            // course1 progress comes from the lesson flags; the rest of the
            // cards carry the demo's fixed numbers.
            let course1 = progress::progress_percent(&state.catalog.course_lessons("course1"));
            Dashboard::Student {
                name: auth.user.name,
                recent_courses: vec![
                    CourseProgressCard {
                        course_id: "course1",
                        title: "Quran Reading Basics",
                        progress: course1,
                        last_accessed: "2 days ago",
                    },
                    CourseProgressCard {
                        course_id: "course2",
                        title: "Islamic Etiquettes",
                        progress: 40,
                        last_accessed: "Yesterday",
                    },
                    CourseProgressCard {
                        course_id: "course3",
                        title: "Arabic Alphabet",
                        progress: 85,
                        last_accessed: "Today",
                    },
                ],
            }
        }
        UserRole::Parent => Dashboard::Parent {
            name: auth.user.name,
            children: vec![
                ChildSummary {
                    name: "Yusuf",
                    age: 10,
                    level: 2,
                    courses: 3,
                    recent_progress: 72,
                    recent_activity: "Completed Surah Al-Fatiha lesson",
                },
                ChildSummary {
                    name: "Maryam",
                    age: 8,
                    level: 1,
                    courses: 2,
                    recent_progress: 45,
                    recent_activity: "Started Arabic Alphabet course",
                },
            ],
        },
        UserRole::Teacher => Dashboard::Teacher {
            name: auth.user.name,
            classes: vec![
                ClassSummary { title: "Tajweed Rules Practice", students: 12, schedule: "Tomorrow, 4:00 PM" },
                ClassSummary {
                    title: "Surah Al-Fatiha Memorization",
                    students: 8,
                    schedule: "Friday, 5:30 PM",
                },
            ],
        },
    };

    Json(dashboard)
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
