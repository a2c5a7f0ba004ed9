use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Course {
    id: u32,
    code: String,
    name: String,
    description: String,
    subject: String,
    credits: u32,
    completed: bool,
    semester: String,
    instructor: String,
}

impl Course {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        code: &str,
        name: &str,
        description: &str,
        subject: &str,
        credits: u32,
        completed: bool,
        semester: &str,
        instructor: &str,
    ) -> Self {
        Self {
            id,
            code: code.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            subject: subject.to_owned(),
            credits,
            completed,
            semester: semester.to_owned(),
            instructor: instructor.to_owned(),
        }
    }

    pub fn title(&self) -> String {
        format!("{}: {}", self.code, self.name)
    }

    pub fn status(&self) -> &'static str {
        if self.completed { "Completed" } else { "In Progress" }
    }

    pub fn status_class(&self) -> &'static str {
        if self.completed { "completed" } else { "in-progress" }
    }

    pub fn credits_label(&self) -> String {
        if self.credits == 1 {
            "1 Credit".to_owned()
        } else {
            format!("{} Credits", self.credits)
        }
    }
}

/// Filter applied to the course list.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Wdd,
    Cse,
}

impl CourseFilter {
    pub const ALL: [CourseFilter; 3] = [CourseFilter::All, CourseFilter::Wdd, CourseFilter::Cse];

    pub fn matches(&self, course: &Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Wdd => course.subject == "WDD",
            CourseFilter::Cse => course.subject == "CSE",
        }
    }

    /// Id of the button activating this filter.
    pub fn button_id(&self) -> &'static str {
        match self {
            CourseFilter::All => "all-courses",
            CourseFilter::Wdd => "wdd-courses",
            CourseFilter::Cse => "cse-courses",
        }
    }

    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|course| self.matches(course)).collect()
    }
}

impl FromStr for CourseFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CourseFilter::All),
            "WDD" => Ok(CourseFilter::Wdd),
            "CSE" => Ok(CourseFilter::Cse),
            _ => Err(format!("Unknown course filter: {s}")),
        }
    }
}

pub fn total_credits(courses: &[&Course]) -> u32 {
    courses.iter().map(|course| course.credits).sum()
}

/// Summary shown below the course list, such as `10 (3 courses)`.
pub fn credits_summary(courses: &[&Course]) -> String {
    format!("{} ({} courses)", total_credits(courses), courses.len())
}

/// Courses of the certificate program.
pub fn course_catalog() -> Vec<Course> {
    vec![
        Course::new(
            1,
            "WDD 131",
            "Dynamic Web Fundamentals",
            "Learn the fundamentals of dynamic web development with JavaScript.",
            "WDD",
            3,
            true,
            "Spring 2023",
            "Professor Smith",
        ),
        Course::new(
            2,
            "CSE 121B",
            "JavaScript Language",
            "Advanced JavaScript programming concepts and patterns.",
            "CSE",
            4,
            true,
            "Fall 2022",
            "Professor Johnson",
        ),
        Course::new(
            3,
            "WDD 230",
            "Web Frontend Development I",
            "Introduction to frontend web development with HTML, CSS, and JavaScript.",
            "WDD",
            3,
            true,
            "Winter 2023",
            "Professor Williams",
        ),
        Course::new(
            4,
            "WDD 330",
            "Web Frontend Development II",
            "Advanced frontend development with modern JavaScript frameworks.",
            "WDD",
            3,
            false,
            "Fall 2023",
            "Professor Brown",
        ),
        Course::new(
            5,
            "CSE 341",
            "Web Backend Development",
            "Server-side development with Node.js and databases.",
            "CSE",
            3,
            false,
            "Winter 2024",
            "Professor Davis",
        ),
    ]
}
