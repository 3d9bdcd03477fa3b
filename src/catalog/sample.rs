//! Built-in sample catalog.
//!
//! Used when no catalog file is configured, and as the feed fallback.

use crate::models::{Author, Category, Mentor, Project, Student};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(id: &str, name: &str, slug: &str, icon: &str, color: &str, count: u32) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        slug: slug.into(),
        icon: icon.into(),
        color: color.into(),
        project_count: count,
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category("1", "Web Development", "web-development", "code", "blue", 124),
        category("2", "Mobile Apps", "mobile-apps", "smartphone", "green", 86),
        category("3", "AI/ML", "ai-ml", "brain", "purple", 97),
        category("4", "Data Science", "data-science", "bar-chart", "orange", 64),
        category("5", "Cybersecurity", "cybersecurity", "shield", "red", 41),
        category("6", "Game Development", "game-development", "gamepad", "pink", 38),
        category("7", "IoT", "iot", "cpu", "teal", 29),
    ]
}

pub fn mentors() -> Vec<Mentor> {
    vec![
        Mentor {
            id: "1".into(),
            name: "Dr. Sarah Johnson".into(),
            position: "Professor".into(),
            field: "AI/ML".into(),
            email: "sarah.johnson@university.edu".into(),
            image: "/mentors/sarah-johnson.jpg".into(),
            research: strings(&[
                "Deep Learning",
                "Computer Vision",
                "Natural Language Processing",
            ]),
            achievements: strings(&[
                "Best Paper Award, NeurIPS 2023",
                "Published 50+ research papers",
            ]),
            linkedin_url: "https://linkedin.com/in/sarahjohnson".into(),
            github_url: "https://github.com/sarahjohnson".into(),
        },
        Mentor {
            id: "2".into(),
            name: "Prof. Michael Chen".into(),
            position: "Associate Professor".into(),
            field: "Web Development".into(),
            email: "michael.chen@university.edu".into(),
            image: "/mentors/michael-chen.jpg".into(),
            research: strings(&[
                "Progressive Web Apps",
                "Frontend Performance",
                "Cloud Architecture",
            ]),
            achievements: strings(&[
                "Google Developer Expert",
                "Open source contributor to React",
            ]),
            linkedin_url: "https://linkedin.com/in/michaelchen".into(),
            github_url: "https://github.com/michaelchen".into(),
        },
        Mentor {
            id: "3".into(),
            name: "Dr. Emily Rodriguez".into(),
            position: "Assistant Professor".into(),
            field: "Cybersecurity".into(),
            email: "emily.rodriguez@university.edu".into(),
            image: "/mentors/emily-rodriguez.jpg".into(),
            research: strings(&["Network Security", "Cryptography", "Blockchain"]),
            achievements: strings(&["CISSP Certified", "NSF CAREER Award"]),
            linkedin_url: "https://linkedin.com/in/emilyrodriguez".into(),
            github_url: "https://github.com/emilyrodriguez".into(),
        },
        Mentor {
            id: "4".into(),
            name: "Dr. James Wilson".into(),
            position: "Professor".into(),
            field: "Data Science".into(),
            email: "james.wilson@university.edu".into(),
            image: "/mentors/james-wilson.jpg".into(),
            research: strings(&[
                "Big Data Analytics",
                "Statistical Learning",
                "Data Visualization",
            ]),
            achievements: strings(&["IEEE Fellow", "Author of Practical Data Science"]),
            linkedin_url: "https://linkedin.com/in/jameswilson".into(),
            github_url: "https://github.com/jameswilson".into(),
        },
    ]
}

pub fn students() -> Vec<Student> {
    vec![
        Student {
            id: "1".into(),
            name: "Alex Kumar".into(),
            course: "B.Tech Computer Science".into(),
            skills: strings(&["React", "Node.js", "Python", "MongoDB"]),
            image: "/students/alex-kumar.jpg".into(),
            project_count: 5,
            linkedin_url: "https://linkedin.com/in/alexkumar".into(),
            github_url: "https://github.com/alexkumar".into(),
        },
        Student {
            id: "2".into(),
            name: "Jessica Wang".into(),
            course: "M.Tech AI & ML".into(),
            skills: strings(&["Python", "TensorFlow", "PyTorch", "Computer Vision"]),
            image: "/students/jessica-wang.jpg".into(),
            project_count: 8,
            linkedin_url: "https://linkedin.com/in/jessicawang".into(),
            github_url: "https://github.com/jessicawang".into(),
        },
        Student {
            id: "3".into(),
            name: "Ryan Patel".into(),
            course: "B.Tech Information Technology".into(),
            skills: strings(&["Java", "Spring Boot", "AWS", "Docker"]),
            image: "/students/ryan-patel.jpg".into(),
            project_count: 3,
            linkedin_url: "https://linkedin.com/in/ryanpatel".into(),
            github_url: "https://github.com/ryanpatel".into(),
        },
        Student {
            id: "4".into(),
            name: "Maya Singh".into(),
            course: "BCA".into(),
            skills: strings(&["Flutter", "Dart", "Firebase", "UI/UX Design"]),
            image: "/students/maya-singh.jpg".into(),
            project_count: 4,
            linkedin_url: "https://linkedin.com/in/mayasingh".into(),
            github_url: "https://github.com/mayasingh".into(),
        },
    ]
}

/// The three projects shown when the remote feed is unavailable.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "AI-Powered Study Assistant".into(),
            description: "An intelligent tutoring app that adapts to each student's learning pace"
                .into(),
            tags: strings(&["AI", "Python", "React"]),
            author: Author {
                name: "Jessica Wang".into(),
                image: Some("/students/jessica-wang.jpg".into()),
            },
            github_url: "https://github.com/jessicawang/study-assistant".into(),
            live_url: "https://study-assistant.example.com".into(),
            images: strings(&["/projects/study-assistant.png"]),
            video: None,
            created_at: None,
        },
        Project {
            id: "2".into(),
            title: "Campus Marketplace".into(),
            description:
                "A peer-to-peer marketplace for buying and selling textbooks and supplies".into(),
            tags: strings(&["Next.js", "MongoDB", "Stripe"]),
            author: Author {
                name: "Alex Kumar".into(),
                image: Some("/students/alex-kumar.jpg".into()),
            },
            github_url: "https://github.com/alexkumar/campus-marketplace".into(),
            live_url: "https://marketplace.example.com".into(),
            images: Vec::new(),
            video: None,
            created_at: None,
        },
        Project {
            id: "3".into(),
            title: "Smart Attendance System".into(),
            description: "Face-recognition attendance tracking for classrooms".into(),
            tags: strings(&["OpenCV", "Flask", "IoT"]),
            author: Author {
                name: "Ryan Patel".into(),
                image: None,
            },
            github_url: "https://github.com/ryanpatel/smart-attendance".into(),
            live_url: String::new(),
            images: Vec::new(),
            video: Some("https://video.example.com/smart-attendance".into()),
            created_at: None,
        },
    ]
}
