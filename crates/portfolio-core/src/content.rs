//! Portfolio content. Everything here is fixed at build time.

/// An image by URL plus the text shown if it fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
}

pub struct Profile {
    pub full_name: &'static str,
    pub first_name: &'static str,
    pub tagline: &'static str,
    pub portrait: ImageRef,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub fn profile() -> Profile {
    Profile {
        full_name: "Mausami Joshi",
        first_name: "Mausami",
        tagline: "Motivated BCA student seeking an internship to apply technical skills and gain hands-on experience in real-world projects.",
        portrait: ImageRef {
            src: "/assets/Mausami.jpg",
            alt: "Mausami",
        },
        github: "https://github.com/Mausami-joshi",
        linkedin: "https://www.linkedin.com/in/MausamiJoshi/",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill {
            name: "HTML",
            icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/html5/html5-original.svg",
        },
        Skill {
            name: "CSS",
            icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/css3/css3-original.svg",
        },
        Skill {
            name: "Laravel",
            icon: "https://upload.wikimedia.org/wikipedia/commons/9/9a/Laravel.svg",
        },
        Skill {
            name: "Figma",
            icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/figma/figma-original.svg",
        },
        Skill {
            name: "REST API",
            icon: "/assets/skills/rest-api.png",
        },
        Skill {
            name: "Postman",
            icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postman/postman-original.svg",
        },
        Skill {
            name: "Python",
            icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
        },
        Skill {
            name: "PHP",
            icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/php/php-original.svg",
        },
        Skill {
            name: "JavaScript",
            icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/javascript/javascript-original.svg",
        },
        Skill {
            name: "MySQL",
            icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mysql/mysql-original.svg",
        },
        Skill {
            name: "Java",
            icon: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/java/java-original.svg",
        },
        Skill {
            name: "C",
            icon: "https://img.icons8.com/color/48/000000/c-programming.png",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Display order matters
    pub tags: &'static [&'static str],
    pub image: ImageRef,
    pub link: &'static str,
}

pub fn projects() -> Vec<Project> {
    vec![Project {
        id: 1,
        title: "Event Management Website",
        description: "A complete event management website project hosted on GitHub.",
        tags: &["Laravel", "Js", "MySql"],
        image: ImageRef {
            src: "/assets/Event.jpeg",
            alt: "Event Management Website",
        },
        link: "https://github.com/Mausami-joshi/Event-Management-Website",
    }]
}

pub struct Internship {
    pub company: &'static str,
    pub role: &'static str,
    pub responsibilities: &'static [&'static str],
}

pub fn internship() -> Internship {
    Internship {
        company: "Inlancer Technologies LLP",
        role: "Laravel Development Intern",
        responsibilities: &[
            "Developed and maintained Laravel-based web applications.",
            "Created RESTful APIs for mobile/web integration.",
            "Designed Blade-based UI with Bootstrap support.",
            "Wrote database queries and handled Eloquent ORM relationships.",
            "Handled CRUD operations and migrations.",
            "Integrated Laravel Sanctum for secure API authentication.",
            "Collaborated with team using Git and GitHub.",
            "Tested and debugged applications using Postman and Laravel's logs.",
        ],
    }
}

/// A single bulleted line with a leading emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub emoji: &'static str,
    pub text: &'static str,
}

pub fn certifications() -> Vec<Highlight> {
    vec![
        Highlight {
            emoji: "\u{1F3C6}",
            text: "Black Out Treasure Hunt \u{2013} 2nd Rank across Rajkot Universities (Cyber Security Protectors 2025)",
        },
        Highlight {
            emoji: "\u{1F393}",
            text: "Academic Excellence \u{2013} Atmiya University, Semester 1 (2023-2024)",
        },
        Highlight {
            emoji: "\u{1F4CA}",
            text: "Tally ERP 9 \u{2013} 95% (A+ grade, 2021)",
        },
        Highlight {
            emoji: "\u{1F4BB}",
            text: "Java Programming \u{2013} Great Learning Online Platform",
        },
        Highlight {
            emoji: "\u{1F40D}",
            text: "Python for Beginners \u{2013} Great Learning Online Platform",
        },
    ]
}

pub fn achievements() -> Vec<Highlight> {
    vec![
        Highlight {
            emoji: "\u{1F3C6}",
            text: "Participated in State-level Student Synopsis Competitions",
        },
        Highlight {
            emoji: "\u{1F3C6}",
            text: "Participated in CVM University Hackathon 2025",
        },
        Highlight {
            emoji: "\u{1F3C6}",
            text: "Participated in Black Out Treasure Hunt Organized by Cyber Security Protectors",
        },
    ]
}

pub fn strengths() -> Vec<Highlight> {
    vec![
        Highlight {
            emoji: "\u{26A1}",
            text: "Quick learner with a passion for technology",
        },
        Highlight {
            emoji: "\u{1F9E0}",
            text: "Strong problem-solving and analytical skills",
        },
        Highlight {
            emoji: "\u{1F4AC}",
            text: "Excellent communication skills",
        },
    ]
}

pub struct EducationEntry {
    pub qualification: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            qualification: "Bachelor of Computer Applications (BCA)",
            institution: "Atmiya University, Rajkot",
            period: "2023 - Expected 2026",
        },
        EducationEntry {
            qualification: "Higher Secondary Certificate (HSC)",
            institution: "Arjun English Medium High School, GSEB",
            period: "2022 - 2023",
        },
        EducationEntry {
            qualification: "Secondary School Certificate (SSC)",
            institution: "Bhavan\u{2019}s Shri A.K. Doshi Vidyalaya, GSEB",
            period: "2020 - 2021",
        },
    ]
}

pub struct ContactInfo {
    pub email: &'static str,
    pub phone_display: &'static str,
    /// E.164 form used in the `tel:` link
    pub phone: &'static str,
    pub address: &'static str,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

pub fn contact() -> ContactInfo {
    ContactInfo {
        email: "mausamijoshi40@gmail.com",
        phone_display: "+91 9016083104",
        phone: "+919016083104",
        address: "Satyasai Road, Rajkot-361001",
    }
}

pub const ABOUT: &str = "I specialize in Laravel, JS, Python and modern web technologies. I aim to combine clean code, intuitive UI, and practical solutions to deliver seamless user experiences in every project I work on.";
