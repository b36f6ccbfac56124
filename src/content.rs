use chrono::{DateTime, Datelike};

pub const NAME: &str = "DYLAN EWE";
pub const DISPLAY_NAME: &str = "Dylan Ewe";
pub const TITLE: &str = "SOFTWARE ENGINEER";
pub const PROFILE_IMAGE: &str = "https://images.unsplash.com/photo-1752859951149-7d3fc700a7ec?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxwcm9mZXNzaW9uYWwlMjBkZXZlbG9wZXIlMjBwb3J0cmFpdHxlbnwxfHx8fDE3NjMxMjU5NDd8MA&ixlib=rb-4.1.0&q=80&w=1080";

pub static ABOUT: [&str; 3] = [
    "I'm a recent graduate from UW-Madison with a passion for backend and AI systems. I'm proficient in Golang and NodeJS, and have solid experience building cloud infrastructure and microservices architectures.",
    "My focus is on creating scalable, efficient systems and exploring the intersection of traditional backend development with modern AI technologies.",
    "Outside of coding, I enjoy cooking, playing games, and working out to stay balanced and energized.",
];

pub struct Interest {
    pub icon: &'static str,
    pub label: &'static str,
}

pub static INTERESTS: [Interest; 4] = [
    Interest { icon: "🧠", label: "AI/ML" },
    Interest { icon: "🍳", label: "Cooking" },
    Interest { icon: "🎮", label: "Gaming" },
    Interest { icon: "🏋", label: "Working Out" },
];

pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
}

pub struct SkillCategory {
    pub category: &'static str,
    pub skills: [Skill; 3],
}

pub static SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        category: "Backend & Languages",
        skills: [
            Skill { name: "Go", percentage: 90 },
            Skill { name: "Python", percentage: 85 },
            Skill { name: "NodeJS", percentage: 88 },
        ],
    },
    SkillCategory {
        category: "Infrastructure & DevOps",
        skills: [
            Skill { name: "Docker", percentage: 90 },
            Skill { name: "Kubernetes", percentage: 85 },
            Skill { name: "Azure", percentage: 80 },
        ],
    },
    SkillCategory {
        category: "Data Storage",
        skills: [
            Skill { name: "Redis", percentage: 85 },
            Skill { name: "MongoDB", percentage: 82 },
            Skill { name: "PostgreSQL", percentage: 80 },
        ],
    },
    SkillCategory {
        category: "APIs & Architecture",
        skills: [
            Skill { name: "REST API", percentage: 90 },
            Skill { name: "GraphQL", percentage: 85 },
            Skill { name: "gRPC", percentage: 88 },
        ],
    },
    SkillCategory {
        category: "AI & Development Tools",
        skills: [
            Skill { name: "Claude Code", percentage: 85 },
            Skill { name: "Git", percentage: 90 },
            Skill { name: "MCPs", percentage: 80 },
        ],
    },
];

pub struct Job {
    pub year: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub is_current: bool,
}

// newest first
pub static EXPERIENCE: [Job; 4] = [
    Job {
        year: "2024",
        company: "Tech Innovations Inc.",
        role: "Senior Software Engineer",
        duration: "2024 - Present",
        description: "Leading backend infrastructure development, architecting microservices with Go and Kubernetes. Optimized system performance by 40% through distributed caching strategies.",
        is_current: true,
    },
    Job {
        year: "2022",
        company: "CloudScale Solutions",
        role: "Software Engineer",
        duration: "2022 - 2024",
        description: "Developed RESTful and GraphQL APIs serving millions of requests daily. Implemented CI/CD pipelines reducing deployment time by 60%.",
        is_current: false,
    },
    Job {
        year: "2020",
        company: "DataFlow Systems",
        role: "Backend Developer",
        duration: "2020 - 2022",
        description: "Built real-time data processing pipelines using Kafka and Python. Designed database schemas and optimized query performance for large-scale applications.",
        is_current: false,
    },
    Job {
        year: "2019",
        company: "StartupLab",
        role: "Junior Developer",
        duration: "2019 - 2020",
        description: "Contributed to full-stack development of web applications. Gained experience in modern development practices and agile methodologies.",
        is_current: false,
    },
];

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub thumbnail: &'static str,
    pub border_color: &'static str,
    pub demo_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "1",
        title: "Distributed Cache System",
        short_description: "High-performance caching layer using Redis and Go for microservices architecture",
        full_description: "Built a distributed caching system that reduced database load by 70% and improved API response times by 45%. Implemented cache invalidation strategies, pub/sub patterns, and horizontal scaling capabilities. Handles over 100k requests per second with sub-millisecond latency.",
        tech_stack: &["Go", "Redis", "Docker", "Kubernetes"],
        thumbnail: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=300",
        border_color: "var(--neon-cyan)",
        demo_url: Some("#"),
        github_url: Some("#"),
    },
    Project {
        id: "2",
        title: "Real-time Analytics Pipeline",
        short_description: "Stream processing system for analyzing user behavior data in real-time",
        full_description: "Developed a scalable analytics pipeline using Kafka and Python that processes millions of events daily. Implemented real-time aggregations, anomaly detection, and custom metrics. Reduced data processing time from hours to seconds with stream processing architecture.",
        tech_stack: &["Python", "Kafka", "PostgreSQL", "Grafana"],
        thumbnail: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=300",
        border_color: "var(--neon-purple)",
        demo_url: None,
        github_url: Some("#"),
    },
    Project {
        id: "3",
        title: "GraphQL API Gateway",
        short_description: "Unified API gateway aggregating multiple microservices with GraphQL",
        full_description: "Created a centralized GraphQL gateway that simplified client integrations by providing a single endpoint for multiple backend services. Implemented schema stitching, batching, and caching strategies. Reduced API calls by 60% and improved developer experience significantly.",
        tech_stack: &["NodeJS", "GraphQL", "Apollo", "Docker"],
        thumbnail: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=300",
        border_color: "var(--glitch-pink)",
        demo_url: Some("#"),
        github_url: Some("#"),
    },
    Project {
        id: "4",
        title: "Kubernetes Operator",
        short_description: "Custom K8s operator for automated database backup and recovery",
        full_description: "Designed a Kubernetes operator that automates database backup, restoration, and monitoring tasks. Implemented custom resource definitions (CRDs) and reconciliation loops. Reduced operational overhead by 80% and eliminated manual intervention in backup processes.",
        tech_stack: &["Go", "Kubernetes", "Helm", "PostgreSQL"],
        thumbnail: "https://images.unsplash.com/photo-1667372393119-3d4c48d07fc9?w=300",
        border_color: "var(--glitch-green)",
        demo_url: None,
        github_url: Some("#"),
    },
    Project {
        id: "5",
        title: "CI/CD Automation Platform",
        short_description: "Self-service deployment platform with automated testing and rollbacks",
        full_description: "Built an internal platform that streamlined the deployment process across 50+ microservices. Integrated automated testing, canary deployments, and instant rollback capabilities. Reduced deployment time from 2 hours to 15 minutes while improving reliability.",
        tech_stack: &["Python", "GitHub Actions", "Terraform", "Azure"],
        thumbnail: "https://images.unsplash.com/photo-1618401471353-b98afee0b2eb?w=300",
        border_color: "var(--neon-cyan)",
        demo_url: Some("#"),
        github_url: None,
    },
    Project {
        id: "6",
        title: "Serverless Event System",
        short_description: "Event-driven architecture using serverless functions and message queues",
        full_description: "Architected a serverless event processing system that handles asynchronous workflows at scale. Implemented dead-letter queues, retry mechanisms, and event sourcing patterns. Achieved 99.99% uptime while reducing infrastructure costs by 40%.",
        tech_stack: &["NodeJS", "Azure Functions", "Kafka", "Redis"],
        thumbnail: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=300",
        border_color: "var(--neon-purple)",
        demo_url: None,
        github_url: Some("#"),
    },
];

pub struct Social {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub static SOCIALS: [Social; 2] = [
    Social {
        label: "GitHub",
        icon: "devicon-github-plain",
        href: "https://github.com",
    },
    Social {
        label: "LinkedIn",
        icon: "devicon-linkedin-plain",
        href: "https://linkedin.com",
    },
];

const FALLBACK_YEAR: i32 = 2025;

/// Year of the build, stamped by build.rs.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME"))
}

fn year_of(timestamp: &str) -> i32 {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.year())
        .unwrap_or(FALLBACK_YEAR)
}
