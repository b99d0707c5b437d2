//! Static copy for the landing and courses pages.

pub struct Highlight {
    pub glyph: &'static str,
    pub tone: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub struct NavButton {
    pub href: &'static str,
    pub glyph: &'static str,
    pub label: &'static str,
    pub primary: bool,
}

pub struct Stat {
    pub count: &'static str,
    pub label: &'static str,
    pub tone: &'static str,
}

pub struct Course {
    pub title: &'static str,
    pub level: &'static str,
    pub duration: &'static str,
    pub summary: &'static str,
    pub topics: &'static [&'static str],
}

pub const FEATURES: [Highlight; 3] = [
    Highlight {
        glyph: "\u{1F3AF}",
        tone: "blue",
        title: "Smart Matching",
        text: "AI-powered algorithms connect you with the perfect opportunities based on your skills and goals.",
    },
    Highlight {
        glyph: "\u{1F6E1}",
        tone: "purple",
        title: "Trusted Network",
        text: "Verified professionals and companies ensuring quality connections and opportunities.",
    },
    Highlight {
        glyph: "\u{26A1}",
        tone: "green",
        title: "Real-time Updates",
        text: "Stay ahead with instant notifications about new opportunities and industry trends.",
    },
];

pub const NAV_BUTTONS: [NavButton; 3] = [
    NavButton {
        href: "/jobs",
        glyph: "\u{1F4BC}",
        label: "Explore Careers",
        primary: true,
    },
    NavButton {
        href: "/events",
        glyph: "\u{1F4C5}",
        label: "Join Events",
        primary: false,
    },
    NavButton {
        href: "/courses",
        glyph: "\u{1F393}",
        label: "Learn & Grow",
        primary: false,
    },
];

pub const STATS: [Stat; 4] = [
    Stat {
        count: "15K+",
        label: "AI Professionals",
        tone: "green",
    },
    Stat {
        count: "2K+",
        label: "Job Opportunities",
        tone: "blue",
    },
    Stat {
        count: "500+",
        label: "Events Hosted",
        tone: "purple",
    },
    Stat {
        count: "50+",
        label: "Countries",
        tone: "orange",
    },
];

pub const PILLARS: [Highlight; 4] = [
    Highlight {
        glyph: "\u{1F310}",
        tone: "blue",
        title: "Global Reach",
        text: "Connect with AI professionals worldwide",
    },
    Highlight {
        glyph: "\u{2B50}",
        tone: "green",
        title: "Quality First",
        text: "Curated opportunities from top companies",
    },
    Highlight {
        glyph: "\u{26A1}",
        tone: "purple",
        title: "Fast Growth",
        text: "Accelerate your AI career journey",
    },
    Highlight {
        glyph: "\u{1F465}",
        tone: "orange",
        title: "Community",
        text: "Learn and grow with peers",
    },
];

pub const COURSES: [Course; 4] = [
    Course {
        title: "Foundations of Machine Learning",
        level: "Beginner",
        duration: "6 weeks",
        summary: "Supervised and unsupervised learning from first principles, with hands-on notebooks.",
        topics: &["Regression", "Classification", "Clustering", "Model evaluation"],
    },
    Course {
        title: "Building with Large Language Models",
        level: "Intermediate",
        duration: "4 weeks",
        summary: "Prompting, retrieval and tool use for production LLM features.",
        topics: &["Prompt design", "Retrieval", "Agents", "Evaluation"],
    },
    Course {
        title: "Deep Learning in Practice",
        level: "Intermediate",
        duration: "8 weeks",
        summary: "Train, debug and ship neural networks for vision and language tasks.",
        topics: &["CNNs", "Transformers", "Fine-tuning", "Deployment"],
    },
    Course {
        title: "AI Product Management",
        level: "All levels",
        duration: "3 weeks",
        summary: "Scope, measure and launch AI-powered products with confidence.",
        topics: &["Discovery", "Metrics", "Responsible AI", "Roadmaps"],
    },
];
