//! Identity, contact details, and SEO metadata for the site owner.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Resume {
    pub path: &'static str,
    pub filename: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub summary: &'static [&'static str],
    pub stats: &'static [Stat],
    pub contact: ContactInfo,
    pub social: SocialLinks,
    pub resume: Resume,
    pub highlights: &'static [&'static str],
    pub core_competencies: &'static [&'static str],
}

impl PersonalInfo {
    /// First word of the name, used as the navigation logo.
    #[must_use]
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or(self.name)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SeoMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub author: &'static str,
    pub og_image: &'static str,
    pub site_url: &'static str,
}

impl SeoMetadata {
    /// Keywords as a single `content` attribute value.
    #[must_use]
    pub fn keywords_csv(&self) -> String {
        self.keywords.join(", ")
    }

    /// Absolute URL for a site-relative path.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}/{}", self.site_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

pub const PERSONAL: PersonalInfo = PersonalInfo {
    name: "Souleymane Saidou Abouba",
    title: "AI/ML Engineer | MLOps & LLMOps",
    tagline: "Transforming AI concepts into production-ready solutions",
    location: "Toulouse, France",
    summary: &[
        "AI/ML Engineer with expertise in production-grade AI/ML applications development, actively covering all the development cycle from data ingestion, feature engineering, dataset generation, model training and evaluation / model calls through APIs or local serving, model deployment and monitoring as per the best MLOps and LLMOps practices.",
        "Proven track records (professional/personal) building AI/ML pipelines systems from concept to production, with extensive experience in classical ML modelling (regression, classification, time-series etc...), GenAI Workflows (RAG, fine-tuning, prompt/context engineering and Agentic AI apps).",
        "Technical leader with 3+ years delivering AI/ML applications in critical industries including aerospace and Healthcare.",
    ],
    stats: &[
        Stat { label: "Experience", value: "3+ years" },
        Stat { label: "AWS Certifications", value: "2" },
        Stat { label: "Production Projects", value: "10+" },
        Stat { label: "Specialization", value: "End-to-End AI/ML" },
    ],
    contact: ContactInfo {
        email: "contactsouley@gmail.com",
        phone: "+33 749099636",
        location: "Toulouse, France",
    },
    social: SocialLinks {
        github: "https://github.com/Ramane23",
        linkedin: "https://linkedin.com/in/souleymane-saidou-abouba-1b49891a9",
        email: "mailto:contactsouley@gmail.com",
    },
    resume: Resume {
        path: "/cv/Souleymane_Saidou_Abouba_CV.pdf",
        filename: "Souleymane_Saidou_Abouba_CV.pdf",
    },
    highlights: &["Technical leadership (PRIA project)", "Delivered 4 production-grade projects"],
    core_competencies: &[
        "MLOps/LLMOps",
        "Real-time Data Engineering",
        "GenAI & RAG",
        "Agentic AI Systems",
        "Cloud Architecture (AWS)",
        "Production ML Deployment",
    ],
};

pub const SEO: SeoMetadata = SeoMetadata {
    title: "Souleymane Saidou Abouba | AI/ML Engineer Portfolio",
    description: "AI/ML Engineer specializing in MLOps, LLMOps, and production ML systems. 3+ years building real-time ML pipelines, GenAI solutions, and agentic AI.",
    keywords: &[
        "AI Engineer",
        "ML Engineer",
        "MLOps",
        "LLMOps",
        "Machine Learning",
        "GenAI",
        "RAG",
        "Agentic AI",
        "Real-time ML",
        "AWS",
        "Python",
        "LangChain",
        "TensorFlow",
        "PyTorch",
    ],
    author: "Souleymane Saidou Abouba",
    og_image: "/images/og-image.jpg",
    site_url: "https://yourdomain.com",
};
