//! Degrees and professional certifications, newest first.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EducationStatus {
    Completed,
    InProgress,
    Expected,
}

impl EducationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Expected => "Expected",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Education {
    pub id: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub status: EducationStatus,
    pub description: Option<&'static str>,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Certification {
    pub id: &'static str,
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_id: Option<&'static str>,
    pub verification_url: Option<&'static str>,
    pub logo: Option<&'static str>,
    pub description: Option<&'static str>,
}

pub const EDUCATION: &[Education] = &[
    Education {
        id: "udacity-genai",
        degree: "Generative AI Nanodegree",
        institution: "Udacity",
        period: "December 2024 - May 2025",
        start_date: "2024-12",
        end_date: "2025-05",
        status: EducationStatus::InProgress,
        description: Some("Advanced program focusing on generative AI, LLMs, and practical applications"),
        highlights: &[],
    },
    Education {
        id: "wqu-applied-ai",
        degree: "Applied AI Lab",
        institution: "WorldQuant University",
        period: "December 2024 - Present",
        start_date: "2024-12",
        end_date: "Present",
        status: EducationStatus::InProgress,
        description: Some("Hands-on AI development and deployment"),
        highlights: &[],
    },
    Education {
        id: "erau-aviation",
        degree: "Graduate Certificate in Aviation & Aerospace",
        institution: "Embry-Riddle Aeronautical University",
        period: "May 2023 - March 2025",
        start_date: "2023-05",
        end_date: "2025-03",
        status: EducationStatus::Expected,
        description: Some("Specialized program in aerospace engineering and aviation systems"),
        highlights: &[],
    },
    Education {
        id: "mit-stats",
        degree: "MicroMasters in Statistics & Data Science",
        institution: "MITx (edX)",
        period: "December 2022 - January 2024",
        start_date: "2022-12",
        end_date: "2024-01",
        status: EducationStatus::Completed,
        description: Some("Graduate-level program covering probability, statistics, machine learning, and data analysis"),
        highlights: &["Bayesian Inference", "Statistical Modeling", "Machine Learning"],
    },
    Education {
        id: "wqu-data-science",
        degree: "Applied Data Science Lab",
        institution: "WorldQuant University",
        period: "September 2022 - June 2023",
        start_date: "2022-09",
        end_date: "2023-06",
        status: EducationStatus::Completed,
        description: Some("Practical data science projects and applications"),
        highlights: &[],
    },
    Education {
        id: "isae-master",
        degree: "Advanced Master in Aerospace Project Management",
        institution: "ISAE-SUPAERO / ENAC",
        period: "September 2021 - October 2022",
        start_date: "2021-09",
        end_date: "2022-10",
        status: EducationStatus::Completed,
        description: Some("Specialized program in aerospace project management and engineering leadership"),
        highlights: &["Project Management", "Systems Engineering", "Aerospace Industry"],
    },
    Education {
        id: "esat-engineering",
        degree: "Aeronautical Engineering",
        institution: "ESAT University",
        period: "September 2016 - July 2021",
        start_date: "2016-09",
        end_date: "2021-07",
        status: EducationStatus::Completed,
        description: Some("Bachelor's degree in Aeronautical Engineering"),
        highlights: &["Engineering Fundamentals", "Aerospace Systems", "Technical Analysis"],
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: "aws-ml-specialty",
        name: "AWS Certified Machine Learning - Specialty",
        issuer: "Amazon Web Services",
        date: "2023",
        credential_id: None,
        verification_url: None,
        logo: Some("/images/certifications/aws-ml.png"),
        description: Some("Validates expertise in building, training, tuning, and deploying ML models on AWS"),
    },
    Certification {
        id: "aws-cloud-practitioner",
        name: "AWS Certified Cloud Practitioner",
        issuer: "Amazon Web Services",
        date: "2022",
        credential_id: None,
        verification_url: None,
        logo: Some("/images/certifications/aws-cp.png"),
        description: Some("Foundational understanding of AWS Cloud services and architecture"),
    },
    Certification {
        id: "agile-scrum",
        name: "Agile Scrum Certification",
        issuer: "Scrum Alliance / PMI",
        date: "2022",
        credential_id: None,
        verification_url: None,
        logo: Some("/images/certifications/scrum.png"),
        description: Some("Professional certification in Agile methodologies and Scrum framework"),
    },
];

#[must_use]
pub fn in_progress_education() -> Vec<&'static Education> {
    EDUCATION.iter().filter(|e| e.status == EducationStatus::InProgress).collect()
}

#[must_use]
pub fn completed_education() -> Vec<&'static Education> {
    EDUCATION.iter().filter(|e| e.status == EducationStatus::Completed).collect()
}

/// All entries, most recent start date first.
#[must_use]
pub fn education_sorted() -> Vec<&'static Education> {
    let mut sorted: Vec<_> = EDUCATION.iter().collect();
    sorted.sort_by(|a, b| b.start_date.cmp(a.start_date));
    sorted
}
