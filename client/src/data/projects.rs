//! Portfolio project cards.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    GenAi,
    MlOps,
    AgenticAi,
    Rag,
    RealTimeMl,
}

impl ProjectCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GenAi => "GenAI",
            Self::MlOps => "MLOps",
            Self::AgenticAi => "Agentic AI",
            Self::Rag => "RAG",
            Self::RealTimeMl => "Real-time ML",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectLinks {
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
    pub demo: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub metrics: &'static [Metric],
    pub links: ProjectLinks,
    pub image: Option<&'static str>,
    pub featured: bool,
    pub category: ProjectCategory,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "contrails-prediction",
        title: "Real-Time Contrails Prediction System",
        description: "Production ML system predicting aircraft contrails in real-time using weather and flight data.",
        long_description: "Developed an end-to-end MLOps pipeline for real-time contrail prediction. Integrated with Hopsworks feature store for efficient feature management and deployed a high-performance API for real-time inference. The system processes live aviation data and weather patterns to predict contrail formation with 75% precision.",
        tech_stack: &["LightGBM", "Hopsworks", "Aviation Edge API", "Python", "Real-time APIs", "MLOps"],
        metrics: &[
            Metric { label: "Precision", value: "75%" },
            Metric { label: "F1 Score", value: "76%" },
            Metric { label: "Latency", value: "Real-time" },
        ],
        links: ProjectLinks {
            github: Some("https://github.com/Ramane23/real-time-ml-contrails-prediction"),
            live: None,
            demo: None,
        },
        image: None,
        featured: true,
        category: ProjectCategory::RealTimeMl,
    },
    Project {
        id: "blog-generator",
        title: "AI-Powered Blog Generator Agent",
        description: "Autonomous blog generation system using multi-agent workflow with LangGraph.",
        long_description: "Built a sophisticated multi-agent system that autonomously generates high-quality blog content. Implemented complex workflow orchestration using LangGraph, where multiple AI agents collaborate on research, writing, editing, and fact-checking to produce coherent, well-structured articles.",
        tech_stack: &["LangGraph", "Multi-Agent Systems", "LLMs", "Python", "Workflow Orchestration"],
        metrics: &[],
        links: ProjectLinks {
            github: Some("https://github.com/Ramane23/Blog-generator-agent"),
            live: None,
            demo: None,
        },
        image: None,
        featured: true,
        category: ProjectCategory::AgenticAi,
    },
    Project {
        id: "ai-chatbots",
        title: "AI Chatbots - Agentic AI Chatbots",
        description: "Intelligent chatbots powered by LLMs hosted on Groq with external tool calling capabilities.",
        long_description: "Developed production-ready agentic chatbots with external tool integration. Leveraged Groq for high-performance LLM inference and implemented tool-calling capabilities allowing the agents to interact with external APIs, databases, and services. Built with LangGraph for complex conversation flows and LangChain for robust integration.",
        tech_stack: &["LangGraph", "LangChain", "Groq", "Tool Integration", "Python", "API Development"],
        metrics: &[],
        links: ProjectLinks { github: Some("https://github.com/Ramane23/AI-Chatbots"), live: None, demo: None },
        image: None,
        featured: true,
        category: ProjectCategory::AgenticAi,
    },
    Project {
        id: "homematch",
        title: "HomeMatch - RAG-Based Real Estate Platform",
        description: "Intelligent property listing retrieval system using RAG architecture for personalized recommendations.",
        long_description: "Implemented a Retrieval-Augmented Generation (RAG) system for intelligent real estate search. The platform uses vector databases for semantic search, enabling natural language queries to find relevant properties. Integrated LangChain for orchestration and built a personalized recommendation engine that understands user preferences.",
        tech_stack: &["RAG", "LangChain", "Vector Databases", "Python", "Semantic Search", "NLP"],
        metrics: &[],
        links: ProjectLinks { github: Some("https://github.com/Ramane23/HomeMatch"), live: None, demo: None },
        image: None,
        featured: true,
        category: ProjectCategory::Rag,
    },
];

#[must_use]
pub fn featured_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.featured).collect()
}

#[must_use]
pub fn projects_by_category(category: ProjectCategory) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.category == category).collect()
}
