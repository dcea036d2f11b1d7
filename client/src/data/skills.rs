//! Technical skills grouped by ML/AI workflow stage.

#[derive(Clone, Copy, Debug)]
pub struct SkillGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub skills: &'static [SkillGroup],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "data-ingestion",
        title: "Data Ingestion & Processing",
        icon: "📊",
        description: "Batch and real-time data processing, feature engineering, and data pipeline development",
        skills: &[
            SkillGroup { name: "Batch Processing", items: &["Pandas", "Polars", "PySpark", "Apache Spark", "SQL"] },
            SkillGroup { name: "Real-time Streaming", items: &["Apache Kafka", "Redpanda", "WebSockets"] },
            SkillGroup {
                name: "Feature Engineering",
                items: &[
                    "Hopsworks Feature Store",
                    "Statistical feature extraction",
                    "Anomaly detection",
                ],
            },
            SkillGroup {
                name: "Data Sources",
                items: &[
                    "REST APIs",
                    "Industrial structured/unstructured data",
                    "Streaming data",
                ],
            },
        ],
    },
    SkillCategory {
        id: "ml-training",
        title: "ML/DL Model Training",
        icon: "🤖",
        description: "Classical machine learning and deep learning model development",
        skills: &[
            SkillGroup { name: "Deep Learning Frameworks", items: &["PyTorch", "TensorFlow"] },
            SkillGroup { name: "Classical ML Libraries", items: &["Scikit-Learn", "XGBoost", "LightGBM", "CatBoost"] },
            SkillGroup {
                name: "Techniques",
                items: &[
                    "Supervised Learning",
                    "Unsupervised Learning",
                    "Reinforcement Learning",
                    "Bayesian Inference",
                ],
            },
            SkillGroup { name: "Experiment Tracking", items: &["Comet ML", "mlflow", "Weights & Biases"] },
        ],
    },
    SkillCategory {
        id: "llm-finetuning",
        title: "LLM Fine-tuning",
        icon: "🔧",
        description: "Large language model customization and training",
        skills: &[
            SkillGroup { name: "Platforms", items: &["HuggingFace Transformers", "AWS SageMaker"] },
            SkillGroup {
                name: "Techniques",
                items: &[
                    "Transfer Learning",
                    "Parameter-efficient fine-tuning (PEFT)",
                    "LoRA",
                    "Custom training loops",
                ],
            },
        ],
    },
    SkillCategory {
        id: "rag",
        title: "RAG (Retrieval-Augmented Generation)",
        icon: "🔍",
        description: "Building intelligent retrieval systems for enhanced LLM responses",
        skills: &[
            SkillGroup { name: "Frameworks", items: &["LangChain", "LangGraph", "LlamaIndex"] },
            SkillGroup {
                name: "Components",
                items: &[
                    "Vector databases",
                    "Embedding models",
                    "Document retrieval systems",
                    "Semantic search",
                ],
            },
            SkillGroup { name: "Projects", items: &["HomeMatch RAG platform", "Industrial documentation systems"] },
        ],
    },
    SkillCategory {
        id: "agentic-ai",
        title: "Agentic AI",
        icon: "🤝",
        description: "Multi-agent systems and autonomous AI workflows",
        skills: &[
            SkillGroup { name: "Frameworks", items: &["LangGraph", "LangChain", "Autogen", "CrewAI"] },
            SkillGroup {
                name: "Capabilities",
                items: &[
                    "Multi-agent orchestration",
                    "Tool integration",
                    "RL agents",
                    "Autonomous decision-making",
                ],
            },
            SkillGroup { name: "LLM Hosting", items: &["Groq (fast inference)", "OpenAI API", "Anthropic Claude"] },
        ],
    },
    SkillCategory {
        id: "evaluation",
        title: "Model & System Evaluation",
        icon: "📈",
        description: "Tracking, monitoring, and validating ML systems",
        skills: &[
            SkillGroup {
                name: "Tracking & Monitoring",
                items: &[
                    "Comet ML",
                    "mlflow",
                    "opik",
                    "Weights & Biases",
                    "LangSmith",
                ],
            },
            SkillGroup {
                name: "Metrics & Analysis",
                items: &[
                    "Statistical analysis",
                    "A/B testing",
                    "Bayesian inference",
                    "Uncertainty quantification",
                ],
            },
            SkillGroup {
                name: "Debugging Tools",
                items: &[
                    "LangSmith (LLM debugging)",
                    "Production monitoring dashboards",
                ],
            },
        ],
    },
    SkillCategory {
        id: "deployment",
        title: "Deployment (Local & Cloud)",
        icon: "🚀",
        description: "Model deployment and infrastructure management",
        skills: &[
            SkillGroup { name: "Containerization", items: &["Docker", "Kubernetes", "Docker Compose"] },
            SkillGroup { name: "AWS Cloud", items: &["S3", "SageMaker", "Lambda", "ECS/EKS", "API Gateway", "EC2"] },
            SkillGroup { name: "APIs & Servers", items: &["FastAPI", "Streamlit", "WebSockets", "REST APIs"] },
        ],
    },
    SkillCategory {
        id: "cicd-monitoring",
        title: "CI/CD & Monitoring",
        icon: "⚙️",
        description: "Continuous integration, deployment, and production monitoring",
        skills: &[
            SkillGroup {
                name: "CI/CD",
                items: &[
                    "GitHub Actions",
                    "GitLab CI/CD",
                    "Automated testing",
                    "Pipeline orchestration",
                ],
            },
            SkillGroup {
                name: "Monitoring",
                items: &[
                    "Model drift detection",
                    "Performance tracking",
                    "Kibana",
                    "CloudWatch",
                ],
            },
            SkillGroup { name: "Visualization", items: &["Plotly-Dash", "Streamlit", "Kibana", "Grafana"] },
        ],
    },
];

/// Every skill item once, in first-seen order.
#[must_use]
pub fn all_skills() -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::new();
    SKILL_CATEGORIES
        .iter()
        .flat_map(|c| c.skills.iter())
        .flat_map(|g| g.items.iter().copied())
        .filter(|item| seen.insert(*item))
        .collect()
}

#[must_use]
pub fn category_by_id(id: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|c| c.id == id)
}
