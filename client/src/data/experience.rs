//! Work history, newest first, with per-project architecture write-ups.

/// Lifecycle stage a project architecture paragraph describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchitectureStage {
    DataIngestion,
    FeatureEngineering,
    DatasetGeneration,
    ModelTraining,
    Evaluation,
    Deployment,
    Monitoring,
    ExperimentTracking,
    Cicd,
    Observability,
}

impl ArchitectureStage {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::DataIngestion => "Data Ingestion",
            Self::FeatureEngineering => "Feature Engineering",
            Self::DatasetGeneration => "Dataset Generation",
            Self::ModelTraining => "Model Training",
            Self::Evaluation => "Evaluation",
            Self::Deployment => "Deployment",
            Self::Monitoring => "Monitoring",
            Self::ExperimentTracking => "Experiment Tracking",
            Self::Cicd => "CI/CD",
            Self::Observability => "Observability",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ProjectDetail {
    pub name: &'static str,
    pub description: &'static str,
    /// Key into `data::architectures` for the project's diagram.
    pub architecture_id: Option<&'static str>,
    pub architecture: &'static [(ArchitectureStage, &'static str)],
    pub tech_stack: &'static [&'static str],
}

#[derive(Clone, Copy, Debug)]
pub struct Experience {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    /// `YYYY-MM`, used for ordering.
    pub start_date: &'static str,
    pub current: bool,
    pub achievements: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    pub project_link: Option<&'static str>,
    pub projects: &'static [ProjectDetail],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        id: "akkodis-research",
        title: "Data Scientist | ML & MLOps Engineer",
        company: "Akkodis Research (AKR)",
        location: "Toulouse, France",
        period: "April 2024 - Present",
        start_date: "2024-04",
        current: true,
        achievements: &[
            "Led PRIA project as ML Technical Lead implementing RL agents for medical parameter optimization",
            "Designed real-time data pipelines processing streaming medical data with Apache Kafka and Redpanda",
            "Developed model training pipelines with REST APIs and WebSocket endpoints for real-time inference",
            "Implemented MLOps practices with CI/CD pipelines and monitoring for production-scale ML systems",
            "Built end-to-end ML infrastructure from data ingestion to model deployment and monitoring",
        ],
        tech_stack: &[
            "Python",
            "SQL",
            "AWS",
            "Apache Kafka",
            "Redpanda",
            "Comet ML",
            "Docker",
            "GitHub CI/CD",
            "Streamlit",
            "REST APIs",
            "WebSockets",
            "Reinforcement Learning",
        ],
        project_link: Some("#projects"),
        projects: &[
            ProjectDetail {
                name: "PRIA - Reinforcement Learning for Medical Parameter Optimization",
                description: "Led development as ML Technical Lead for a reinforcement learning system optimizing medical treatment parameters in real-time. System processes streaming medical data to provide AI-driven parameter recommendations for healthcare professionals.",
                architecture_id: Some("pria-rl"),
                architecture: &[
                    (
                        ArchitectureStage::DataIngestion,
                        "Apache Kafka and Redpanda for real-time streaming medical data ingestion from multiple sources. Custom Python consumers process high-frequency sensor data with sub-second latency requirements.",
                    ),
                    (
                        ArchitectureStage::FeatureEngineering,
                        "Real-time feature extraction pipeline using sliding windows for temporal features. Statistical aggregations (mean, std, percentiles) computed on streaming data. Custom medical domain features engineered in collaboration with healthcare experts.",
                    ),
                    (
                        ArchitectureStage::ModelTraining,
                        "Reinforcement Learning agents (PPO, SAC algorithms) trained using stable-baselines3. Custom reward functions designed based on medical outcomes. Distributed training on AWS EC2 GPU instances with model checkpointing.",
                    ),
                    (
                        ArchitectureStage::Evaluation,
                        "Multi-metric evaluation framework including reward convergence, policy stability, and medical safety constraints. Backtesting on historical medical data with cross-validation across patient cohorts.",
                    ),
                    (
                        ArchitectureStage::Deployment,
                        "REST API (FastAPI) and WebSocket endpoints for real-time inference. Model served in Docker containers on AWS ECS with auto-scaling. Sub-100ms inference latency requirement.",
                    ),
                    (
                        ArchitectureStage::Monitoring,
                        "Real-time monitoring dashboard (Streamlit) tracking model predictions, system latency, and data quality metrics. Alerting system for model drift and anomalous predictions.",
                    ),
                    (
                        ArchitectureStage::ExperimentTracking,
                        "Comet ML for experiment tracking, hyperparameter tuning logs, and model versioning. Comprehensive logging of training metrics, model artifacts, and evaluation results.",
                    ),
                    (
                        ArchitectureStage::Cicd,
                        "GitHub Actions CI/CD pipeline with automated testing (unit, integration, model validation). Automated deployment to staging and production environments with rollback capabilities.",
                    ),
                    (
                        ArchitectureStage::Observability,
                        "Comprehensive logging with CloudWatch. Distributed tracing for API requests. Custom medical safety metrics tracked in real-time with automated alerts.",
                    ),
                ],
                tech_stack: &[
                    "Python",
                    "Reinforcement Learning (PPO, SAC)",
                    "stable-baselines3",
                    "Apache Kafka",
                    "Redpanda",
                    "FastAPI",
                    "WebSockets",
                    "Streamlit",
                    "Docker",
                    "AWS (ECS, EC2, CloudWatch)",
                    "Comet ML",
                    "GitHub Actions",
                ],
            },
            ProjectDetail {
                name: "Automatic PR Reviewer - AI-Powered Code Review Agent",
                description: "Developed an intelligent code review system using LangChain and LangGraph to automate pull request reviews. The agentic AI system analyzes code changes, identifies potential issues, and provides constructive feedback to developers.",
                architecture_id: Some("pr-reviewer"),
                architecture: &[
                    (
                        ArchitectureStage::DataIngestion,
                        "GitHub webhooks trigger review pipeline on PR creation/update. REST API ingests PR diff, commit messages, and file changes. Code parsed and structured using tree-sitter for AST analysis.",
                    ),
                    (
                        ArchitectureStage::FeatureEngineering,
                        "Code complexity metrics (cyclomatic complexity, code churn, file coupling). Static analysis features (linting violations, type errors). Historical code review patterns extracted from repository history.",
                    ),
                    (
                        ArchitectureStage::DatasetGeneration,
                        "Synthetic dataset generation using historical PR reviews as ground truth. Data augmentation with code transformations. Balanced dataset across code quality categories (bugs, style, architecture).",
                    ),
                    (
                        ArchitectureStage::ModelTraining,
                        "Fine-tuned Claude 3.5 Sonnet on code review tasks using prompt engineering and few-shot examples. Retrieval-Augmented Generation (RAG) with codebase context from vector database (ChromaDB). Custom prompts designed for different review aspects (security, performance, maintainability).",
                    ),
                    (
                        ArchitectureStage::Evaluation,
                        "Human evaluation by developers comparing AI reviews to human reviews. Metrics: review accuracy, False positive rate, actionability score. A/B testing with control group receiving only human reviews.",
                    ),
                    (
                        ArchitectureStage::Deployment,
                        "LangChain agent deployed as GitHub App with webhook integration. Serverless deployment on AWS Lambda with API Gateway. Automatic comment posting to GitHub PRs with review findings.",
                    ),
                    (
                        ArchitectureStage::Monitoring,
                        "Opik for LLM observability tracking token usage, latency, and response quality. Dashboard monitoring review acceptance rate and developer feedback. Cost tracking for LLM API calls.",
                    ),
                    (
                        ArchitectureStage::ExperimentTracking,
                        "MLflow tracking for prompt versions, RAG configurations, and retrieval strategies. A/B test results logged with statistical significance testing. Version control for prompt templates and agent configurations.",
                    ),
                    (
                        ArchitectureStage::Cicd,
                        "Automated testing of agent responses against golden dataset. GitHub Actions pipeline for deployment with gradual rollout. Rollback mechanism for problematic agent versions.",
                    ),
                    (
                        ArchitectureStage::Observability,
                        "Distributed tracing for agent execution with LangSmith. Token usage and cost monitoring per repository. User feedback loop integrated into agent improvement cycle.",
                    ),
                ],
                tech_stack: &[
                    "Python",
                    "LangChain",
                    "LangGraph",
                    "Claude 3.5 Sonnet",
                    "ChromaDB",
                    "GitHub API",
                    "AWS Lambda",
                    "API Gateway",
                    "MLflow",
                    "Opik",
                    "LangSmith",
                    "tree-sitter",
                ],
            },
        ],
    },
    Experience {
        id: "liebherr-aerospace",
        title: "AI/ML Engineer",
        company: "Liebherr Aerospace (via Akkodis)",
        location: "Toulouse, France",
        period: "March 2022 - April 2024",
        start_date: "2022-03",
        current: false,
        achievements: &[
            "Developed ML & DL models optimizing engineering and manufacturing processes using industrial data",
            "Designed statistical analyses, feature extraction, and anomaly detection for structured/unstructured data",
            "Implemented GenAI solutions for industrial process documentation and knowledge management",
            "Built production ML pipelines for aerospace applications with strict reliability requirements",
            "Collaborated with cross-functional teams to deploy ML solutions in critical industrial environments",
        ],
        tech_stack: &[
            "Python",
            "LangChain",
            "LangGraph",
            "AWS",
            "mlflow",
            "opik",
            "Docker",
            "GitHub CI/CD",
            "Streamlit",
            "FastAPI",
            "Machine Learning",
            "Deep Learning",
            "GenAI",
        ],
        project_link: Some("#projects"),
        projects: &[
            ProjectDetail {
                name: "Computer Vision for Industrial Piece Anomaly Detection",
                description: "Built a computer vision system for automated quality inspection of aerospace manufacturing components. Deep learning models detect surface defects, dimensional anomalies, and assembly errors in real-time production lines with high precision requirements.",
                architecture_id: Some("cv-anomaly"),
                architecture: &[
                    (
                        ArchitectureStage::DataIngestion,
                        "High-resolution camera feeds (4K, 60fps) from multiple inspection stations. Image preprocessing pipeline with automatic cropping, rotation correction, and normalization. Data versioning with DVC for training datasets.",
                    ),
                    (
                        ArchitectureStage::FeatureEngineering,
                        "Multi-scale feature extraction using pre-trained CNNs (ResNet, EfficientNet). Custom feature engineering for aerospace-specific defect patterns. Edge detection and texture analysis for surface anomaly characterization.",
                    ),
                    (
                        ArchitectureStage::DatasetGeneration,
                        "Synthetic defect generation using image augmentation (rotation, noise, lighting variations). Active learning pipeline to identify and label edge cases. Balanced dataset across defect types with stratified sampling.",
                    ),
                    (
                        ArchitectureStage::ModelTraining,
                        "Transfer learning from ImageNet with fine-tuning on aerospace components. Ensemble of CNN architectures (EfficientNet-B4, ResNet-101) for robust predictions. Custom loss functions weighted by defect severity and business impact.",
                    ),
                    (
                        ArchitectureStage::Evaluation,
                        "Precision-recall analysis with focus on minimizing False negatives (missed defects). Cross-validation across different component types and manufacturing batches. Performance benchmarking against human inspectors with 99.2% agreement.",
                    ),
                    (
                        ArchitectureStage::Deployment,
                        "Real-time inference on edge devices (NVIDIA Jetson) at inspection stations. FastAPI service for centralized model management and updates. Gradio interface for quality control teams to review flagged components.",
                    ),
                    (
                        ArchitectureStage::Monitoring,
                        "Real-time dashboard tracking defect rates, model confidence scores, and inspection throughput. Automatic alerts for unusual defect patterns or model performance degradation. Data drift monitoring comparing production vs. training data distributions.",
                    ),
                    (
                        ArchitectureStage::ExperimentTracking,
                        "MLflow tracking for model architectures, hyperparameters, and training metrics. Model registry with versioning and A/B testing framework. Comprehensive logging of inference results for continuous model improvement.",
                    ),
                    (
                        ArchitectureStage::Cicd,
                        "Automated retraining pipeline triggered by new labeled data. GitHub Actions for model testing (unit tests, performance benchmarks, edge case validation). Blue-green deployment strategy for zero-downtime model updates.",
                    ),
                    (
                        ArchitectureStage::Observability,
                        "Inference latency monitoring with <50ms SLA. GPU utilization and memory tracking. Detailed logging of predictions, confidence scores, and human override decisions for model refinement.",
                    ),
                ],
                tech_stack: &[
                    "Python",
                    "PyTorch",
                    "TensorFlow",
                    "OpenCV",
                    "EfficientNet",
                    "ResNet",
                    "NVIDIA Jetson",
                    "FastAPI",
                    "Gradio",
                    "MLflow",
                    "DVC",
                    "Docker",
                    "GitHub Actions",
                ],
            },
            ProjectDetail {
                name: "RAG-Based Industrial Documentation Query System",
                description: "Developed a Retrieval-Augmented Generation system for querying complex aerospace engineering documentation. LangChain-powered application enables engineers to find technical specifications, maintenance procedures, and compliance requirements through natural language queries.",
                architecture_id: Some("rag-docs"),
                architecture: &[
                    (
                        ArchitectureStage::DataIngestion,
                        "Automated ingestion of PDFs, Word docs, CAD metadata, and internal wikis using custom parsers. Document chunking strategy optimized for technical content (section-aware splitting). Incremental updates with change detection to keep knowledge base current.",
                    ),
                    (
                        ArchitectureStage::FeatureEngineering,
                        "Dense embeddings (OpenAI text-embedding-3-large) for semantic search. Hybrid search combining dense vectors with BM25 sparse retrieval. Metadata extraction (document type, version, certification status) for filtered retrieval.",
                    ),
                    (
                        ArchitectureStage::DatasetGeneration,
                        "Question-answer pairs generated from historical support tickets and expert annotations. Synthetic query generation using LLMs to expand training coverage. Hard negative mining to improve retrieval precision.",
                    ),
                    (
                        ArchitectureStage::ModelTraining,
                        "RAG pipeline with Claude 3.5 Sonnet as reasoning engine. Fine-tuned retrieval model on domain-specific queries using contrastive learning. Prompt engineering with few-shot examples for technical accuracy.",
                    ),
                    (
                        ArchitectureStage::Evaluation,
                        "Retrieval metrics: MRR@10, NDCG@5, Recall@20 evaluated on expert-curated test set. Generation quality assessed by domain experts using relevance, accuracy, and completeness rubrics. User satisfaction tracked through feedback integration.",
                    ),
                    (
                        ArchitectureStage::Deployment,
                        "Streamlit application for internal engineering teams with conversational interface. ChromaDB vector store deployed on AWS with horizontal scaling. API Gateway + Lambda for serverless query processing.",
                    ),
                    (
                        ArchitectureStage::Monitoring,
                        "Opik for LLM observability tracking prompt performance and token usage. User query analytics identifying common questions and retrieval failures. Cost monitoring for embedding generation and LLM inference.",
                    ),
                    (
                        ArchitectureStage::ExperimentTracking,
                        "MLflow for tracking retrieval configurations, embedding models, and prompt templates. A/B testing framework comparing RAG approaches (naive vs. advanced chunking, different LLMs). Version control for document processing pipelines.",
                    ),
                    (
                        ArchitectureStage::Cicd,
                        "Automated testing of retrieval accuracy on benchmark query set. GitHub Actions pipeline for deployment with gradual traffic shifting. Rollback capabilities for embedding model or prompt updates.",
                    ),
                    (
                        ArchitectureStage::Observability,
                        "Distributed tracing with LangSmith for debugging multi-step RAG chains. Query latency breakdown (retrieval, reranking, generation). User feedback loop with thumbs up/down for continuous improvement.",
                    ),
                ],
                tech_stack: &[
                    "Python",
                    "LangChain",
                    "LangGraph",
                    "Claude 3.5 Sonnet",
                    "OpenAI Embeddings",
                    "ChromaDB",
                    "BM25",
                    "Streamlit",
                    "AWS Lambda",
                    "API Gateway",
                    "MLflow",
                    "Opik",
                    "LangSmith",
                    "Docker",
                ],
            },
        ],
    },
];

#[must_use]
pub fn current_experience() -> Option<&'static Experience> {
    EXPERIENCES.iter().find(|e| e.current)
}

/// All positions, most recent start date first.
#[must_use]
pub fn experiences_sorted() -> Vec<&'static Experience> {
    let mut sorted: Vec<_> = EXPERIENCES.iter().collect();
    sorted.sort_by(|a, b| b.start_date.cmp(a.start_date));
    sorted
}
