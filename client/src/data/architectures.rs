//! Data-flow diagrams for the detailed experience projects.

/// Visual category of a diagram node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    Process,
    Database,
    Service,
    Tool,
    Group,
}

#[derive(Clone, Copy, Debug)]
pub struct DiagramNode {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: NodeKind,
    /// Overrides the kind's fill and border colour.
    pub color: Option<&'static str>,
    pub logo: Option<&'static str>,
    pub description: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct DiagramEdge {
    pub from: &'static str,
    pub to: &'static str,
    pub label: Option<&'static str>,
}

#[derive(Clone, Copy, Debug)]
pub struct ProjectArchitecture {
    pub project_id: &'static str,
    pub nodes: &'static [DiagramNode],
    pub edges: &'static [DiagramEdge],
}

const fn node(
    id: &'static str,
    label: &'static str,
    kind: NodeKind,
    logo: &'static str,
    description: &'static str,
) -> DiagramNode {
    DiagramNode { id, label, kind, color: None, logo: Some(logo), description: Some(description) }
}

const fn edge(from: &'static str, to: &'static str, label: &'static str) -> DiagramEdge {
    DiagramEdge { from, to, label: Some(label) }
}

pub const ARCHITECTURES: &[ProjectArchitecture] = &[
    ProjectArchitecture {
        project_id: "pria-rl",
        nodes: &[
            node("kafka", "Apache Kafka", NodeKind::Service, "📡", "Stream Ingestion"),
            node("redpanda", "Redpanda", NodeKind::Service, "🐼", "Data Broker"),
            node("python-consumer", "Python Consumer", NodeKind::Process, "🐍", "Process Streams"),
            node("feature-eng", "Feature Engineering", NodeKind::Process, "⚙️", "Temporal Features"),
            node("rl-training", "RL Training", NodeKind::Process, "🧠", "PPO/SAC Agents"),
            node("aws-gpu", "AWS EC2 GPU", NodeKind::Service, "☁️", "Training Compute"),
            node("fastapi", "FastAPI", NodeKind::Service, "⚡", "REST + WebSocket"),
            node("docker", "Docker", NodeKind::Tool, "🐳", "Containerization"),
            node("aws-ecs", "AWS ECS", NodeKind::Service, "☁️", "Deployment"),
            node("streamlit", "Streamlit Dashboard", NodeKind::Service, "📊", "Real-time Monitor"),
            node("comet", "Comet ML", NodeKind::Tool, "☄️", "Experiment Tracking"),
            node("cloudwatch", "CloudWatch", NodeKind::Tool, "👁️", "Observability"),
            node("github-actions", "GitHub Actions", NodeKind::Tool, "⚙️", "CI/CD Pipeline"),
        ],
        edges: &[
            edge("kafka", "python-consumer", "Medical Data"),
            edge("redpanda", "python-consumer", "Sensor Data"),
            edge("python-consumer", "feature-eng", "Raw Streams"),
            edge("feature-eng", "rl-training", "Features"),
            edge("rl-training", "aws-gpu", "Train"),
            edge("aws-gpu", "comet", "Metrics"),
            edge("rl-training", "fastapi", "Model"),
            edge("fastapi", "docker", "Package"),
            edge("docker", "aws-ecs", "Deploy"),
            edge("aws-ecs", "streamlit", "Predictions"),
            edge("aws-ecs", "cloudwatch", "Logs"),
            edge("github-actions", "docker", "Build"),
            edge("github-actions", "aws-ecs", "Deploy"),
        ],
    },
    ProjectArchitecture {
        project_id: "pr-reviewer",
        nodes: &[
            node("github-webhook", "GitHub Webhook", NodeKind::Service, "🪝", "PR Events"),
            node("api-gateway", "API Gateway", NodeKind::Service, "🚪", "REST API"),
            node("tree-sitter", "Tree-sitter", NodeKind::Tool, "🌳", "AST Parser"),
            node("code-analysis", "Code Analysis", NodeKind::Process, "🔍", "Metrics & Static Analysis"),
            node("chromadb", "ChromaDB", NodeKind::Database, "🎨", "Vector Store"),
            node("langchain", "LangChain Agent", NodeKind::Process, "🦜", "Orchestration"),
            node("claude", "Claude 3.5", NodeKind::Service, "🤖", "LLM"),
            node("rag", "RAG Pipeline", NodeKind::Process, "📚", "Context Retrieval"),
            node("lambda", "AWS Lambda", NodeKind::Service, "λ", "Serverless"),
            node("github-app", "GitHub App", NodeKind::Service, "📱", "Integration"),
            node("opik", "Opik", NodeKind::Tool, "👁️", "LLM Observability"),
            node("langsmith", "LangSmith", NodeKind::Tool, "🔨", "Tracing"),
            node("mlflow", "MLflow", NodeKind::Tool, "📊", "Experiment Tracking"),
        ],
        edges: &[
            edge("github-webhook", "api-gateway", "PR Event"),
            edge("api-gateway", "tree-sitter", "Code Diff"),
            edge("tree-sitter", "code-analysis", "AST"),
            edge("code-analysis", "chromadb", "Embeddings"),
            edge("chromadb", "rag", "Context"),
            edge("code-analysis", "langchain", "Features"),
            edge("rag", "langchain", "Context"),
            edge("langchain", "claude", "Prompt"),
            edge("claude", "langchain", "Review"),
            edge("langchain", "lambda", "Agent"),
            edge("lambda", "github-app", "Comments"),
            edge("claude", "opik", "Metrics"),
            edge("langchain", "langsmith", "Traces"),
            edge("langchain", "mlflow", "Experiments"),
        ],
    },
    ProjectArchitecture {
        project_id: "cv-anomaly",
        nodes: &[
            node("camera", "Camera Feeds", NodeKind::Service, "📷", "4K @ 60fps"),
            node("preprocessing", "Preprocessing", NodeKind::Process, "🔧", "Crop, Rotate, Normalize"),
            node("dvc", "DVC", NodeKind::Tool, "📦", "Data Versioning"),
            node("cnn-features", "CNN Features", NodeKind::Process, "🧠", "ResNet, EfficientNet"),
            node("opencv", "OpenCV", NodeKind::Tool, "👁️", "Edge Detection"),
            node("transfer-learning", "Transfer Learning", NodeKind::Process, "🎓", "Fine-tuning"),
            node("pytorch", "PyTorch", NodeKind::Tool, "🔥", "Training Framework"),
            node("ensemble", "Ensemble Model", NodeKind::Process, "🎯", "Multi-model"),
            node("jetson", "NVIDIA Jetson", NodeKind::Service, "🖥️", "Edge Device"),
            node("fastapi-cv", "FastAPI", NodeKind::Service, "⚡", "Model API"),
            node("gradio", "Gradio UI", NodeKind::Service, "🎨", "Review Interface"),
            node("mlflow-cv", "MLflow", NodeKind::Tool, "📊", "Model Registry"),
            node("dashboard", "Dashboard", NodeKind::Service, "📈", "Metrics Monitor"),
            node("github-actions-cv", "GitHub Actions", NodeKind::Tool, "⚙️", "Auto Retrain"),
        ],
        edges: &[
            edge("camera", "preprocessing", "Images"),
            edge("preprocessing", "dvc", "Store"),
            edge("preprocessing", "cnn-features", "Clean Images"),
            edge("preprocessing", "opencv", "Analysis"),
            edge("cnn-features", "transfer-learning", "Features"),
            edge("opencv", "transfer-learning", "Edge Features"),
            edge("transfer-learning", "pytorch", "Train"),
            edge("pytorch", "ensemble", "Models"),
            edge("ensemble", "jetson", "Deploy"),
            edge("ensemble", "fastapi-cv", "Serve"),
            edge("fastapi-cv", "gradio", "Interface"),
            edge("ensemble", "mlflow-cv", "Version"),
            edge("jetson", "dashboard", "Metrics"),
            edge("github-actions-cv", "pytorch", "Retrain"),
            edge("github-actions-cv", "jetson", "Deploy"),
        ],
    },
    ProjectArchitecture {
        project_id: "rag-docs",
        nodes: &[
            node("docs-parser", "Document Parser", NodeKind::Process, "📄", "PDFs, Docs, CAD"),
            node("chunking", "Smart Chunking", NodeKind::Process, "✂️", "Section-aware"),
            node("embeddings", "OpenAI Embeddings", NodeKind::Service, "🔤", "text-embedding-3"),
            node("metadata", "Metadata Extract", NodeKind::Process, "🏷️", "Version, Type"),
            node("chromadb-rag", "ChromaDB", NodeKind::Database, "🎨", "Vector Store"),
            node("bm25", "BM25", NodeKind::Tool, "🔍", "Sparse Retrieval"),
            node("hybrid-search", "Hybrid Search", NodeKind::Process, "🔎", "Dense + Sparse"),
            node("reranker", "Reranker", NodeKind::Process, "🎯", "Relevance Score"),
            node("claude-rag", "Claude 3.5", NodeKind::Service, "🤖", "Generation"),
            node("streamlit-rag", "Streamlit App", NodeKind::Service, "🎨", "Chat Interface"),
            node("lambda-rag", "AWS Lambda", NodeKind::Service, "λ", "Serverless Query"),
            node("opik-rag", "Opik", NodeKind::Tool, "👁️", "LLM Observability"),
            node("langsmith-rag", "LangSmith", NodeKind::Tool, "🔨", "Chain Tracing"),
            node("mlflow-rag", "MLflow", NodeKind::Tool, "📊", "Retrieval Metrics"),
        ],
        edges: &[
            edge("docs-parser", "chunking", "Raw Text"),
            edge("chunking", "embeddings", "Chunks"),
            edge("chunking", "metadata", "Extract"),
            edge("embeddings", "chromadb-rag", "Vectors"),
            edge("metadata", "chromadb-rag", "Metadata"),
            edge("chunking", "bm25", "Index"),
            edge("chromadb-rag", "hybrid-search", "Dense"),
            edge("bm25", "hybrid-search", "Sparse"),
            edge("hybrid-search", "reranker", "Results"),
            edge("reranker", "claude-rag", "Context"),
            edge("claude-rag", "streamlit-rag", "Answer"),
            edge("hybrid-search", "lambda-rag", "API"),
            edge("claude-rag", "opik-rag", "Tokens"),
            edge("hybrid-search", "langsmith-rag", "Traces"),
            edge("reranker", "mlflow-rag", "Metrics"),
        ],
    },
];

#[must_use]
pub fn architecture_for(project_id: &str) -> Option<&'static ProjectArchitecture> {
    ARCHITECTURES.iter().find(|a| a.project_id == project_id)
}
