//! Detected project types.
//!
//! These mirror what the static-analysis detector reports for each
//! service in a repository.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Primary language of a detected project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    #[serde(alias = "csharp", alias = ".net")]
    DotNet,
    Python,
    #[serde(alias = "node", alias = "js")]
    JavaScript,
    #[serde(alias = "ts")]
    TypeScript,
    Go,
    Ruby,
    Rust,
    Php,
    Other,
}

impl Language {
    /// Human-readable name.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Java => "Java",
            Self::DotNet => ".NET",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Go => "Go",
            Self::Ruby => "Ruby",
            Self::Rust => "Rust",
            Self::Php => "PHP",
            Self::Other => "Other",
        }
    }
}

/// A framework or library dependency of a detected project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Angular,
    Vue,
    Svelte,
    #[serde(rename = "jquery")]
    JQuery,
    #[serde(rename = "nextjs")]
    NextJs,
    Express,
    Spring,
    #[serde(rename = "aspnet")]
    AspNet,
    Flask,
    Django,
    #[serde(rename = "fastapi")]
    FastApi,
}

impl Framework {
    /// Whether the framework renders a browser user interface.
    pub fn is_web_ui(&self) -> bool {
        matches!(
            self,
            Self::React | Self::Angular | Self::Vue | Self::Svelte | Self::JQuery | Self::NextJs
        )
    }

    /// Human-readable name.
    pub fn display(&self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Angular => "Angular",
            Self::Vue => "Vue.js",
            Self::Svelte => "Svelte",
            Self::JQuery => "jQuery",
            Self::NextJs => "Next.js",
            Self::Express => "Express",
            Self::Spring => "Spring",
            Self::AspNet => "ASP.NET",
            Self::Flask => "Flask",
            Self::Django => "Django",
            Self::FastApi => "FastAPI",
        }
    }
}

/// A data store a project depends on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDep {
    #[serde(alias = "mongodb")]
    Mongo,
    #[serde(alias = "postgresql")]
    Postgres,
    Redis,
}

impl DatabaseDep {
    /// Human-readable name.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Mongo => "MongoDB",
            Self::Postgres => "PostgreSQL",
            Self::Redis => "Redis",
        }
    }

    /// Short identifier used in prompt keys and CLI flags.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Mongo => "mongo",
            Self::Postgres => "postgres",
            Self::Redis => "redis",
        }
    }
}

impl fmt::Display for DatabaseDep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl std::str::FromStr for DatabaseDep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "redis" => Ok(Self::Redis),
            _ => Err(format!("unknown database: {}", s)),
        }
    }
}

/// A port declared by a build descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Port {
    pub number: u16,
}

/// A project-provided container build descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Docker {
    /// Path to the descriptor. Empty means the default builder is used.
    #[serde(default)]
    pub path: PathBuf,

    /// Ports the descriptor exposes, in declaration order.
    #[serde(default)]
    pub ports: Vec<Port>,
}

/// A service found by detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Project {
    /// Directory of the service.
    pub path: PathBuf,

    /// Primary language.
    pub language: Language,

    /// Frameworks the service uses.
    #[serde(default)]
    pub dependencies: Vec<Framework>,

    /// Data stores the service talks to.
    #[serde(default)]
    pub database_deps: Vec<DatabaseDep>,

    /// Container build descriptor, if the project has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker: Option<Docker>,
}

impl Project {
    /// Create a project with no dependencies and no build descriptor.
    pub fn new(path: impl Into<PathBuf>, language: Language) -> Self {
        Self {
            path: path.into(),
            language,
            dependencies: Vec::new(),
            database_deps: Vec::new(),
            docker: None,
        }
    }

    /// Add a framework dependency.
    pub fn with_framework(mut self, framework: Framework) -> Self {
        self.dependencies.push(framework);
        self
    }

    /// Add a database dependency.
    pub fn with_database(mut self, db: DatabaseDep) -> Self {
        self.database_deps.push(db);
        self
    }

    /// Attach a build descriptor exposing `ports`.
    pub fn with_docker(mut self, path: impl Into<PathBuf>, ports: &[u16]) -> Self {
        self.docker = Some(Docker {
            path: path.into(),
            ports: ports.iter().map(|&number| Port { number }).collect(),
        });
        self
    }

    /// Whether any dependency is a web UI framework.
    pub fn has_web_ui(&self) -> bool {
        self.dependencies.iter().any(Framework::is_web_ui)
    }
}
