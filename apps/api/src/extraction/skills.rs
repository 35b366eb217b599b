//! Skills extraction: explicit skills-section tokens unioned with a
//! dictionary scan of the whole document, then alias-normalised and deduped.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use regex::Regex;

use crate::extraction::patterns::{has_upper, is_all_upper, title_case};

/// Canonical lowercase skill terms recognised anywhere in the text.
const SKILL_DICTIONARY: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "c++", "c#", "c", "ruby", "go", "golang",
    "rust", "swift", "kotlin", "scala", "r", "matlab", "perl", "php", "dart", "lua", "haskell",
    "elixir", "clojure", "objective-c", "assembly", "fortran", "cobol", "visual basic",
    "vb.net", "f#", "groovy", "julia", "solidity", "bash", "shell", "powershell", "sql",
    "nosql", "plsql",
    // Web frameworks & libraries
    "react", "reactjs", "react.js", "angular", "angularjs", "vue", "vuejs", "vue.js", "svelte",
    "next.js", "nextjs", "nuxt.js", "nuxtjs", "gatsby", "express", "expressjs", "express.js",
    "django", "flask", "fastapi", "spring", "spring boot", "springboot", "asp.net", "laravel",
    "rails", "ruby on rails", "node.js", "nodejs", "node", "deno", "bun",
    // Frontend
    "html", "html5", "css", "css3", "sass", "scss", "less", "tailwind", "tailwindcss",
    "tailwind css", "bootstrap", "material ui", "mui", "styled-components", "emotion",
    "chakra ui", "ant design", "jquery", "webpack", "vite", "rollup", "parcel", "babel",
    "eslint", "prettier",
    // Backend & APIs
    "rest", "restful", "rest api", "graphql", "grpc", "websocket", "websockets", "soap",
    "microservices", "serverless", "api design", "oauth", "jwt", "authentication",
    "authorization",
    // Databases
    "mysql", "postgresql", "postgres", "mongodb", "redis", "elasticsearch", "sqlite", "oracle",
    "sql server", "mssql", "dynamodb", "cassandra", "couchdb", "firebase", "firestore",
    "supabase", "neo4j", "mariadb", "cockroachdb", "influxdb", "timescaledb", "memcached",
    // Cloud & devops
    "aws", "amazon web services", "azure", "gcp", "google cloud", "google cloud platform",
    "docker", "kubernetes", "k8s", "terraform", "ansible", "jenkins", "ci/cd", "cicd",
    "github actions", "gitlab ci", "circleci", "travis ci", "nginx", "apache", "linux", "unix",
    "cloudformation", "pulumi", "vagrant", "helm", "istio", "consul",
    // AI / ML / data
    "machine learning", "deep learning", "artificial intelligence", "ai", "ml", "nlp",
    "natural language processing", "computer vision", "tensorflow", "pytorch", "keras",
    "scikit-learn", "sklearn", "opencv", "spacy", "hugging face", "transformers", "bert", "gpt",
    "llm", "large language models", "reinforcement learning", "neural networks", "cnn", "rnn",
    "lstm", "gan", "pandas", "numpy", "scipy", "matplotlib", "seaborn", "plotly", "tableau",
    "power bi", "data analysis", "data visualization", "data engineering", "data mining",
    "big data", "hadoop", "spark", "apache spark", "kafka", "airflow", "etl", "data pipeline",
    "statistical analysis", "statistics", "regression", "classification", "clustering",
    "recommendation systems",
    // Mobile
    "android", "ios", "react native", "flutter", "xamarin", "ionic", "cordova", "swift ui",
    "swiftui", "jetpack compose", "kotlin multiplatform",
    // Testing
    "jest", "mocha", "chai", "cypress", "selenium", "playwright", "puppeteer", "pytest",
    "unittest", "junit", "testng", "rspec", "testing", "unit testing", "integration testing",
    "e2e testing", "test driven development", "tdd", "bdd",
    // Tools & version control
    "git", "github", "gitlab", "bitbucket", "svn", "jira", "confluence", "slack", "trello",
    "asana", "notion", "figma", "sketch", "adobe xd", "postman", "swagger", "openapi",
    // Soft skills & management
    "agile", "scrum", "kanban", "project management", "team leadership", "leadership",
    "communication", "problem solving", "problem-solving", "critical thinking", "teamwork",
    "collaboration", "mentoring", "stakeholder management", "time management", "presentation",
    // Security
    "cybersecurity", "penetration testing", "ethical hacking", "owasp", "encryption", "ssl",
    "tls", "firewall", "ids", "ips", "siem", "security", "information security",
    "network security",
    // Other
    "blockchain", "web3", "smart contracts", "ethereum", "solana", "iot", "internet of things",
    "embedded systems", "fpga", "robotics", "ros", "3d printing", "autocad", "solidworks", "erp",
    "sap", "salesforce", "crm", "excel", "microsoft office", "office 365", "sharepoint",
];

/// Acronyms always rendered upper-case.
static UPPERCASE_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "html", "css", "sql", "aws", "gcp", "api", "jwt", "ci/cd", "rest", "grpc", "nosql",
        "plsql", "html5", "css3", "npm", "yarn", "pip", "ai", "ml", "nlp", "iot", "erp", "crm",
        "sap", "seo", "ui", "ux", "ios", "ssh", "ssl", "tls", "tcp", "udp", "dns", "http", "cnn",
        "rnn", "lstm", "gan", "gpu", "cpu", "etl", "bdd", "tdd", "mvc", "orm", "oop", "ide",
        "xml", "json", "yaml", "csv",
    ]
    .into_iter()
    .collect()
});

/// Lowercase variant → canonical display form.
static SKILL_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("node", "Node.js"),
        ("nodejs", "Node.js"),
        ("node.js", "Node.js"),
        ("react", "React"),
        ("reactjs", "React"),
        ("react.js", "React"),
        ("angular", "Angular"),
        ("angularjs", "Angular"),
        ("vue", "Vue.js"),
        ("vuejs", "Vue.js"),
        ("vue.js", "Vue.js"),
        ("next.js", "Next.js"),
        ("nextjs", "Next.js"),
        ("express", "Express.js"),
        ("expressjs", "Express.js"),
        ("express.js", "Express.js"),
        ("typescript", "TypeScript"),
        ("javascript", "JavaScript"),
        ("mongodb", "MongoDB"),
        ("mongo", "MongoDB"),
        ("postgresql", "PostgreSQL"),
        ("postgres", "PostgreSQL"),
        ("mysql", "MySQL"),
        ("python", "Python"),
        ("java", "Java"),
        ("golang", "Go"),
        ("go", "Go"),
        ("c++", "C++"),
        ("c#", "C#"),
        ("docker", "Docker"),
        ("kubernetes", "Kubernetes"),
        ("k8s", "Kubernetes"),
        ("tensorflow", "TensorFlow"),
        ("pytorch", "PyTorch"),
        ("flask", "Flask"),
        ("django", "Django"),
        ("fastapi", "FastAPI"),
        ("spring boot", "Spring Boot"),
        ("springboot", "Spring Boot"),
        ("ruby on rails", "Ruby on Rails"),
        ("tailwind", "Tailwind CSS"),
        ("tailwindcss", "Tailwind CSS"),
        ("three.js", "Three.js"),
        ("threejs", "Three.js"),
        ("graphql", "GraphQL"),
        ("redis", "Redis"),
        ("elasticsearch", "Elasticsearch"),
        ("microservices", "Microservices"),
    ]
    .into_iter()
    .collect()
});

/// Terms this short are matched case-sensitively against the original text,
/// so only their lowercase spelling is recognised by the scan.
const SHORT_TERM_CHARS: usize = 2;

/// Dictionary matcher over a fixed term list.
struct TermMatcher {
    automaton: AhoCorasick,
    terms: Vec<&'static str>,
}

impl TermMatcher {
    fn new(terms: Vec<&'static str>) -> Self {
        let automaton = AhoCorasick::new(&terms).expect("skill dictionary automaton should build");
        Self { automaton, terms }
    }

    /// Terms occurring in `haystack` with word boundaries on their
    /// word-character edges. Edges made of punctuation ("c++", "c#") are
    /// matched literally.
    fn find_in(&self, haystack: &str) -> BTreeSet<&'static str> {
        self.automaton
            .find_overlapping_iter(haystack)
            .filter(|m| at_word_boundaries(haystack, m.start(), m.end()))
            .map(|m| self.terms[m.pattern().as_usize()])
            .collect()
    }
}

static LONG_TERMS: LazyLock<TermMatcher> = LazyLock::new(|| {
    TermMatcher::new(
        SKILL_DICTIONARY
            .iter()
            .copied()
            .filter(|t| t.chars().count() > SHORT_TERM_CHARS)
            .collect(),
    )
});

static SHORT_TERMS: LazyLock<TermMatcher> = LazyLock::new(|| {
    TermMatcher::new(
        SKILL_DICTIONARY
            .iter()
            .copied()
            .filter(|t| t.chars().count() <= SHORT_TERM_CHARS)
            .collect(),
    )
});

static SKILL_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[,;|•●◦▪▸►\n]+").expect("skill delimiter pattern should compile")
});

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn at_word_boundaries(haystack: &str, start: usize, end: usize) -> bool {
    let matched = &haystack[start..end];
    let starts_word = matched.chars().next().is_some_and(is_word_char);
    let ends_word = matched.chars().next_back().is_some_and(is_word_char);
    let before_ok = !starts_word || !haystack[..start].chars().next_back().is_some_and(is_word_char);
    let after_ok = !ends_word || !haystack[end..].chars().next().is_some_and(is_word_char);
    before_ok && after_ok
}

/// Extracts, normalises and sorts skills from the skills section (if any)
/// and the full document text.
pub fn extract_skills(text: &str, skills_section: Option<&str>) -> Vec<String> {
    let mut raw: BTreeSet<String> = BTreeSet::new();

    if let Some(section) = skills_section {
        raw.extend(section_tokens(section));
    }
    raw.extend(scan_dictionary(text));

    let skills = normalize_skills(raw.iter().map(String::as_str));
    tracing::debug!(raw = raw.len(), kept = skills.len(), "extracted skills");
    skills
}

/// Delimited tokens from an explicit skills section, 2 to 49 characters long.
fn section_tokens(section: &str) -> impl Iterator<Item = String> + '_ {
    SKILL_DELIMITERS.split(section).filter_map(|item| {
        let cleaned = item
            .trim()
            .trim_matches('-')
            .trim_matches('*')
            .trim();
        let len = cleaned.chars().count();
        (2..50).contains(&len).then(|| cleaned.to_string())
    })
}

/// Dictionary terms found anywhere in the text. Short terms are emitted
/// upper-cased.
fn scan_dictionary(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut found: Vec<String> = LONG_TERMS
        .find_in(&lowered)
        .into_iter()
        .map(str::to_string)
        .collect();
    found.extend(SHORT_TERMS.find_in(text).into_iter().map(str::to_uppercase));
    found
}

/// Canonical display form for one raw token, or `None` if it is not a skill.
fn canonical_form(token: &str) -> Option<String> {
    let s = token.trim();
    if s.chars().count() <= 1 || s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let lower = s.to_lowercase();
    let normalized = if let Some(alias) = SKILL_ALIASES.get(lower.as_str()) {
        alias.to_string()
    } else if UPPERCASE_SKILLS.contains(lower.as_str())
        || (is_all_upper(s) && s.chars().count() <= 6)
    {
        s.to_uppercase()
    } else if s.contains(' ') {
        title_case(s)
    } else {
        s.to_string()
    };
    Some(normalized)
}

/// Collapses tokens by lower-cased canonical form, preferring a variant that
/// carries uppercase letters, and returns them sorted case-insensitively.
pub fn normalize_skills<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut by_key: BTreeMap<String, String> = BTreeMap::new();
    for normalized in tokens.into_iter().filter_map(canonical_form) {
        let key = normalized.to_lowercase();
        match by_key.get(&key) {
            Some(existing) if has_upper(existing) || !has_upper(&normalized) => {}
            _ => {
                by_key.insert(key, normalized);
            }
        }
    }
    by_key.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills_of(text: &str) -> Vec<String> {
        extract_skills(text, None)
    }

    #[test]
    fn test_node_variants_collapse() {
        let skills = skills_of("Worked with node, nodejs and Node.JS daily");
        let node: Vec<_> = skills.iter().filter(|s| s.to_lowercase().contains("node")).collect();
        assert_eq!(node, vec!["Node.js"]);
    }

    #[test]
    fn test_word_boundaries_respected() {
        let skills = skills_of("I enjoy javascripting and reactions");
        assert!(!skills.contains(&"JavaScript".to_string()));
        assert!(!skills.contains(&"React".to_string()));
    }

    #[test]
    fn test_punctuated_terms_match_literally() {
        let skills = skills_of("Languages used: C++, c# and objective-c.");
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"C#".to_string()));
        assert!(skills.contains(&"objective-c".to_string()));
    }

    #[test]
    fn test_section_token_aliases_apply() {
        let skills = extract_skills("", Some("C#, golang, Postgres"));
        assert_eq!(skills, vec!["C#", "Go", "PostgreSQL"]);
    }

    #[test]
    fn test_short_terms_are_case_sensitive() {
        let skills = skills_of("Built ml pipelines");
        assert!(skills.contains(&"ML".to_string()));
        let skills = skills_of("ML pipelines in Go");
        assert!(!skills.contains(&"ML".to_string()));
        assert!(!skills.contains(&"Go".to_string()));
    }

    #[test]
    fn test_single_letter_terms_are_dropped() {
        let skills = skills_of("Statistics in r and c");
        assert!(!skills.iter().any(|s| s.chars().count() == 1));
    }

    #[test]
    fn test_section_tokens_are_kept() {
        let skills = extract_skills("", Some("Rust; Terraform | Event Sourcing\n• Kafka Streams"));
        assert_eq!(
            skills,
            vec!["Event Sourcing", "Kafka Streams", "Rust", "Terraform"]
        );
    }

    #[test]
    fn test_section_tokens_length_bounds() {
        let long = "x".repeat(50);
        let section = format!("A, {long}, Elm");
        let skills = extract_skills("", Some(&section));
        assert_eq!(skills, vec!["Elm"]);
    }

    #[test]
    fn test_uppercase_rules() {
        let skills = normalize_skills(["aws", "ci/cd", "GRAPHQL", "SOLID", "machine learning"]);
        assert_eq!(
            skills,
            vec!["AWS", "CI/CD", "GraphQL", "Machine Learning", "SOLID"]
        );
    }

    #[test]
    fn test_dedup_prefers_uppercase_variant() {
        let skills = normalize_skills(["kotlin", "Kotlin", "rust"]);
        assert_eq!(skills, vec!["Kotlin", "rust"]);
    }

    #[test]
    fn test_numeric_tokens_dropped() {
        assert!(normalize_skills(["2020", "7"]).is_empty());
    }

    #[test]
    fn test_sorted_case_insensitively_without_duplicates() {
        let skills = skills_of("Python, python, Docker, aws, React and docker-compose, Git");
        let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        let mut sorted = lowered.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(lowered, sorted);
    }
}
