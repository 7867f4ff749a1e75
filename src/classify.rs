use regex::Regex;
use serde::Serialize;

use crate::extract::RawBookmark;

// Hand-tuned scoring policy, kept as consts rather than magic numbers so
// they can be retuned in one place. The threshold means a single weak match
// (2) or two weak matches (4) never qualify; one medium match (5) or three
// weak matches (6) do.
pub const STRONG_WEIGHT: u32 = 10;
pub const MEDIUM_WEIGHT: u32 = 5;
pub const WEAK_WEIGHT: u32 = 2;
pub const SCORE_THRESHOLD: u32 = 4;

/// Tag assigned when no category's score clears the threshold.
pub const FALLBACK_TAG: &str = "Other";

/// A bookmark with its assigned cluster tag. Field names mirror the JSON
/// report shape.
#[derive(Debug, Clone, Serialize)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
    pub domain: String,
    pub cluster: String,
}

/// One taxonomy entry: a cluster tag plus its keyword tiers.
/// Strong terms are product/framework names, medium terms language or
/// topic names, weak terms short ambiguous tokens that only count in
/// accumulation.
struct RuleDef {
    tag: &'static str,
    strong: &'static [&'static str],
    medium: &'static [&'static str],
    weak: &'static [&'static str],
}

// Declaration order is the fixed iteration order and therefore the
// tie-break order: the first rule declared wins a tied top score.
const RULES: &[RuleDef] = &[
    RuleDef {
        tag: "JavaScript",
        strong: &["react", "vue", "angular", "npm", "node.js"],
        medium: &["javascript", "typescript", "node"],
        weak: &["js", "frontend"],
    },
    RuleDef {
        tag: "Python",
        strong: &["django", "flask", "fastapi", "jupyter"],
        medium: &["python"],
        weak: &["py", "pip"],
    },
    RuleDef {
        tag: "Java/Kotlin",
        strong: &["spring", "kotlin"],
        medium: &["java"],
        weak: &["jvm", "maven", "gradle"],
    },
    RuleDef {
        tag: "Rust",
        strong: &["cargo", "crates.io"],
        medium: &["rust"],
        weak: &["rustc", "clippy"],
    },
    RuleDef {
        tag: "Go",
        strong: &["golang", "golang.org"],
        medium: &["go"],
        weak: &["goroutine", "gopher"],
    },
    RuleDef {
        tag: "C++",
        strong: &["c++", "cmake"],
        medium: &["cpp"],
        weak: &["stl", "clang"],
    },
    RuleDef {
        tag: "C#/.NET",
        strong: &["c#", ".net", "dotnet"],
        medium: &["csharp"],
        weak: &["nuget", "blazor"],
    },
    RuleDef {
        tag: "PHP",
        strong: &["laravel", "symfony"],
        medium: &["php"],
        weak: &["composer"],
    },
    RuleDef {
        tag: "Ruby",
        strong: &["rails", "rubygems"],
        medium: &["ruby"],
        weak: &["gem"],
    },
    RuleDef {
        tag: "Swift/iOS",
        strong: &["xcode", "swiftui"],
        medium: &["swift", "ios"],
        weak: &["cocoapods"],
    },
    RuleDef {
        tag: "Web Design",
        strong: &["tailwind", "bootstrap", "sass", "scss"],
        medium: &["css"],
        // "html" stays weak: a bare `.html` URL suffix must not clear the
        // threshold on its own.
        weak: &["html", "flexbox", "stylesheet"],
    },
    RuleDef {
        tag: "APIs",
        strong: &["graphql", "postman", "openapi", "swagger"],
        medium: &["api", "rest"],
        weak: &["endpoint", "webhook"],
    },
    RuleDef {
        tag: "Containers",
        strong: &["docker", "kubernetes", "k8s", "helm"],
        medium: &["container"],
        weak: &["pod", "containerd"],
    },
    RuleDef {
        tag: "Cloud",
        strong: &["aws", "azure", "gcp", "terraform"],
        medium: &["cloud"],
        weak: &["s3", "ec2", "lambda"],
    },
    RuleDef {
        tag: "DevOps",
        strong: &["jenkins", "github actions", "gitlab ci"],
        medium: &["devops", "ci/cd"],
        weak: &["pipeline", "deploy"],
    },
    RuleDef {
        tag: "Databases",
        strong: &["postgres", "postgresql", "mysql", "mongodb", "redis", "sqlite"],
        medium: &["database", "sql"],
        weak: &["db", "query", "schema"],
    },
    RuleDef {
        tag: "AI/ML",
        strong: &["tensorflow", "pytorch", "openai", "machine learning", "llm"],
        medium: &["ai", "ml"],
        weak: &["neural", "model", "dataset"],
    },
    RuleDef {
        tag: "Dev Tools",
        strong: &["github", "gitlab", "vscode", "vim"],
        medium: &["git"],
        weak: &["editor", "terminal", "shell"],
    },
    RuleDef {
        tag: "Testing",
        strong: &["jest", "cypress", "selenium", "playwright"],
        medium: &["testing"],
        weak: &["test", "qa", "mock"],
    },
    RuleDef {
        tag: "Work Tools",
        strong: &["jira", "confluence", "slack", "notion"],
        medium: &["teams"],
        weak: &["wiki", "meeting"],
    },
    RuleDef {
        tag: "Project Management",
        strong: &["asana", "trello", "monday.com"],
        medium: &["kanban"],
        weak: &["project", "sprint", "roadmap"],
    },
    RuleDef {
        tag: "Documentation",
        strong: &["documentation", "tutorial"],
        medium: &["docs"],
        weak: &["doc", "learn", "guide", "reference"],
    },
    RuleDef {
        tag: "Learning",
        strong: &["stackoverflow", "dev.to", "medium.com"],
        medium: &["blog"],
        weak: &["article", "course"],
    },
    RuleDef {
        tag: "BuildingMinds",
        strong: &["buildingminds"],
        medium: &[],
        weak: &["bm"],
    },
    RuleDef {
        tag: "HR/Admin",
        strong: &["personio"],
        medium: &["payroll"],
        weak: &["hr", "vacation", "absence"],
    },
    RuleDef {
        tag: "Microsoft",
        strong: &["sharepoint", "microsoft", "office365", "outlook"],
        medium: &["office"],
        weak: &["excel", "powerpoint", "onedrive"],
    },
    RuleDef {
        tag: "Entertainment",
        strong: &["spotify", "youtube", "netflix"],
        medium: &["music", "video"],
        weak: &["movie", "stream", "playlist"],
    },
];

struct CompiledRule {
    tag: &'static str,
    strong: Vec<Regex>,
    medium: Vec<Regex>,
    weak: Vec<Regex>,
}

impl CompiledRule {
    /// Score one haystack against this rule. Presence test per term: a
    /// term contributes its weight at most once no matter how often it
    /// occurs.
    fn score(&self, haystack: &str) -> u32 {
        let hits = |res: &[Regex]| res.iter().filter(|re| re.is_match(haystack)).count() as u32;
        hits(&self.strong) * STRONG_WEIGHT
            + hits(&self.medium) * MEDIUM_WEIGHT
            + hits(&self.weak) * WEAK_WEIGHT
    }
}

/// The immutable category rule table, compiled once at startup and passed
/// explicitly to whoever classifies. Read-only after construction, so
/// shared references are safe anywhere.
pub struct Taxonomy {
    rules: Vec<CompiledRule>,
}

impl Taxonomy {
    /// Compile the built-in rule table. Patterns come from a static,
    /// known-good term list, so compilation cannot fail at runtime.
    pub fn builtin() -> Self {
        let compile = |terms: &[&str]| terms.iter().map(|t| term_regex(t)).collect();
        let rules = RULES
            .iter()
            .map(|def| CompiledRule {
                tag: def.tag,
                strong: compile(def.strong),
                medium: compile(def.medium),
                weak: compile(def.weak),
            })
            .collect();
        Taxonomy { rules }
    }

    /// Assign exactly one cluster tag. Total: every input maps to a
    /// taxonomy tag or the fallback, never an error.
    ///
    /// Winner = strictly highest score above SCORE_THRESHOLD; a strict
    /// comparison during the scan means the first-declared rule keeps a
    /// tied top score.
    pub fn classify(&self, url: &str, title: &str, domain: &str) -> &'static str {
        let haystack = haystack(url, title, domain);
        let mut best: Option<(&'static str, u32)> = None;
        for rule in &self.rules {
            let score = rule.score(&haystack);
            if score > SCORE_THRESHOLD && best.map_or(true, |(_, top)| score > top) {
                best = Some((rule.tag, score));
            }
        }
        best.map_or(FALLBACK_TAG, |(tag, _)| tag)
    }

    /// Per-category score breakdown in declaration order, zero rows
    /// omitted. Debug aid behind the `classify` subcommand.
    pub fn scores(&self, url: &str, title: &str, domain: &str) -> Vec<(&'static str, u32)> {
        let haystack = haystack(url, title, domain);
        self.rules
            .iter()
            .map(|rule| (rule.tag, rule.score(&haystack)))
            .filter(|&(_, score)| score > 0)
            .collect()
    }

    /// Consume an extracted bookmark and return it labeled.
    pub fn label(&self, raw: RawBookmark) -> Bookmark {
        let cluster = self
            .classify(&raw.url, &raw.title, &raw.domain)
            .to_string();
        Bookmark {
            url: raw.url,
            title: raw.title,
            domain: raw.domain,
            cluster,
        }
    }
}

/// The combined lowercased text a bookmark is matched against.
fn haystack(url: &str, title: &str, domain: &str) -> String {
    format!("{} {} {}", url, title, domain).to_lowercase()
}

/// Whole-word pattern for one term. `\b` only works next to a word
/// character, so it is attached per edge: "go" gets both anchors and won't
/// match inside "google", while "c++" or ".net" keep their punctuation
/// edges literal.
fn term_regex(term: &str) -> Regex {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut pattern = String::new();
    if term.starts_with(is_word) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(term));
    if term.ends_with(is_word) {
        pattern.push_str(r"\b");
    }
    Regex::new(&pattern).unwrap()
}
