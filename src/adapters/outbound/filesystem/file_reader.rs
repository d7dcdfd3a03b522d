use crate::ports::outbound::ContentSource;
use crate::rule_preview::domain::{HitCountMap, HitPayload, Rule, RuleDetail};
use crate::shared::error::PreviewError;
use crate::shared::security::{read_content_file, validate_rule_id};
use crate::shared::Result;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const RULES_FILE: &str = "rules.json";
const HIT_COUNTS_FILE: &str = "hits.json";
const DETAILS_DIR: &str = "details";
const HITS_DIR: &str = "hits";

/// JsonContentSource adapter reading exported content from a data directory
///
/// Layout:
/// - `rules.json` - array of rule records
/// - `hits.json` - object mapping rule id to hit count (optional)
/// - `details/<rule_id>.json` - one rule's full content
/// - `hits/<rule_id>.json` - array of hit payloads for one rule (optional)
pub struct JsonContentSource {
    data_dir: PathBuf,
}

impl JsonContentSource {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        if !data_dir.is_dir() {
            return Err(PreviewError::DataDirNotFound { path: data_dir }.into());
        }
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn rule_file(&self, dir: &str, rule_id: &str) -> Result<PathBuf> {
        validate_rule_id(rule_id)?;
        Ok(self.data_dir.join(dir).join(format!("{}.json", rule_id)))
    }

    /// Reads and parses one JSON file with the shared safety checks
    fn load<T: DeserializeOwned>(&self, path: &Path, what: &str) -> Result<T> {
        let content = read_content_file(path, what).map_err(|e| PreviewError::ContentReadError {
            what: what.to_string(),
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| {
            PreviewError::ContentParseError {
                what: what.to_string(),
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ContentSource for JsonContentSource {
    fn rules(&self) -> Result<Vec<Rule>> {
        self.load(&self.data_dir.join(RULES_FILE), "rules")
    }

    fn hit_counts(&self) -> Result<HitCountMap> {
        let path = self.data_dir.join(HIT_COUNTS_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no hit counts exported; all counts are zero");
            return Ok(HitCountMap::new());
        }
        self.load(&path, "hit counts")
    }

    fn detail(&self, rule_id: &str) -> Result<RuleDetail> {
        let path = self.rule_file(DETAILS_DIR, rule_id)?;
        if !path.exists() {
            return Err(PreviewError::RuleNotFound {
                rule_id: rule_id.to_string(),
            }
            .into());
        }
        self.load(&path, "rule detail")
    }

    fn detail_hits(&self, rule_id: &str) -> Result<Vec<HitPayload>> {
        let path = self.rule_file(HITS_DIR, rule_id)?;
        if !path.exists() {
            tracing::debug!(rule_id, "no hits exported for rule");
            return Ok(Vec::new());
        }
        self.load(&path, "rule hits")
    }
}
