//! JSON-file persistence for saved projects and the editable rate table.
//!
//! - Projects bundle a request with its estimate under an opaque id.
//! - The rate table file is the admin-editable price source; estimation
//!   callers load a fresh snapshot per call, so edits apply from the
//!   next call onward.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::{CostEstimate, EstimateRequest, RateTable, UnknownRateKey};
use crate::infra::assets::bundled_rates_2025;

const APP_QUALIFIER: &str = "ng";
const APP_ORG: &str = "BuildCost";
const APP_NAME: &str = "BuildCost";

const PROJECTS_FILENAME: &str = "projects.json";
const RATES_FILENAME: &str = "rates.json";

/// Owner recorded on new projects until real authentication exists.
pub const PLACEHOLDER_OWNER: &str = "demo-user";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error(transparent)]
    UnknownRateKey(#[from] UnknownRateKey),
}

/// A saved estimate: the request, its result, and ownership metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    pub request: EstimateRequest,
    pub estimate: CostEstimate,
    /// Unix timestamp (seconds) when the project was saved.
    pub created_at: u64,
}

impl Project {
    /// Creates a project for the placeholder owner with a fresh id.
    pub fn new(name: impl Into<String>, request: EstimateRequest, estimate: CostEstimate) -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            id: Uuid::new_v4(),
            owner: PLACEHOLDER_OWNER.to_string(),
            name: name.into(),
            request,
            estimate,
            created_at,
        }
    }

    /// RFC 3339 rendering of `created_at`, if representable.
    pub fn created_at_rfc3339(&self) -> Option<String> {
        let timestamp = OffsetDateTime::from_unix_timestamp(self.created_at as i64).ok()?;
        timestamp.format(&Rfc3339).ok()
    }
}

fn default_file(filename: &str) -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.data_dir().join(filename))
}

/// File-backed list of saved projects.
pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    /// Opens the store at the platform data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let path = default_file(PROJECTS_FILENAME).ok_or(StoreError::StorageUnavailable)?;
        Ok(Self { path })
    }

    /// Opens a store backed by an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads all saved projects. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Project>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Replaces the stored project list.
    pub fn save(&self, projects: &[Project]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(projects)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Appends one project and persists the list.
    pub fn add(&self, project: Project) -> Result<Project, StoreError> {
        let mut projects = self.load()?;
        projects.push(project.clone());
        self.save(&projects)?;
        println!(
            "[store] Saved project {} ({} projects) to {}",
            project.id,
            projects.len(),
            self.path.display()
        );
        Ok(project)
    }
}

/// File-backed rate table with the bundled 2025 data as fallback.
pub struct RateStore {
    path: PathBuf,
}

impl RateStore {
    /// Opens the store at the platform data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let path = default_file(RATES_FILENAME).ok_or(StoreError::StorageUnavailable)?;
        Ok(Self { path })
    }

    /// Opens a store backed by an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the current rate table snapshot. Falls back to the bundled
    /// 2025 table when no file exists or the file does not parse.
    pub fn load(&self) -> RateTable {
        if !self.path.exists() {
            return bundled_rates_2025().clone();
        }
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(table) => table,
                Err(e) => {
                    println!("[store] Failed to parse rate table, using bundled data: {e}");
                    bundled_rates_2025().clone()
                }
            },
            Err(e) => {
                println!("[store] Failed to read rate table, using bundled data: {e}");
                bundled_rates_2025().clone()
            }
        }
    }

    /// Persists a rate table snapshot.
    pub fn save(&self, table: &RateTable) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(table)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Admin edit: updates one material's lot price and persists the
    /// table. Takes effect for the next estimation call that loads a
    /// snapshot; calls already in flight keep the table they loaded.
    pub fn update_material_price(&self, key: &str, price: f64) -> Result<(), StoreError> {
        let mut table = self.load();
        table.set_material_price(key, price)?;
        self.save(&table)?;
        println!("[store] Updated material {key} price to {price}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{estimate, Finish, Location, DEFAULT_SAMPLE_SIZE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scratch_path(filename: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("buildcost-test-{}", Uuid::new_v4()))
            .join(filename)
    }

    fn sample_project() -> Project {
        let request = EstimateRequest::new(100.0, Location::Lagos, Finish::Medium).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let estimate = estimate(&request, bundled_rates_2025(), DEFAULT_SAMPLE_SIZE, &mut rng)
            .unwrap();
        Project::new("Lagos duplex", request, estimate)
    }

    #[test]
    fn project_store_round_trips() {
        let store = ProjectStore::at_path(scratch_path("projects.json"));
        assert!(store.load().unwrap().is_empty());

        let saved = store.add(sample_project()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], saved);
        assert_eq!(loaded[0].owner, PLACEHOLDER_OWNER);
    }

    #[test]
    fn rate_store_falls_back_to_bundled_data() {
        let store = RateStore::at_path(scratch_path("rates.json"));
        assert_eq!(&store.load(), bundled_rates_2025());
    }

    #[test]
    fn price_edit_applies_to_next_snapshot() {
        let store = RateStore::at_path(scratch_path("rates.json"));
        let before = store.load();
        assert_eq!(before.material_price("CEMENT").unwrap().unit_price(), 8_500.0);

        store.update_material_price("CEMENT", 9_200.0).unwrap();
        let after = store.load();
        assert_eq!(after.material_price("CEMENT").unwrap().unit_price(), 9_200.0);
        // The earlier snapshot is unchanged.
        assert_eq!(before.material_price("CEMENT").unwrap().unit_price(), 8_500.0);
    }

    #[test]
    fn unknown_material_edit_is_rejected() {
        let store = RateStore::at_path(scratch_path("rates.json"));
        let err = store.update_material_price("MARBLE", 1_000.0).unwrap_err();
        assert!(matches!(err, StoreError::UnknownRateKey(_)));
    }

    #[test]
    fn created_at_renders_as_rfc3339() {
        let project = sample_project();
        let rendered = project.created_at_rfc3339().unwrap();
        assert!(rendered.ends_with('Z'));
    }
}
