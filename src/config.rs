use std::path::{Path, PathBuf};

/// Overrides the project root used to derive the default data locations.
pub const ROOT_ENV_VAR: &str = "WASTE_MANAGEMENT_ROOT";

/// File name of the generated index inside the processed data directory.
pub const DATASET_FILE_NAME: &str = "dataset.csv";

/// Standard data-science project layout rooted at one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub raw_data_dir: PathBuf,
    pub interim_data_dir: PathBuf,
    pub processed_data_dir: PathBuf,
    pub external_data_dir: PathBuf,
    pub models_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub figures_dir: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data_dir = root.join("data");
        let reports_dir = root.join("reports");

        Self {
            raw_data_dir: data_dir.join("raw"),
            interim_data_dir: data_dir.join("interim"),
            processed_data_dir: data_dir.join("processed"),
            external_data_dir: data_dir.join("external"),
            models_dir: root.join("models"),
            figures_dir: reports_dir.join("figures"),
            reports_dir,
            data_dir,
            root,
        }
    }

    /// Root from `WASTE_MANAGEMENT_ROOT`, falling back to the working directory.
    pub fn from_env() -> Self {
        let root = std::env::var_os(ROOT_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    pub fn default_dataset_csv(&self) -> PathBuf {
        self.processed_data_dir.join(DATASET_FILE_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::new(".")
    }
}
