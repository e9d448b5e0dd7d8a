use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::generate::plan::{GenerationPlan, Volumes};

/// The eshopgen.lock file structure.
///
/// `eshopgen generate` writes this after every successful run so that
/// `eshopgen generate --from-lock` can replay the same seed, "today" and
/// volumes. If the DDL has changed since, replay stops unless `--force`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockFile {
    /// SHA256 hash of the DDL text that was copied into the script.
    pub ddl_hash: String,
    /// Random seed used for generation.
    pub seed: u64,
    /// eshopgen version that generated this lock file.
    pub eshopgen_version: String,
    /// Pinned "today" as `YYYY-MM-DD`.
    pub today: String,
    /// Row counts per generated table.
    pub volumes: Volumes,
    /// Timestamp when the lock file was created.
    pub created_at: String,
}

impl LockFile {
    pub fn new(ddl_hash: String, plan: &GenerationPlan) -> Self {
        Self {
            ddl_hash,
            seed: plan.seed,
            eshopgen_version: env!("CARGO_PKG_VERSION").to_string(),
            today: plan.today.format("%Y-%m-%d").to_string(),
            volumes: plan.volumes,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Parse the stored "today" back to a date.
    pub fn parse_today(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.today, "%Y-%m-%d").ok()
    }

    /// Rebuild the plan this lock file recorded.
    pub fn plan(&self) -> Option<GenerationPlan> {
        self.parse_today()
            .map(|today| GenerationPlan::new(self.volumes, self.seed, today))
    }
}
