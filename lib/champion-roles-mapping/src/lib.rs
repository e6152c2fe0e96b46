pub mod builder;
pub mod error;
pub mod mapping;
pub mod model;
pub mod role;

pub use builder::{ChampionDirectorySource, RoleMappingBuilder, RoleStatsSource};
pub use error::{BoxError, Error};
pub use mapping::{build_role_mapping, write_role_mapping, RoleMapping, DEFAULT_THRESHOLD};
pub use model::{ChampionDirectory, ChampionId, ChampionRecord, ChampionRoleStats};
pub use role::Role;

// Re-export so that clients can name regions without depending on riven
pub use riven::consts::PlatformRoute;

/// File the role mapping is written to unless configured otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "champion_roles.json";
