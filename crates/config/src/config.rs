use std::{fs, path::Path};

use certreg_cert_types::OrgId;
use certreg_registry::{AccessPolicy, DEFAULT_ISSUER_ORG, DEFAULT_REVOKER_ORG};
use serde::{Deserialize, Serialize};
use tracing::*;

use crate::{ConfigError, LoggingConfig, StorageConfig};

/// Top level registry configuration.
///
/// Every section may be left out, in which case its defaults apply.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    pub policy: PolicyConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl RegistryConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        debug!(?path, "loaded registry config");
        Ok(config)
    }
}

/// Which organizations hold the issuing and revoking roles.
#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
#[serde(default)]
pub struct PolicyConfig {
    pub issuer_org: String,
    pub revoker_org: String,
}

impl PolicyConfig {
    /// Builds the authorization table, rejecting a config that gives both
    /// roles to one organization.
    pub fn to_access_policy(&self) -> Result<AccessPolicy, ConfigError> {
        let policy = AccessPolicy::new(
            OrgId::new(self.issuer_org.as_str()),
            OrgId::new(self.revoker_org.as_str()),
        )?;
        Ok(policy)
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            issuer_org: DEFAULT_ISSUER_ORG.to_owned(),
            revoker_org: DEFAULT_REVOKER_ORG.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use certreg_registry::PolicyError;

    use super::*;

    const FULL_CONFIG: &str = r#"
        [policy]
        issuer_org = "UniMSP"
        revoker_org = "RegistrarMSP"

        [storage]
        datadir = "/tmp/certreg"
        dbname = "certs"
        flush_every_write = true

        [logging]
        json_format = true
        service_label = "dev"
        log_dir = "/var/log/certreg"
        file_name_prefix = "registry"
        level = "debug"
    "#;

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.policy.issuer_org, "Org1MSP");
        assert_eq!(config.policy.revoker_org, "Org2MSP");
        assert_eq!(config.storage.datadir, PathBuf::from("certreg-data"));
        assert_eq!(config.storage.dbname, "certreg");
        assert!(!config.storage.flush_every_write);
        assert!(!config.logging.json_format);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_full_config() {
        let config = RegistryConfig::from_toml_str(FULL_CONFIG).unwrap();
        assert_eq!(config.policy.issuer_org, "UniMSP");
        assert_eq!(config.policy.revoker_org, "RegistrarMSP");
        assert_eq!(config.storage.datadir, PathBuf::from("/tmp/certreg"));
        assert_eq!(config.storage.dbname, "certs");
        assert!(config.storage.flush_every_write);
        assert!(config.logging.json_format);
        assert_eq!(config.logging.service_label.as_deref(), Some("dev"));
        assert_eq!(
            config.logging.log_dir,
            Some(PathBuf::from("/var/log/certreg"))
        );
        assert_eq!(config.logging.file_name_prefix, "registry");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = RegistryConfig::from_toml_str(
            r#"
            [policy]
            revoker_org = "Org3MSP"
            "#,
        )
        .unwrap();
        assert_eq!(config.policy.issuer_org, "Org1MSP");
        assert_eq!(config.policy.revoker_org, "Org3MSP");
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_malformed_toml() {
        let err = RegistryConfig::from_toml_str("[policy\nissuer_org = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_wrong_field_type() {
        let err = RegistryConfig::from_toml_str("[storage]\nflush_every_write = \"yes\"")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_default_policy_builds() {
        let policy = PolicyConfig::default().to_access_policy().unwrap();
        assert_eq!(policy, AccessPolicy::default());
    }

    #[test]
    fn test_role_overlap_rejected() {
        let config = PolicyConfig {
            issuer_org: "Org1MSP".to_owned(),
            revoker_org: "Org1MSP".to_owned(),
        };
        let err = config.to_access_policy().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Policy(PolicyError::RoleOverlap(org)) if org.as_str() == "Org1MSP"
        ));
    }

    #[test]
    fn test_empty_org_rejected() {
        let config = PolicyConfig {
            issuer_org: String::new(),
            revoker_org: "Org2MSP".to_owned(),
        };
        assert!(matches!(
            config.to_access_policy(),
            Err(ConfigError::Policy(PolicyError::EmptyOrg(_)))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("certreg.toml");
        fs::write(&path, FULL_CONFIG).unwrap();

        let config = RegistryConfig::load(&path).unwrap();
        assert_eq!(config.storage.dbname, "certs");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = RegistryConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { path: p, .. } if p == path));
    }
}
