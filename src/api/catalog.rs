use crate::core::errors::{ClientError, MissingParameter};
use crate::core::types::HttpMethod;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Commands dispatched as POST. A fixed list by remote convention; the
/// manifest's method hint is carried but never consulted for the verb.
const POST_COMMANDS: &[&str] = &["login", "deployVirtualMachine"];

/// Declared schema of a single command parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParamSpec {
    #[serde(default)]
    pub required: bool,
    /// Descriptive only, e.g. "uuid" or "boolean"; carried into error
    /// messages but never enforced.
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// One command in the pre-generated manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandEntry {
    #[serde(default, rename = "httpmethod")]
    pub http_method_hint: Option<String>,
    /// Parameter schemas keyed by name, in manifest-declared order.
    #[serde(default)]
    pub params: IndexMap<String, ParamSpec>,
}

/// The manifest of supported commands, read-only after load.
#[derive(Debug, Clone, Default)]
pub struct CommandCatalog {
    entries: IndexMap<String, CommandEntry>,
}

impl CommandCatalog {
    /// Build a catalog from already-parsed entries
    #[must_use]
    pub fn from_entries(entries: IndexMap<String, CommandEntry>) -> Self {
        Self { entries }
    }

    /// Parse a manifest from a JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ClientError> {
        let entries = serde_json::from_reader(reader)
            .map_err(|e| ClientError::ManifestInvalid(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Load a manifest from a JSON file
    ///
    /// An unreadable file is a configuration failure, not a transient fault.
    pub fn from_path(path: &Path) -> Result<Self, ClientError> {
        let file = File::open(path)
            .map_err(|e| ClientError::ManifestMissing(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(BufReader::new(file))
    }

    #[must_use]
    pub fn get(&self, command: &str) -> Option<&CommandEntry> {
        self.entries.get(command)
    }

    #[must_use]
    pub fn contains(&self, command: &str) -> bool {
        self.entries.contains_key(command)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check a command invocation against the manifest
    ///
    /// Fails with `UnknownCommand` for commands outside the manifest, and
    /// with `MissingParameters` naming every absent required parameter in
    /// the entry's declared order.
    pub fn validate(
        &self,
        command: &str,
        options: &BTreeMap<String, String>,
    ) -> Result<(), ClientError> {
        let entry = self
            .entries
            .get(command)
            .ok_or_else(|| ClientError::UnknownCommand(command.to_string()))?;

        let missing: Vec<MissingParameter> = entry
            .params
            .iter()
            .filter(|(name, spec)| spec.required && !options.contains_key(*name))
            .map(|(name, spec)| MissingParameter {
                name: name.clone(),
                kind: spec.kind.clone(),
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ClientError::MissingParameters {
                command: command.to_string(),
                missing,
            })
        }
    }

    /// Verb for a command: POST for the fixed state-mutating list, GET
    /// otherwise
    #[must_use]
    pub fn method_for(&self, command: &str) -> HttpMethod {
        if POST_COMMANDS.contains(&command) {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        }
    }
}

/// Where the catalog comes from when the client first needs it.
#[derive(Debug, Clone)]
pub enum ManifestSource {
    /// Pre-generated JSON file on disk
    Path(PathBuf),
    /// Entries supplied directly, mainly for tests and embedding
    Inline(CommandCatalog),
}

impl ManifestSource {
    /// Load the catalog from this source
    pub fn load(&self) -> Result<CommandCatalog, ClientError> {
        match self {
            Self::Path(path) => CommandCatalog::from_path(path),
            Self::Inline(catalog) => Ok(catalog.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> CommandCatalog {
        let manifest = r#"{
            "listZones": {
                "httpmethod": "GET",
                "params": {
                    "available": {"required": false, "type": "boolean"}
                }
            },
            "deployVirtualMachine": {
                "httpmethod": "GET",
                "params": {
                    "serviceofferingid": {"required": true, "type": "uuid"},
                    "templateid": {"required": true, "type": "uuid"},
                    "zoneid": {"required": true, "type": "uuid"},
                    "name": {"required": false, "type": "string"}
                }
            },
            "login": {
                "params": {
                    "username": {"required": true, "type": "string"},
                    "password": {"required": true, "type": "string"}
                }
            }
        }"#;
        CommandCatalog::from_reader(manifest.as_bytes()).unwrap()
    }

    fn options(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn unknown_command_is_rejected() {
        let catalog = test_catalog();
        assert!(matches!(
            catalog.validate("doesNotExist", &BTreeMap::new()),
            Err(ClientError::UnknownCommand(command)) if command == "doesNotExist"
        ));
    }

    #[test]
    fn missing_required_parameters_are_all_reported_in_declared_order() {
        let catalog = test_catalog();
        let err = catalog
            .validate("deployVirtualMachine", &BTreeMap::new())
            .unwrap_err();
        match err {
            ClientError::MissingParameters { command, missing } => {
                assert_eq!(command, "deployVirtualMachine");
                let names: Vec<&str> = missing.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, ["serviceofferingid", "templateid", "zoneid"]);
                assert_eq!(missing[0].kind, "uuid");
            }
            other => panic!("expected MissingParameters, got {:?}", other),
        }
    }

    #[test]
    fn partially_supplied_parameters_report_the_rest() {
        let catalog = test_catalog();
        let err = catalog
            .validate(
                "deployVirtualMachine",
                &options(&[("zoneid", "1"), ("name", "vm-01")]),
            )
            .unwrap_err();
        match err {
            ClientError::MissingParameters { missing, .. } => {
                let names: Vec<&str> = missing.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, ["serviceofferingid", "templateid"]);
            }
            other => panic!("expected MissingParameters, got {:?}", other),
        }
    }

    #[test]
    fn complete_invocation_validates() {
        let catalog = test_catalog();
        let result = catalog.validate(
            "deployVirtualMachine",
            &options(&[
                ("serviceofferingid", "s-1"),
                ("templateid", "t-1"),
                ("zoneid", "z-1"),
            ]),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn optional_parameters_are_never_required() {
        let catalog = test_catalog();
        assert!(catalog.validate("listZones", &BTreeMap::new()).is_ok());
    }

    #[test]
    fn fixed_post_list_overrides_manifest_hint() {
        let catalog = test_catalog();
        // deployVirtualMachine is hinted GET in the manifest on purpose.
        assert_eq!(catalog.method_for("deployVirtualMachine"), HttpMethod::Post);
        assert_eq!(catalog.method_for("login"), HttpMethod::Post);
        assert_eq!(catalog.method_for("listZones"), HttpMethod::Get);
        assert_eq!(catalog.method_for("listTemplates"), HttpMethod::Get);
    }

    #[test]
    fn missing_manifest_file_is_a_configuration_error() {
        let result = CommandCatalog::from_path(Path::new("/nonexistent/commands.json"));
        assert!(matches!(result, Err(ClientError::ManifestMissing(_))));
    }

    #[test]
    fn malformed_manifest_is_rejected() {
        let result = CommandCatalog::from_reader("not json".as_bytes());
        assert!(matches!(result, Err(ClientError::ManifestInvalid(_))));
    }
}
