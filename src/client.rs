//! High-level ZMF operations
//!
//! One method per supported action. Each builds a flat payload from its
//! arguments, issues it through the session wrapper with the right verb,
//! and returns the unwrapped result (or a derived scalar such as a package
//! id). Multi-group operations run strictly sequentially and abort on the
//! first failing group; already-submitted groups stay submitted remotely.

use log::info;
use serde_json::Value;

use crate::config::ConfigMap;
use crate::error::ZmfError;
use crate::payload::{Payload, extension, group_by_type, int_or_zero, stem};
use crate::session::{BrowseOutcome, ZmfResult, ZmfSession};

/// Client for the change-management operations, stateless beyond the one
/// HTTP session and the acting user id
#[derive(Debug)]
pub struct ZmfClient {
    session: ZmfSession,
    user: String,
}

impl ZmfClient {
    /// Build a client from base URL and basic credentials
    pub fn new(url: &str, user: &str, password: &str) -> Result<Self, ZmfError> {
        Ok(Self {
            session: ZmfSession::new(url, user, password)?,
            user: user.to_string(),
        })
    }

    /// Checkin components from a partitioned dataset, one request per
    /// component type
    pub fn checkin(
        &self,
        package: &str,
        pds: &str,
        components: &[String],
    ) -> Result<(), ZmfError> {
        for group in group_by_type(components) {
            let payload = Payload::new()
                .set("package", package)
                .set("chkInSourceLocation", 1)
                .set("sourceStorageMeans", 6)
                .set("componentType", &group.component_type)
                .set("sourceLib", format!("{pds}.{}", group.component_type))
                .set_all("targetComponent", &group.stems);
            self.session.result_put("component/checkin", &payload)?;
        }
        Ok(())
    }

    /// Build source-like components, one request per component type
    pub fn build(
        &self,
        package: &str,
        components: &[String],
        build_proc: &str,
        language: &str,
    ) -> Result<(), ZmfError> {
        for group in group_by_type(components) {
            let payload = Payload::new()
                .set("package", package)
                .set("buildProc", build_proc)
                .set("language", language)
                .set_jobcard(&self.user, "build")
                .set("componentType", &group.component_type)
                .set_all("component", &group.stems);
            self.session.result_put("component/build", &payload)?;
        }
        Ok(())
    }

    /// Scratch components from a package, one request per component
    pub fn scratch(&self, package: &str, components: &[String]) -> Result<(), ZmfError> {
        for component in components {
            let payload = Payload::new()
                .set("package", package)
                .set("componentType", extension(component).to_uppercase())
                .set("oldComponent", stem(component));
            self.session.result_put("component/scratch", &payload)?;
        }
        Ok(())
    }

    /// Delete a single component from a package
    pub fn delete_component(&self, package: &str, component: &str) -> Result<(), ZmfError> {
        let payload = Payload::new()
            .set("package", package)
            .set("componentType", extension(component).to_uppercase())
            .set("oldComponent", stem(component));
        self.session.result_delete("component", &payload)?;
        Ok(())
    }

    /// Audit a package
    pub fn audit(&self, package: &str) -> Result<(), ZmfError> {
        let payload = Payload::new()
            .set("package", package)
            .set_jobcard(&self.user, "audit");
        self.session.result_put("package/audit", &payload)?;
        Ok(())
    }

    /// Promote a package to a site/level
    pub fn promote(
        &self,
        package: &str,
        site: &str,
        level: &str,
        name: Option<&str>,
    ) -> Result<(), ZmfError> {
        self.move_package("package/promote", "promote", package, site, level, name)
    }

    /// Demote a package from a site/level
    pub fn demote(
        &self,
        package: &str,
        site: &str,
        level: &str,
        name: Option<&str>,
    ) -> Result<(), ZmfError> {
        self.move_package("package/demote", "demote", package, site, level, name)
    }

    fn move_package(
        &self,
        path: &str,
        action: &str,
        package: &str,
        site: &str,
        level: &str,
        name: Option<&str>,
    ) -> Result<(), ZmfError> {
        let mut payload = Payload::new()
            .set("package", package)
            .set("promotionSiteName", site)
            .set("promotionLevel", level)
            .set_jobcard(&self.user, action);
        if let Some(name) = name {
            payload = payload.set("promotionName", name);
        }
        self.session.result_put(path, &payload)?;
        Ok(())
    }

    /// Freeze a package
    pub fn freeze(&self, package: &str) -> Result<(), ZmfError> {
        let payload = Payload::new()
            .set("package", package)
            .set_jobcard(&self.user, "freeze");
        self.session.result_put("package/freeze", &payload)?;
        Ok(())
    }

    /// Revert a package
    pub fn revert(&self, package: &str) -> Result<(), ZmfError> {
        let payload = Payload::new()
            .set("package", package)
            .set_jobcard(&self.user, "revert");
        self.session.result_put("package/revert", &payload)?;
        Ok(())
    }

    /// Search packages by application-name prefix and exact title.
    ///
    /// Among candidates whose `packageTitle` equals `title` exactly, picks
    /// the numerically highest `packageId` (non-numeric or missing ids rank
    /// as zero) and returns its `package` field. `None` means no exact
    /// match, which callers use to fall back to package creation.
    pub fn search_package(&self, app: &str, title: &str) -> Result<Option<String>, ZmfError> {
        let payload = Payload::new().set("package", format!("{app}*"));
        let result = self.session.result_get("package/search", &payload)?;

        let best = result
            .unwrap_or_default()
            .into_iter()
            .filter(|row| {
                row.get("packageTitle").and_then(Value::as_str) == Some(title)
            })
            .max_by_key(|row| {
                row.get("packageId").map_or(0, int_or_zero)
            })
            .and_then(|row| {
                row.get("package")
                    .and_then(Value::as_str)
                    .map(ToString::to_string)
            });
        Ok(best)
    }

    /// Create a package from a flat config mapping; returns the freshly
    /// assigned package id
    pub fn create_package(&self, config: &ConfigMap) -> Result<String, ZmfError> {
        let payload = Payload::new().merge(config);
        let result = self.session.result_post("package", &payload)?;
        result
            .unwrap_or_default()
            .first()
            .and_then(|row| row.get("package"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or_else(|| ZmfError::Rejected {
                message: "package creation returned no package id".to_string(),
            })
    }

    /// Resolve a package id from a config mapping.
    ///
    /// Three-branch fallback: a literal `package` value in the config wins
    /// without any network call; otherwise search by `applName` prefix and
    /// exact `packageTitle`; when the search finds no exact match, create a
    /// new package from the same fields.
    pub fn get_package(&self, config: &ConfigMap) -> Result<String, ZmfError> {
        if let Some(package) = config.get("package").and_then(Value::as_str)
            && !package.is_empty()
        {
            return Ok(package.to_string());
        }

        let app = config
            .get("applName")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let title = config
            .get("packageTitle")
            .and_then(Value::as_str)
            .unwrap_or_default();

        match self.search_package(app, title)? {
            Some(package) => Ok(package),
            None => {
                info!("no package matching '{title}' for {app}, creating one");
                self.create_package(config)
            }
        }
    }

    /// Delete a package
    pub fn delete_package(&self, package: &str) -> Result<(), ZmfError> {
        let payload = Payload::new().set("package", package);
        self.session.result_delete("package", &payload)?;
        Ok(())
    }

    /// List the components of a package
    pub fn components(&self, package: &str) -> Result<Option<ZmfResult>, ZmfError> {
        let payload = Payload::new().set("package", package);
        self.session.result_get("component", &payload)
    }

    /// Load detail records for one component of a package
    pub fn load(&self, package: &str, component: &str) -> Result<Option<ZmfResult>, ZmfError> {
        let payload = Payload::new()
            .set("package", package)
            .set("componentType", extension(component).to_uppercase())
            .set("component", stem(component));
        self.session.result_get("component/load", &payload)
    }

    /// List the packages a component appears in
    pub fn packagelist(&self, component: &str) -> Result<Option<ZmfResult>, ZmfError> {
        let mut payload = Payload::new().set("component", stem(component));
        let tp = extension(component);
        if !tp.is_empty() {
            payload = payload.set("componentType", tp.to_uppercase());
        }
        self.session.result_get("component/packagelist", &payload)
    }

    /// Browse a component's source.
    ///
    /// The endpoint answers with a raw attachment body on success and a
    /// JSON error envelope otherwise; an envelope that somehow carries a
    /// result is rendered as pretty JSON.
    pub fn browse(&self, package: &str, component: &str) -> Result<String, ZmfError> {
        let payload = Payload::new()
            .set("package", package)
            .set("componentType", extension(component).to_uppercase())
            .set("oldComponent", stem(component));
        match self.session.raw_get("component/browse", &payload)? {
            BrowseOutcome::Attachment(body) => Ok(body),
            BrowseOutcome::Envelope(result) => {
                Ok(serde_json::to_string_pretty(&result.unwrap_or_default())?)
            }
        }
    }
}
