use serde::Deserialize;

pub const WEB_PROCESS: &str = "web";
pub const STARTED_STATUS: &str = "started";

/// Body of `GET /apps/{app}`; only the unit list is of interest.
#[derive(Debug, Default, Deserialize)]
pub struct AppInfo {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub units: Vec<Unit>,
}

/// One running instance of an application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Unit {
    #[serde(rename = "ProcessName", default)]
    pub process_name: String,

    #[serde(rename = "Status", default)]
    pub status: String,

    #[serde(rename = "Address", default)]
    pub address: Option<UnitAddress>,

    #[serde(rename = "IP", alias = "Ip", default)]
    pub ip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnitAddress {
    #[serde(rename = "Scheme")]
    pub scheme: String,

    #[serde(rename = "Host")]
    pub host: String,
}

/// Why a unit is left out of the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason<'a> {
    Process(&'a str),
    Status(&'a str),
}

impl Unit {
    /// Only started web units serve traffic worth probing.
    pub fn skip_reason(&self) -> Option<SkipReason<'_>> {
        if self.process_name != WEB_PROCESS {
            Some(SkipReason::Process(&self.process_name))
        } else if self.status != STARTED_STATUS {
            Some(SkipReason::Status(&self.status))
        } else {
            None
        }
    }

    /// Label used when logging about the unit itself.
    pub fn label(&self) -> &str {
        self.ip
            .as_deref()
            .or_else(|| self.address.as_ref().map(|a| a.host.as_str()))
            .unwrap_or("unknown")
    }

    /// `{scheme}://{host}{path}`, or `None` when the unit has no address.
    pub fn healthcheck_url(&self, path: &str) -> Option<String> {
        self.address
            .as_ref()
            .map(|addr| format!("{}://{}{}", addr.scheme, addr.host, path))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Unit>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let units: Option<Vec<Unit>> = Deserialize::deserialize(deserializer)?;
    Ok(units.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(process: &str, status: &str) -> Unit {
        Unit {
            process_name: process.to_string(),
            status: status.to_string(),
            address: Some(UnitAddress {
                scheme: "http".to_string(),
                host: "10.0.0.1:8080".to_string(),
            }),
            ip: Some("10.0.0.1".to_string()),
        }
    }

    #[test]
    fn test_parses_control_plane_payload() {
        let body = r#"{
            "name": "myapp",
            "units": [
                {"ID": "a1", "ProcessName": "web", "Status": "started",
                 "Address": {"Scheme": "http", "Host": "10.0.0.1:8080"}, "IP": "10.0.0.1"},
                {"ID": "b2", "ProcessName": "worker", "Status": "started",
                 "Address": {"Scheme": "http", "Host": "10.0.0.2:8080"}, "Ip": "10.0.0.2"}
            ]
        }"#;

        let info: AppInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.units.len(), 2);
        assert_eq!(info.units[0], unit("web", "started"));
        assert_eq!(info.units[1].process_name, "worker");
        assert_eq!(info.units[1].ip.as_deref(), Some("10.0.0.2"));
    }

    #[test]
    fn test_missing_or_null_units_is_empty() {
        let info: AppInfo = serde_json::from_str(r#"{"name": "myapp"}"#).unwrap();
        assert!(info.units.is_empty());

        let info: AppInfo = serde_json::from_str(r#"{"units": null}"#).unwrap();
        assert!(info.units.is_empty());
    }

    #[test]
    fn test_unit_without_address() {
        let info: AppInfo = serde_json::from_str(
            r#"{"units": [{"ProcessName": "web", "Status": "started", "Address": null}]}"#,
        )
        .unwrap();

        let unit = &info.units[0];
        assert_eq!(unit.address, None);
        assert_eq!(unit.healthcheck_url("/healthcheck"), None);
        assert_eq!(unit.label(), "unknown");
    }

    #[test]
    fn test_skip_reason() {
        assert_eq!(unit("web", "started").skip_reason(), None);
        assert_eq!(
            unit("worker", "started").skip_reason(),
            Some(SkipReason::Process("worker"))
        );
        assert_eq!(
            unit("web", "stopped").skip_reason(),
            Some(SkipReason::Status("stopped"))
        );
        // process type is checked first
        assert_eq!(
            unit("worker", "error").skip_reason(),
            Some(SkipReason::Process("worker"))
        );
    }

    #[test]
    fn test_healthcheck_url() {
        assert_eq!(
            unit("web", "started").healthcheck_url("/healthcheck").as_deref(),
            Some("http://10.0.0.1:8080/healthcheck")
        );
    }

    #[test]
    fn test_label_falls_back_to_host() {
        let mut u = unit("web", "started");
        u.ip = None;
        assert_eq!(u.label(), "10.0.0.1:8080");
    }
}
