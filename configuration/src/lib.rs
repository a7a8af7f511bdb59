use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use record_types::RecordType;
use resolution::{RecordStore, StoreError};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5353;

pub const DEFAULT_MAX_IN_FLIGHT: usize = 1024;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("record '{name}' has unknown type '{record_type}'")]
    UnknownType { name: String, record_type: String },

    #[error("record '{name}' rejected: {source}")]
    Store {
        name: String,
        #[source]
        source: StoreError,
    },
}

pub fn get_config<'de, T: Deserialize<'de>>(
    config_path: PathBuf,
) -> Result<T, config::ConfigError> {
    let f = config::File::from(config_path);
    let config = config::Config::builder()
        .add_source(f)
        .build()?;
    config.try_deserialize::<T>()
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ResponderConfiguration {
    pub server: ServerConfiguration,
    pub records: Vec<RecordConfiguration>,
}

impl Default for ResponderConfiguration {
    fn default() -> Self {
        Self {
            server: ServerConfiguration::default(),
            records: default_records(),
        }
    }
}

impl ResponderConfiguration {
    /// Reads `config_path` when given, otherwise falls back to the
    /// compiled-in defaults. A file without `[[records]]` keeps the
    /// compiled-in table.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigurationError> {
        match config_path {
            Some(path) => Ok(get_config(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn record_store(&self) -> Result<RecordStore, ConfigurationError> {
        let mut builder = RecordStore::builder();

        for record in &self.records {
            let record_type = record.record_type.parse::<RecordType>().map_err(|_| {
                ConfigurationError::UnknownType {
                    name: record.name.clone(),
                    record_type: record.record_type.clone(),
                }
            })?;

            builder = builder
                .insert(&record.name, record_type, &record.value)
                .map_err(|source| ConfigurationError::Store {
                    name: record.name.clone(),
                    source,
                })?;
        }

        Ok(builder.build())
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfiguration {
    ip_address: IpAddr,
    port: u16,
    // 0 disables the limit
    max_in_flight: usize,
}

impl Default for ServerConfiguration {
    fn default() -> Self {
        Self {
            ip_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }
}

impl ServerConfiguration {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.ip_address, self.port)
    }

    pub fn override_port(&mut self, port: u16) {
        self.port = port;
    }

    pub fn max_in_flight(&self) -> Option<usize> {
        match self.max_in_flight {
            0 => None,
            n => Some(n),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordConfiguration {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
}

impl RecordConfiguration {
    pub fn new(name: &str, record_type: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: record_type.to_string(),
            value: value.to_string(),
        }
    }
}

fn default_records() -> Vec<RecordConfiguration> {
    vec![
        RecordConfiguration::new("example.com", "A", "93.184.216.34"),
        RecordConfiguration::new("example.com", "AAAA", "2606:2800:220:1:248:1893:25c8:1946"),
        RecordConfiguration::new("localhost", "A", "127.0.0.1"),
        RecordConfiguration::new("localhost", "AAAA", "::1"),
        RecordConfiguration::new("1.0.0.127.in-addr.arpa", "PTR", "localhost"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(file_name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", file_name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_without_file() {
        let cfg = ResponderConfiguration::load(None).unwrap();

        assert_eq!(cfg.server.bind_address(), "0.0.0.0:5353".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.server.max_in_flight(), Some(DEFAULT_MAX_IN_FLIGHT));

        let store = cfg.record_store().unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.get("example.com", RecordType::A), Some("93.184.216.34"));
        assert_eq!(store.get("1.0.0.127.in-addr.arpa", RecordType::PTR), Some("localhost"));
    }

    #[test]
    fn file_replaces_server_and_records() {
        let path = write_config(
            "responder-full",
            r#"
[server]
ip_address = "127.0.0.1"
port = 53
max_in_flight = 0

[[records]]
name = "printer.lan"
type = "a"
value = "192.168.1.20"

[[records]]
name = "20.1.168.192.in-addr.arpa"
type = "PTR"
value = "printer.lan"
"#,
        );

        let cfg = ResponderConfiguration::load(Some(path.clone())).unwrap();
        fs::remove_file(path).unwrap();

        assert_eq!(cfg.server.bind_address(), "127.0.0.1:53".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.server.max_in_flight(), None);

        let store = cfg.record_store().unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("PRINTER.lan", RecordType::A), Some("192.168.1.20"));
        assert_eq!(store.get("example.com", RecordType::A), None);
    }

    #[test]
    fn file_without_records_keeps_defaults() {
        let path = write_config("responder-server-only", "[server]\nport = 10053\n");

        let mut cfg = ResponderConfiguration::load(Some(path.clone())).unwrap();
        fs::remove_file(path).unwrap();

        assert_eq!(cfg.server.bind_address().port(), 10053);
        assert_eq!(cfg.records.len(), 5);

        cfg.server.override_port(0);
        assert_eq!(cfg.server.bind_address().port(), 0);
    }

    #[test]
    fn unknown_record_type_is_rejected() {
        let cfg = ResponderConfiguration {
            server: ServerConfiguration::default(),
            records: vec![RecordConfiguration::new("example.com", "BOGUS", "x")],
        };

        assert!(matches!(
            cfg.record_store(),
            Err(ConfigurationError::UnknownType { .. })
        ));
    }

    #[test]
    fn unsupported_record_type_is_rejected() {
        let cfg = ResponderConfiguration {
            server: ServerConfiguration::default(),
            records: vec![RecordConfiguration::new("example.com", "MX", "mail.example.com")],
        };

        assert!(matches!(
            cfg.record_store(),
            Err(ConfigurationError::Store {
                source: StoreError::UnsupportedType(RecordType::MX),
                ..
            })
        ));
    }

    #[test]
    fn malformed_ptr_target_is_rejected() {
        let target = format!("{}.lan", "h".repeat(64));
        let cfg = ResponderConfiguration {
            server: ServerConfiguration::default(),
            records: vec![RecordConfiguration::new("1.0.0.127.in-addr.arpa", "PTR", &target)],
        };

        assert!(matches!(
            cfg.record_store(),
            Err(ConfigurationError::Store {
                source: StoreError::InvalidTarget { .. },
                ..
            })
        ));
    }

    #[test]
    fn missing_file_fails_to_load() {
        let path = std::env::temp_dir().join("responder-does-not-exist.toml");

        assert!(matches!(
            ResponderConfiguration::load(Some(path)),
            Err(ConfigurationError::Load(_))
        ));
    }
}
