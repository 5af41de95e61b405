// Loading metro topologies from JSON or TOML files

use std::fs;
use std::path::Path;

use crate::error::NetworkError;
use crate::models::{MetroNetwork, Topology};

/// Supported topology file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyFormat {
    Json,
    Toml,
}

impl TopologyFormat {
    /// Picks the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, NetworkError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(TopologyFormat::Json),
            Some("toml") => Ok(TopologyFormat::Toml),
            _ => Err(NetworkError::UnsupportedFileType(
                path.display().to_string(),
            )),
        }
    }
}

/// Decode a topology document; `source` names the origin in error messages
pub fn parse_topology(
    contents: &str,
    format: TopologyFormat,
    source: &str,
) -> Result<Topology, NetworkError> {
    match format {
        TopologyFormat::Json => {
            serde_json::from_str(contents).map_err(|e| NetworkError::Json {
                path: source.to_string(),
                source: e,
            })
        }
        TopologyFormat::Toml => toml::from_str(contents).map_err(|e| NetworkError::Toml {
            path: source.to_string(),
            source: e,
        }),
    }
}

/// Read a topology file
pub fn load_topology(path: &Path) -> Result<Topology, NetworkError> {
    let format = TopologyFormat::from_path(path)?;
    let contents = fs::read_to_string(path).map_err(|e| NetworkError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_topology(&contents, format, &path.display().to_string())
}

/// Read a topology file and build the network it describes
pub fn load_network(path: &Path) -> Result<MetroNetwork, NetworkError> {
    log::info!("loading metro topology from {}", path.display());
    let network = MetroNetwork::from_topology(load_topology(path)?)?;
    log::info!("loaded {} stops", network.len());
    Ok(network)
}
