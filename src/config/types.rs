//! Runtime configuration types: deployment variant and server settings.

use crate::error::ConfigError;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Which generation of the rental API a process serves. Each variant adds
/// entities on top of the previous one and owns its own database file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Movies only.
    Movies,
    /// Movies and clients.
    Clients,
    /// Movies, clients and rents.
    Rents,
}

impl Variant {
    pub fn has_clients(self) -> bool {
        matches!(self, Variant::Clients | Variant::Rents)
    }

    pub fn has_rents(self) -> bool {
        matches!(self, Variant::Rents)
    }

    /// Later variants tighten column constraints (NOT NULL, UNIQUE, FK declarations).
    pub fn strict_schema(self) -> bool {
        matches!(self, Variant::Rents)
    }

    pub fn default_database_url(self) -> &'static str {
        match self {
            Variant::Movies => "sqlite://data.db",
            Variant::Clients => "sqlite://data2.db",
            Variant::Rents => "sqlite://data3.db",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Movies => "movies",
            Variant::Clients => "clients",
            Variant::Rents => "rents",
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "movies" | "1" => Ok(Variant::Movies),
            "clients" | "2" => Ok(Variant::Clients),
            "rents" | "3" => Ok(Variant::Rents),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub variant: Variant,
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Upper bound on request body size in bytes.
    pub body_limit: usize,
}
