//! `dev_addr`: development server address.
//!
//! # Example
//!
//! ```yaml
//! dev_addr: 0.0.0.0:8000      # all interfaces (LAN accessible)
//! dev_addr: localhost:3000    # same as 127.0.0.1:3000
//! ```

use super::{expect_str, lookup};
use crate::config::{KeyPath, ResolveError, ValueMap};
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8000;

/// Development server settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServeConfig {
    pub dev_addr: SocketAddr,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            dev_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
        }
    }
}

impl ServeConfig {
    pub(crate) fn resolve(doc: &ValueMap) -> Result<Self, ResolveError> {
        let key = KeyPath::root("dev_addr");
        let Some(value) = lookup(doc, "dev_addr") else {
            return Ok(Self::default());
        };
        let text = expect_str(value, &key)?;
        let dev_addr = parse_addr(text).ok_or_else(|| ResolveError::InvalidValue {
            key,
            value: text.to_string(),
            reason: "expected `host:port`, e.g. 127.0.0.1:8000".to_string(),
        })?;
        Ok(Self { dev_addr })
    }

    pub(crate) fn write_into(&self, doc: &mut ValueMap) {
        if *self != Self::default() {
            doc.insert("dev_addr".into(), self.dev_addr.to_string().into());
        }
    }
}

fn parse_addr(text: &str) -> Option<SocketAddr> {
    if let Ok(addr) = text.parse() {
        return Some(addr);
    }
    let port = text.strip_prefix("localhost:")?.parse().ok()?;
    Some(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigValue;
    use std::net::Ipv6Addr;

    fn resolve(text: &str) -> Result<ServeConfig, ResolveError> {
        let value: ConfigValue = serde_yaml::from_str(text).unwrap();
        ServeConfig::resolve(value.as_map().unwrap())
    }

    #[test]
    fn test_default_addr() {
        let serve = resolve("site_name: Docs").unwrap();
        assert_eq!(serve.dev_addr.to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_addr_variants() {
        assert_eq!(
            resolve("dev_addr: 0.0.0.0:8080").unwrap().dev_addr,
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080)
        );
        assert_eq!(
            resolve("dev_addr: '[::1]:9000'").unwrap().dev_addr,
            SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 9000)
        );
        assert_eq!(resolve("dev_addr: localhost:3000").unwrap().dev_addr.port(), 3000);
    }

    #[test]
    fn test_invalid_addr() {
        for text in ["dev_addr: 8000", "dev_addr: example.com:80", "dev_addr: 127.0.0.1:99999"] {
            let err = resolve(text).unwrap_err();
            assert_eq!(err.key().as_str(), "dev_addr", "{text}");
        }
    }
}
