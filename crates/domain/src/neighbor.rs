use crate::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// 48-bit hardware (Ethernet) address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    pub const ZERO: MacAddr = MacAddr([0; 6]);

    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// Unresolved entries are reported with the all-zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 6]
    }
}

/// Accepts `aa:bb:cc:dd:ee:ff` and `aa-bb-cc-dd-ee-ff`, any case.
///
/// Octets may be a single hex digit since BSD `arp` drops the leading zero
/// (`0:1a:2b:3:4:5`).
impl FromStr for MacAddr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidMacAddress(s.to_string());

        let separator = if s.contains(':') {
            ':'
        } else if s.contains('-') {
            '-'
        } else {
            return Err(invalid());
        };

        let mut octets = [0u8; 6];
        let mut parts = s.split(separator);
        for octet in octets.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_hexdigit())
            {
                return Err(invalid());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self(octets))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One entry of the host's neighbor (ARP / NDP) table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbor {
    /// Host name, when the source reports a usable one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ip: IpAddr,
    pub mac: MacAddr,
}

impl Neighbor {
    /// Returns `None` for the all-zero MAC, which marks an unresolved entry.
    pub fn new(ip: IpAddr, mac: MacAddr) -> Option<Self> {
        if mac.is_zero() {
            return None;
        }

        Some(Self {
            name: None,
            ip: ip.to_canonical(),
            mac,
        })
    }

    /// Parses both columns; any failure means the line is skipped.
    pub fn parse(ip: &str, mac: &str) -> Option<Self> {
        let ip = IpAddr::from_str(ip).ok()?;
        let mac = MacAddr::from_str(mac).ok()?;
        Self::new(ip, mac)
    }

    /// Keeps `name` only when it is a valid host name (`?` is not).
    pub fn with_name(mut self, name: &str) -> Self {
        if is_valid_hostname(name) {
            self.name = Some(name.to_string());
        }
        self
    }
}

pub fn is_valid_hostname(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() || name.len() > 253 {
        return false;
    }

    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    })
}
