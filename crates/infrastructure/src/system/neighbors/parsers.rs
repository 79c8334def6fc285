use ferrous_neighbors_domain::Neighbor;
use std::io::{self, BufRead};
use tracing::trace;

/// Converts one dialect's text into neighbors, in input order.
///
/// Lines that do not yield a valid entry (headers, banners, incomplete or
/// failed entries, zero MACs, non-UTF-8 bytes) are skipped. Only a read
/// error aborts.
pub type ParseFn = fn(&mut dyn BufRead) -> io::Result<Vec<Neighbor>>;

/// Known neighbor table text formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `/proc/net/arp`; OpenWrt's `arp -a` prints the same table.
    ProcNetArp,
    /// `ip neighbor show`
    IpNeigh,
    /// `arp -a` on macOS, the BSDs and Linux net-tools/busybox
    ArpA,
    /// `arp -a` on Windows
    ArpAWindows,
}

impl Dialect {
    pub fn parser(self) -> ParseFn {
        match self {
            Dialect::ProcNetArp => parse_proc_net_arp,
            Dialect::IpNeigh => parse_ip_neigh,
            Dialect::ArpA => parse_arp_a,
            Dialect::ArpAWindows => parse_arp_a_windows,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::ProcNetArp => "proc_net_arp",
            Dialect::IpNeigh => "ip_neigh",
            Dialect::ArpA => "arp_a",
            Dialect::ArpAWindows => "arp_a_windows",
        }
    }
}

/// Reads the next line with invalid UTF-8 replaced, without the line ending.
/// Returns `None` at end of input.
fn next_line(reader: &mut dyn BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(buf);
    Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
}

fn skipped(dialect: Dialect, line: &str) {
    if !line.trim().is_empty() {
        trace!(dialect = dialect.as_str(), line, "Skipping neighbor line");
    }
}

/// ```text
/// IP address       HW type     Flags       HW address            Mask     Device
/// 192.168.1.2      0x1         0x2         ab:cd:ef:ab:cd:ef     *        wan
/// ```
pub fn parse_proc_net_arp(reader: &mut dyn BufRead) -> io::Result<Vec<Neighbor>> {
    let mut neighbors = Vec::new();
    let mut buf = Vec::new();

    while let Some(line) = next_line(reader, &mut buf)? {
        let fields: Vec<&str> = line.split_whitespace().collect();

        match fields.as_slice() {
            [ip, _hw_type, _flags, mac, ..] => match Neighbor::parse(ip, mac) {
                Some(n) => neighbors.push(n),
                None => skipped(Dialect::ProcNetArp, &line),
            },
            _ => skipped(Dialect::ProcNetArp, &line),
        }
    }

    Ok(neighbors)
}

/// ```text
/// 192.168.1.2 dev enp0s3 lladdr ab:cd:ef:ab:cd:ef DELAY
/// ::ffff:ffff dev enp0s3 lladdr ef:cd:ab:ef:cd:ab router STALE
/// 192.168.1.9 dev enp0s3  FAILED
/// ```
pub fn parse_ip_neigh(reader: &mut dyn BufRead) -> io::Result<Vec<Neighbor>> {
    let mut neighbors = Vec::new();
    let mut buf = Vec::new();

    while let Some(line) = next_line(reader, &mut buf)? {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let parsed = fields.first().and_then(|ip| {
            let mac = token_after(&fields, "lladdr")?;
            Neighbor::parse(ip, mac)
        });

        match parsed {
            Some(n) => neighbors.push(n),
            None => skipped(Dialect::IpNeigh, &line),
        }
    }

    Ok(neighbors)
}

/// ```text
/// ? (192.168.1.2) at ab:cd:ef:ab:cd:ef on en0 ifscope [ethernet]
/// printer.lan (192.168.1.7) at (incomplete) on en0 ifscope [ethernet]
/// ```
pub fn parse_arp_a(reader: &mut dyn BufRead) -> io::Result<Vec<Neighbor>> {
    let mut neighbors = Vec::new();
    let mut buf = Vec::new();

    while let Some(line) = next_line(reader, &mut buf)? {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let parsed = match fields.as_slice() {
            [host, ip, ..] => ip
                .strip_prefix('(')
                .and_then(|ip| ip.strip_suffix(')'))
                .zip(token_after(&fields, "at"))
                .and_then(|(ip, mac)| Neighbor::parse(ip, mac))
                .map(|n| n.with_name(host)),
            _ => None,
        };

        match parsed {
            Some(n) => neighbors.push(n),
            None => skipped(Dialect::ArpA, &line),
        }
    }

    Ok(neighbors)
}

/// ```text
/// Interface: 192.168.1.1 --- 0x7
///   Internet Address      Physical Address      Type
///   192.168.1.2           ab-cd-ef-ab-cd-ef     dynamic
/// ```
pub fn parse_arp_a_windows(reader: &mut dyn BufRead) -> io::Result<Vec<Neighbor>> {
    let mut neighbors = Vec::new();
    let mut buf = Vec::new();

    while let Some(line) = next_line(reader, &mut buf)? {
        let fields: Vec<&str> = line.split_whitespace().collect();

        match fields.as_slice() {
            [ip, mac, _kind] => match Neighbor::parse(ip, mac) {
                Some(n) => neighbors.push(n),
                None => skipped(Dialect::ArpAWindows, &line),
            },
            _ => skipped(Dialect::ArpAWindows, &line),
        }
    }

    Ok(neighbors)
}

fn token_after<'a>(fields: &[&'a str], marker: &str) -> Option<&'a str> {
    let pos = fields.iter().position(|f| *f == marker)?;
    fields.get(pos + 1).copied()
}
