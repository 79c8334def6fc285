#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_neighbors_domain::{DomainError, MacAddr, Neighbor};
use ferrous_neighbors_infrastructure::system::neighbors::{
    command_fn, CmdSource, Dialect, FsysSource, NeighborFs, NeighborSource, RunCommand,
};
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

pub const PROC_NET_ARP: &str = "
IP address    HW type     Flags       HW address            Mask     Device
192.168.1.2   0x1         0x2         ab:cd:ef:ab:cd:ef     *        wan
::ffff:ffff   0x1         0x2         ef:cd:ab:ef:cd:ab     *        wan";

pub const ARP_A: &str = "
? (192.168.1.2) at ab:cd:ef:ab:cd:ef on en0 ifscope [ethernet]
? (::ffff:ffff) at ef:cd:ab:ef:cd:ab on em0 expires in 100 seconds [ethernet]";

pub const IP_NEIGH: &str = "
192.168.1.2 dev enp0s3 lladdr ab:cd:ef:ab:cd:ef DELAY
::ffff:ffff dev enp0s3 lladdr ef:cd:ab:ef:cd:ab router STALE";

pub const ARP_A_WINDOWS: &str = "
Interface: 192.168.1.1 --- 0x7
  Internet Address      Physical Address      Type
  192.168.1.2           ab-cd-ef-ab-cd-ef     dynamic
  ::ffff:ffff           ef-cd-ab-ef-cd-ab     static
";

pub fn want_neighbors() -> Vec<Neighbor> {
    vec![
        Neighbor::new(
            "192.168.1.2".parse().unwrap(),
            MacAddr::new([0xAB, 0xCD, 0xEF, 0xAB, 0xCD, 0xEF]),
        )
        .unwrap(),
        Neighbor::new(
            "::ffff:ffff".parse().unwrap(),
            MacAddr::new([0xEF, 0xCD, 0xAB, 0xEF, 0xCD, 0xAB]),
        )
        .unwrap(),
    ]
}

/// In-memory filesystem fixture.
#[derive(Default)]
pub struct MemFs {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(name: &str, content: &str) -> Self {
        let fs = Self::new();
        fs.write(name, content);
        fs
    }

    pub fn write(&self, name: &str, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(name.to_string(), content.as_bytes().to_vec());
    }

    pub fn remove(&self, name: &str) {
        self.files.write().unwrap().remove(name);
    }
}

#[async_trait]
impl NeighborFs for MemFs {
    async fn exists(&self, name: &str) -> bool {
        self.files.read().unwrap().contains_key(name)
    }

    async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        self.files
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }
}

/// Scripted command: returns the current output, or fails while `failing`.
#[derive(Clone)]
pub struct FakeCommand {
    output: Arc<RwLock<String>>,
    failing: Arc<AtomicBool>,
    fail_from_call: Arc<AtomicU64>,
    calls: Arc<AtomicU64>,
}

impl FakeCommand {
    pub fn new(output: &str) -> Self {
        Self {
            output: Arc::new(RwLock::new(output.to_string())),
            failing: Arc::new(AtomicBool::new(false)),
            fail_from_call: Arc::new(AtomicU64::new(u64::MAX)),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn failing() -> Self {
        let cmd = Self::new("");
        cmd.set_failing(true);
        cmd
    }

    pub fn set_output(&self, output: &str) {
        *self.output.write().unwrap() = output.to_string();
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Calls numbered `n` and later fail (the first call is 0).
    pub fn fail_from_call(&self, n: u64) {
        self.fail_from_call.store(n, Ordering::SeqCst);
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn runner(&self) -> RunCommand {
        let this = self.clone();
        command_fn(move || {
            let this = this.clone();
            async move {
                let call = this.calls.fetch_add(1, Ordering::SeqCst);
                if this.failing.load(Ordering::SeqCst)
                    || call >= this.fail_from_call.load(Ordering::SeqCst)
                {
                    return Err(DomainError::NeighborCommandFailed(
                        "fake: exit status: 1".to_string(),
                    ));
                }
                Ok(this.output.read().unwrap().clone().into_bytes())
            }
        })
    }

    pub fn source(&self, name: &str, dialect: Dialect) -> NeighborSource {
        NeighborSource::Cmd(CmdSource::new(name, self.runner(), dialect))
    }
}

pub fn fsys_source(fs: Arc<MemFs>, filename: &str) -> NeighborSource {
    NeighborSource::Fsys(FsysSource::new(fs, filename))
}
