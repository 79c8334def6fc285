use super::command::RunCommand;
use super::fs::NeighborFs;
use super::parsers::{parse_proc_net_arp, Dialect, ParseFn};
use ferrous_neighbors_domain::{DomainError, Neighbor};
use std::io;
use std::sync::Arc;

/// Reads the kernel neighbor table straight from a (virtual) file.
pub struct FsysSource {
    fs: Arc<dyn NeighborFs>,
    filename: String,
}

impl FsysSource {
    pub fn new(fs: Arc<dyn NeighborFs>, filename: impl Into<String>) -> Self {
        Self {
            fs,
            filename: filename.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    async fn probe(&self) -> Result<(), DomainError> {
        if self.fs.exists(&self.filename).await {
            Ok(())
        } else {
            Err(DomainError::NeighborSourceUnavailable(format!(
                "{} does not exist",
                self.filename
            )))
        }
    }

    async fn fetch(&self) -> Result<Vec<Neighbor>, DomainError> {
        let content = self.fs.read(&self.filename).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                DomainError::NeighborSourceUnavailable(format!(
                    "{} does not exist",
                    self.filename
                ))
            } else {
                DomainError::IoError(format!("Failed to read {}: {}", self.filename, e))
            }
        })?;

        parse_proc_net_arp(&mut content.as_slice())
            .map_err(|e| DomainError::IoError(format!("Failed to read {}: {}", self.filename, e)))
    }
}

/// Runs an external command and parses its output with the bound dialect.
pub struct CmdSource {
    name: String,
    run: RunCommand,
    parse: ParseFn,
}

impl CmdSource {
    pub fn new(name: impl Into<String>, run: RunCommand, dialect: Dialect) -> Self {
        Self {
            name: name.into(),
            run,
            parse: dialect.parser(),
        }
    }

    async fn probe(&self) -> Result<(), DomainError> {
        (self.run)()
            .await
            .map(|_| ())
            .map_err(|e| DomainError::NeighborSourceUnavailable(format!("{}: {}", self.name, e)))
    }

    async fn fetch(&self) -> Result<Vec<Neighbor>, DomainError> {
        let output = (self.run)().await?;

        (self.parse)(&mut output.as_slice()).map_err(|e| {
            DomainError::NeighborCommandFailed(format!("{}: reading output: {}", self.name, e))
        })
    }
}

/// The closed set of acquisition strategies.
pub enum NeighborSource {
    Fsys(FsysSource),
    Cmd(CmdSource),
}

impl NeighborSource {
    pub fn name(&self) -> &str {
        match self {
            NeighborSource::Fsys(src) => &src.filename,
            NeighborSource::Cmd(src) => &src.name,
        }
    }

    /// Cheap usability check run once by the selector: the file must exist,
    /// the command must run successfully once.
    pub async fn probe(&self) -> Result<(), DomainError> {
        match self {
            NeighborSource::Fsys(src) => src.probe().await,
            NeighborSource::Cmd(src) => src.probe().await,
        }
    }

    /// Reads and parses the full table.
    pub async fn fetch(&self) -> Result<Vec<Neighbor>, DomainError> {
        match self {
            NeighborSource::Fsys(src) => src.fetch().await,
            NeighborSource::Cmd(src) => src.fetch().await,
        }
    }
}
