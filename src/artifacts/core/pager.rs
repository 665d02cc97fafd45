use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that turns paging off
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Adapter giving the `minus` pager a `std::io::Write` face
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where a command's output goes: straight to stdout or through a pager
pub enum CommandOutput {
    Stdout,
    Paged(Pager),
}

impl CommandOutput {
    /// Page only when a human is watching and nobody opted out
    pub fn detect(wants_paging: bool) -> Self {
        if wants_paging && io::stdout().is_terminal() && std::env::var_os(NO_PAGER_ENV).is_none() {
            CommandOutput::Paged(Pager::new())
        } else {
            CommandOutput::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            CommandOutput::Stdout => Box::new(io::stdout()),
            CommandOutput::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Show everything written so far; a no-op for plain stdout
    pub fn finish(self) -> anyhow::Result<()> {
        if let CommandOutput::Paged(pager) = self {
            minus::page_all(pager)?;
        }

        Ok(())
    }
}
