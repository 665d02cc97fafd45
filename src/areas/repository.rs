use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::journal::Journal;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory inside the work tree
pub const METADATA_DIR: &str = ".trit";

/// Handle on one repository: a work tree plus its metadata directory
///
/// Every operation goes through a handle, so nothing depends on the process's
/// current directory once the handle exists.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    journal: Journal,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        // a missing work tree is only created by `init`
        let path = if path.exists() {
            path.canonicalize()?
        } else {
            std::path::absolute(path)
                .with_context(|| format!("failed to resolve work tree {:?}", path))?
        };
        let metadata_path = path.join(METADATA_DIR);

        let index = Index::new(metadata_path.join("index").into_boxed_path());
        let database = Database::new(metadata_path.join("commits").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(metadata_path.clone().into_boxed_path());
        let journal = Journal::new(metadata_path.join("journal").into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
            journal,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> Box<Path> {
        self.path.join(METADATA_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata_path().is_dir()
    }

    /// Gate for read-only commands: a leftover journal is only worth a warning
    pub(crate) fn ensure_readable(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        if let Some(operation) = self.journal.pending()? {
            tracing::warn!(operation, "repository state may be inconsistent");
        }

        Ok(())
    }

    /// Gate for mutating commands: refuse to build on top of a half-finished operation
    pub(crate) fn ensure_writable(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        match self.journal.pending()? {
            Some(operation) => Err(RepositoryError::InterruptedOperation { operation }.into()),
            None => Ok(()),
        }
    }

    fn ensure_initialized(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::NotARepository {
                path: self.path.display().to_string(),
            }
            .into())
        }
    }
}
