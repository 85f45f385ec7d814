use std::io::Write;
use tracing::{debug, warn};

use crate::adapters::page::Page;
use crate::application::{MissingTargetPolicy, MountError, RendererSink};
use crate::render::TableMarkup;

/// Mounts a table into one named container of a [`Page`], replacing
/// whatever the container held before.
pub struct ContainerSink<'a> {
    page: &'a mut Page,
    target: String,
    policy: MissingTargetPolicy,
}

impl<'a> ContainerSink<'a> {
    pub fn new(page: &'a mut Page, target: impl Into<String>, policy: MissingTargetPolicy) -> Self {
        Self {
            page,
            target: target.into(),
            policy,
        }
    }
}

impl RendererSink for ContainerSink<'_> {
    fn mount(&mut self, markup: &TableMarkup) -> Result<(), MountError> {
        match self.page.container_mut(&self.target) {
            Some(slot) => {
                *slot = markup.to_string();
                debug!("Mounted {} rows into container '{}'", markup.len(), self.target);
                Ok(())
            }
            None => match self.policy {
                MissingTargetPolicy::Fail => Err(MountError::TargetNotFound(self.target.clone())),
                MissingTargetPolicy::Ignore => {
                    warn!("Mount target '{}' not found, skipping", self.target);
                    Ok(())
                }
            },
        }
    }
}

/// Writes the bare table fragment to any writer
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RendererSink for WriterSink<W> {
    fn mount(&mut self, markup: &TableMarkup) -> Result<(), MountError> {
        writeln!(self.writer, "{}", markup)?;
        self.writer.flush()?;
        Ok(())
    }
}
