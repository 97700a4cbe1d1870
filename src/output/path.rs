//! Where a given day's log file lives on disk.

use crate::clock::CalendarDate;
use crate::fmt::{day_stamp, month_day_bucket};
use serde::Deserialize;
use std::path::PathBuf;

/// On-disk layout of the log tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `<root>/<YYYYMMDD>_<host>.log`
    #[default]
    Flat,
    /// `<root>/<year>/<MM.DD>/<host>.log`
    Hierarchical,
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "hierarchical" | "tree" => Ok(Self::Hierarchical),
            _ => Err(format!("unknown layout: '{s}'")),
        }
    }
}

/// Maps a calendar date to a directory and a file name under one root.
#[derive(Debug, Clone)]
pub struct PathStrategy {
    layout: Layout,
    root: PathBuf,
    host: String,
}

impl PathStrategy {
    #[must_use]
    pub fn new(layout: Layout, root: impl Into<PathBuf>, host: impl Into<String>) -> Self {
        Self {
            layout,
            root: root.into(),
            host: host.into(),
        }
    }

    /// Flat ignores the date; hierarchical buckets by year and `MM.DD`.
    #[must_use]
    pub fn directory(&self, date: CalendarDate) -> PathBuf {
        match self.layout {
            Layout::Flat => self.root.clone(),
            Layout::Hierarchical => self
                .root
                .join(date.year.to_string())
                .join(month_day_bucket(date)),
        }
    }

    /// Flat names the file after the date; hierarchical reuses `<host>.log` in every bucket.
    #[must_use]
    pub fn file_name(&self, date: CalendarDate) -> String {
        match self.layout {
            Layout::Flat => format!("{}_{}.log", day_stamp(date), self.host),
            Layout::Hierarchical => format!("{}.log", self.host),
        }
    }

    #[must_use]
    pub fn path(&self, date: CalendarDate) -> PathBuf {
        self.directory(date).join(self.file_name(date))
    }
}
