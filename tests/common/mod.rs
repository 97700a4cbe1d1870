//! Helpers shared by the integration tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use daqlog::{Error, LogDocument, RemoteStore};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Console target that keeps everything written to it.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A store that is never reachable.
pub struct FailingStore;

impl RemoteStore for FailingStore {
    fn insert_one(&self, _doc: &LogDocument) -> Result<(), Error> {
        Err(Error::Remote("connection refused".to_string()))
    }
}

pub fn at(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_milli_opt(h, m, s, ms)
        .unwrap()
}

/// Lines of a log file that are entries rather than INIT banners.
pub fn entry_lines(content: &str) -> Vec<&str> {
    content.lines().filter(|l| !l.contains(" [INIT]: ")).collect()
}
