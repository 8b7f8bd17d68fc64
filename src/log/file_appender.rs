// File appender that trims the oldest lines once the size cap is reached

use crate::error::{Result, ValueBidError};
use crate::utils::fs::ensure_dir;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write as _};
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "valuebid.log";

pub struct FileAppender {
    log_dir: PathBuf,
    current_file: Option<File>,
    current_size: u64,
    max_file_size: u64,
}

impl FileAppender {
    pub fn new(log_dir: PathBuf, max_file_size: u64) -> Result<Self> {
        ensure_dir(&log_dir)?;
        let mut appender = Self {
            log_dir,
            current_file: None,
            current_size: 0,
            max_file_size,
        };
        appender.open_current_file()?;
        Ok(appender)
    }

    pub fn current_log_path(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    fn open_current_file(&mut self) -> Result<()> {
        let log_path = self.current_log_path();
        self.current_size = std::fs::metadata(&log_path).map(|m| m.len()).unwrap_or(0);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .map_err(|e| {
                ValueBidError::Log(format!(
                    "Failed to open log file {}: {}",
                    log_path.display(),
                    e
                ))
            })?;
        self.current_file = Some(file);
        Ok(())
    }

    pub fn write_log(&mut self, message: &str) -> Result<()> {
        let message_bytes = message.as_bytes();
        let message_len = message_bytes.len() as u64 + 1; // +1 for newline

        if self.current_size + message_len <= self.max_file_size {
            if let Some(file) = &mut self.current_file {
                writeln!(file, "{}", message)
                    .and_then(|_| file.flush())
                    .map_err(|e| ValueBidError::Log(format!("Failed to write to log file: {}", e)))?;
                self.current_size += message_len;
            }
            return Ok(());
        }

        self.current_file = None;
        let path = self.current_log_path();

        let reader = BufReader::new(File::open(&path).map_err(|e| {
            ValueBidError::Log(format!("Failed to open log file for reading: {}", e))
        })?);
        let mut lines = Vec::new();
        for line in reader.lines() {
            let mut line = line.map_err(|e| {
                ValueBidError::Log(format!("Failed to read line from log file: {}", e))
            })?;
            line.push('\n');
            lines.push(line);
        }

        // Drop oldest lines until the new message fits
        let mut removed_size = 0u64;
        let mut keep_from = 0;
        while keep_from < lines.len()
            && self.current_size + message_len - removed_size > self.max_file_size
        {
            removed_size += lines[keep_from].len() as u64;
            keep_from += 1;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| {
                ValueBidError::Log(format!("Failed to open log file for truncation: {}", e))
            })?;
        for line in &lines[keep_from..] {
            file.write_all(line.as_bytes()).map_err(|e| {
                ValueBidError::Log(format!("Failed to write trimmed line to log file: {}", e))
            })?;
        }
        writeln!(file, "{}", message)
            .and_then(|_| file.flush())
            .map_err(|e| ValueBidError::Log(format!("Failed to write to log file: {}", e)))?;

        self.current_size = self.current_size.saturating_sub(removed_size) + message_len;
        self.current_file = Some(file);
        Ok(())
    }
}
