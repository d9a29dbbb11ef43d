//! Recorded run traces with stable hashing for determinism checks.
//! This module exists to keep trace persistence separate from the simulator loop.
//! It does not own how movements are chosen or applied.

use std::fs;
use std::hash::Hasher;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::types::{Cell, Heading, MazeSize, Movement};

pub const TRACE_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub cell: Cell,
    pub heading: Heading,
    pub movement: Movement,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTrace {
    pub format_version: u16,
    pub size: MazeSize,
    pub seed: Option<u64>,
    pub steps: Vec<TraceStep>,
}

impl RunTrace {
    pub fn new(size: MazeSize, seed: Option<u64>) -> Self {
        Self { format_version: TRACE_FORMAT_VERSION, size, seed, steps: Vec::new() }
    }

    pub fn push(&mut self, cell: Cell, heading: Heading, movement: Movement) {
        self.steps.push(TraceStep { cell, heading, movement });
    }

    pub fn movements(&self) -> impl Iterator<Item = Movement> + '_ {
        self.steps.iter().map(|step| step.movement)
    }

    pub fn stable_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u16(self.format_version);
        hasher.write_u64(self.size.side() as u64);
        hasher.write_u64(self.seed.unwrap_or(0));
        hasher.write_u8(u8::from(self.seed.is_some()));
        for step in &self.steps {
            hasher.write_u64(step.cell.x as u64);
            hasher.write_u64(step.cell.y as u64);
            hasher.write_u8(step.heading as u8);
            hasher.write_u8(step.movement as u8);
        }
        hasher.finish()
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let trace: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(trace)
    }
}
