//! CSV-backed member repository.
//!
//! Members live in a single `members.csv` in the data directory. The whole
//! file is rewritten on every store, using the atomic temp-file-then-rename
//! pattern.

use anyhow::Result;
use async_trait::async_trait;
use csv::{Reader, Writer};
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::Member;
use crate::storage::traits::MemberStorage;

#[derive(Clone)]
pub struct MemberRepository {
    connection: CsvConnection,
}

impl MemberRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_members(&self) -> Result<Vec<Member>> {
        let file_path = self.connection.members_file_path();

        if !file_path.exists() {
            debug!("No members file at {:?} yet", file_path);
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut members = Vec::new();
        for result in csv_reader.deserialize() {
            let member: Member = result?;
            members.push(member);
        }

        Ok(members)
    }

    fn write_members(&self, members: &[Member]) -> Result<()> {
        let file_path = self.connection.members_file_path();
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            let mut csv_writer = Writer::from_writer(BufWriter::new(file));

            for member in members {
                csv_writer.serialize(member)?;
            }
            csv_writer.flush()?;
        }

        std::fs::rename(&temp_path, &file_path)?;
        Ok(())
    }
}

#[async_trait]
impl MemberStorage for MemberRepository {
    async fn store_member(&self, member: &Member) -> Result<()> {
        let mut members = self.read_members()?;
        members.retain(|m| m.id != member.id);
        members.push(member.clone());
        members.sort_by_key(|m| m.id);
        self.write_members(&members)?;

        info!("Stored member {} ({})", member.id, member.display_name);
        Ok(())
    }

    async fn list_members(&self) -> Result<Vec<Member>> {
        let mut members = self.read_members()?;
        members.sort_by_key(|m| m.id);
        Ok(members)
    }
}
