//! CSV-backed task repository.

use anyhow::Result;
use async_trait::async_trait;
use csv::{Reader, Writer};
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::Task;
use crate::storage::traits::TaskStorage;

#[derive(Clone)]
pub struct TaskRepository {
    connection: CsvConnection,
}

impl TaskRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_tasks(&self) -> Result<Vec<Task>> {
        let file_path = self.connection.tasks_file_path();

        if !file_path.exists() {
            debug!("No tasks file at {:?} yet", file_path);
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut tasks = Vec::new();
        for result in csv_reader.deserialize() {
            let task: Task = result?;
            tasks.push(task);
        }

        Ok(tasks)
    }

    fn write_tasks(&self, tasks: &[Task]) -> Result<()> {
        let file_path = self.connection.tasks_file_path();
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            let mut csv_writer = Writer::from_writer(BufWriter::new(file));

            for task in tasks {
                csv_writer.serialize(task)?;
            }
            csv_writer.flush()?;
        }

        std::fs::rename(&temp_path, &file_path)?;
        Ok(())
    }
}

#[async_trait]
impl TaskStorage for TaskRepository {
    async fn store_task(&self, task: &Task) -> Result<()> {
        let mut tasks = self.read_tasks()?;
        tasks.retain(|t| t.id != task.id);
        tasks.push(task.clone());
        tasks.sort_by_key(|t| t.id);
        self.write_tasks(&tasks)?;

        info!("Stored task {} ({}, rule '{}')", task.id, task.name, task.rotation_rule);
        Ok(())
    }

    async fn get_task(&self, task_id: i64) -> Result<Option<Task>> {
        let tasks = self.read_tasks()?;
        Ok(tasks.into_iter().find(|t| t.id == task_id))
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let mut tasks = self.read_tasks()?;
        tasks.sort_by_key(|t| t.id);
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (TaskRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = CsvConnection::new(temp_dir.path()).expect("Failed to create connection");
        (TaskRepository::new(connection), temp_dir)
    }

    fn task(id: i64, name: &str, rule: &str) -> Task {
        Task {
            id,
            name: name.to_string(),
            rotation_rule: rule.to_string(),
        }
    }

    #[tokio::test]
    async fn test_store_get_and_list_tasks() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_task(&task(2, "Standup facilitator", "daily")).await.unwrap();
        repo.store_task(&task(1, "Release captain", "weekly_friday")).await.unwrap();

        let found = repo.get_task(2).await.unwrap().unwrap();
        assert_eq!(found.rotation_rule, "daily");

        assert!(repo.get_task(99).await.unwrap().is_none());

        let tasks = repo.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, 1);
    }

    #[tokio::test]
    async fn test_store_replaces_existing_id() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_task(&task(1, "Release captain", "weekly_friday")).await.unwrap();
        repo.store_task(&task(1, "Release captain", "biweekly_friday")).await.unwrap();

        let tasks = repo.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].rotation_rule, "biweekly_friday");
    }
}
