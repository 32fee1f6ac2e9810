//! 数据导入模块
//!
//! 从 CSV 或 JSON Lines 边列表批量构建字符串顶点图

use crate::error::{Error, Result};
use crate::graph::GraphIndex;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub vertices_added: usize,
    pub edges_added: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 边记录，`to` 为空表示孤立顶点
#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    from: String,
    #[serde(default)]
    to: Option<String>,
}

/// 边列表导入器
pub struct EdgeListImporter<'a> {
    graph: &'a mut GraphIndex<String>,
}

impl<'a> EdgeListImporter<'a> {
    /// 创建导入器
    pub fn new(graph: &'a mut GraphIndex<String>) -> Self {
        Self { graph }
    }

    /// 从 CSV 文件导入（表头 `from,to`）
    pub fn import_csv_path<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let file = File::open(path)?;
        self.import_csv(file)
    }

    /// 从任意 CSV 输入导入
    ///
    /// 表头不可读或缺少 `from` 列时整体失败；单行的字段数或内容错误只计数跳过。
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut stats = ImportStats::default();
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        if !reader.headers()?.iter().any(|h| h == "from") {
            return Err(Error::ImportError("CSV 表头缺少 from 列".to_string()));
        }

        for (row, result) in reader.deserialize::<EdgeRecord>().enumerate() {
            match result {
                Ok(record) => self.apply(record, row + 1, &mut stats),
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!(row = row + 1, error = %e, "跳过格式错误的记录");
                    stats.errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            vertices = stats.vertices_added,
            edges = stats.edges_added,
            errors = stats.errors,
            "CSV 导入完成"
        );
        Ok(stats)
    }

    /// 从 JSON Lines 文件导入
    pub fn import_jsonl_path<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let file = File::open(path)?;
        self.import_jsonl(BufReader::new(file))
    }

    /// 从任意 JSON Lines 输入导入，空行忽略
    pub fn import_jsonl<R: BufRead>(&mut self, reader: R) -> Result<ImportStats> {
        let start = Instant::now();
        let mut stats = ImportStats::default();

        for (row, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<EdgeRecord>(&line) {
                Ok(record) => self.apply(record, row + 1, &mut stats),
                Err(e) => {
                    warn!(row = row + 1, error = %e, "跳过格式错误的记录");
                    stats.errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            vertices = stats.vertices_added,
            edges = stats.edges_added,
            errors = stats.errors,
            "JSONL 导入完成"
        );
        Ok(stats)
    }

    /// 写入单条记录
    fn apply(&mut self, record: EdgeRecord, row: usize, stats: &mut ImportStats) {
        if let Err(e) = self.try_apply(record, stats) {
            warn!(row, error = %e, "跳过无效记录");
            stats.errors += 1;
        }
    }

    fn try_apply(&mut self, record: EdgeRecord, stats: &mut ImportStats) -> Result<()> {
        let from = record.from.trim().to_string();
        if from.is_empty() {
            return Err(Error::ImportError("起点为空".to_string()));
        }
        let to = record
            .to
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        if self.graph.insert_vertex(from.clone()).is_inserted() {
            stats.vertices_added += 1;
        }
        if let Some(to) = to {
            if self.graph.insert_vertex(to.clone()).is_inserted() {
                stats.vertices_added += 1;
            }
            self.graph.add_edge(&from, &to)?;
            stats.edges_added += 1;
        }

        Ok(())
    }
}
