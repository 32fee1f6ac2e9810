//! searchgraph CLI 工具
//!
//! 加载边列表并执行路径查询

use anyhow::Context;
use clap::{Parser, ValueEnum};
use searchgraph::graph::GraphIndex;
use searchgraph::import::{EdgeListImporter, ImportStats};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// 路径算法
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    /// 广度优先，最短路径
    Bfs,
    /// 深度优先，不保证最短
    Dfs,
}

#[derive(Parser, Debug)]
#[command(name = "searchgraph-cli")]
#[command(about = "有向图路径查询工具")]
struct Args {
    /// 边列表文件（CSV 表头 from,to；.jsonl 按 JSON Lines 解析）
    #[arg(short, long)]
    input: PathBuf,

    /// 起点
    #[arg(short, long, requires = "to")]
    from: Option<String>,

    /// 终点
    #[arg(short, long, requires = "from")]
    to: Option<String>,

    /// 路径算法
    #[arg(short, long, value_enum, default_value = "bfs")]
    algorithm: Algorithm,

    /// 以 JSON 输出路径
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (graph, stats) = load_graph(&args.input)?;
    if stats.errors > 0 {
        warn!(errors = stats.errors, "部分记录被跳过");
    }

    let output = match (args.from, args.to) {
        (Some(from), Some(to)) => render_path(&graph, &from, &to, args.algorithm, args.json)?,
        _ => render_listing(&graph),
    };
    print!("{}", output);

    Ok(())
}

/// 按扩展名选择格式导入边列表
fn load_graph(input: &Path) -> anyhow::Result<(GraphIndex<String>, ImportStats)> {
    let mut graph = GraphIndex::new();
    let mut importer = EdgeListImporter::new(&mut graph);
    let is_jsonl = input
        .extension()
        .map_or(false, |ext| ext == "jsonl" || ext == "json");
    let stats = if is_jsonl {
        importer.import_jsonl_path(input)
    } else {
        importer.import_csv_path(input)
    }
    .with_context(|| format!("无法导入 {}", input.display()))?;

    Ok((graph, stats))
}

/// 顶点及出边列表
fn render_listing(graph: &GraphIndex<String>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "顶点数: {}", graph.vertex_count());
    let _ = writeln!(out, "边数: {}", graph.edge_count());
    for v in graph.vertices() {
        let _ = writeln!(out, "  {} -> {:?}", v, graph.neighbors(v));
    }
    out
}

/// 路径查询结果，端点不存在与不可达一样输出空路径
fn render_path(
    graph: &GraphIndex<String>,
    from: &str,
    to: &str,
    algorithm: Algorithm,
    json: bool,
) -> anyhow::Result<String> {
    let (from, to) = (from.to_string(), to.to_string());
    for endpoint in [&from, &to] {
        if !graph.contains(endpoint) {
            warn!(vertex = %endpoint, "顶点不存在");
        }
    }

    let path = match algorithm {
        Algorithm::Bfs => graph.shortest_path(&from, &to),
        Algorithm::Dfs => graph.dfs_path(&from, &to),
    };

    let out = if json {
        format!("{}\n", serde_json::to_string(&path)?)
    } else if path.is_empty() {
        format!("未找到路径: {} -> {}\n", from, to)
    } else {
        format!("路径 ({} 跳): {}\n", path.len() - 1, path.join(" -> "))
    };
    Ok(out)
}
