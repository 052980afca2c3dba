//! 事件日志批处理命令行：导出文件 → 流水线 → 报表工件。

mod report;

use std::path::PathBuf;

use clap::Parser;
use evlog_config::AppConfig;
use evlog_ingest::{DiskFileSource, EventFileSource};
use evlog_normalize::parse_window;
use evlog_pipeline::run_batch;
use evlog_telemetry::{init_tracing, metrics, new_run_id};
use tracing::info;

/// 设备事件日志分析器。
#[derive(Debug, Parser)]
#[command(name = "evlog", about = "Parse, classify and summarize device event log exports")]
struct Cli {
    /// 待处理的导出文件，按给出顺序处理
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// 窗口起始日期（YYYY-MM-DD）；缺省或非法时回退默认窗口
    #[arg(long)]
    from: Option<String>,

    /// 窗口截止日期（YYYY-MM-DD）；缺省或非法时回退默认窗口
    #[arg(long)]
    to: Option<String>,

    /// 报表工件输出路径（覆盖 EVLOG_REPORT_PATH）
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let cli = Cli::parse();
    let run_id = new_run_id();

    // 命令行参数优先于环境变量；非法日期串静默回退默认窗口
    let today = chrono::Local::now().date_naive();
    let raw_from = cli.from.or(config.date_from);
    let raw_to = cli.to.or(config.date_to);
    let window = parse_window(raw_from.as_deref(), raw_to.as_deref(), today);
    info!(
        run_id = %run_id,
        start = %window.start,
        end = %window.end,
        files = cli.files.len(),
        "starting batch"
    );

    let sources: Vec<Box<dyn EventFileSource>> = cli
        .files
        .iter()
        .map(|path| Box::new(DiskFileSource::new(path)) as Box<dyn EventFileSource>)
        .collect();
    let batch = run_batch(&sources, &window);

    // 失败文件逐个告警；部分失败不影响退出码
    for failure in &batch.failures {
        eprintln!(
            "warning: failed to process {}: {}",
            failure.file_name, failure.error
        );
    }

    let dto = report::report_from_batch(&run_id, &window, &batch);
    let out_path = cli
        .out
        .unwrap_or_else(|| PathBuf::from(&config.report_path));
    report::write_report(&out_path, &dto)?;

    print!("{}", report::render_summary(batch.summary.rows()));

    let snapshot = metrics().snapshot();
    info!(
        files_processed = snapshot.files_processed,
        files_failed = snapshot.files_failed,
        rows_parsed = snapshot.rows_parsed,
        report = %out_path.display(),
        "batch finished"
    );
    Ok(())
}
