//! Floortile 命令行工具
//!
//! 读取地板文件（或标准输入），判定能否被多米诺完整铺砌

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use floortile::{BatchChecker, BatchReport, CheckConfig, FloorOutcome, Verdict};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "floortile")]
#[command(version, about = "判定地板能否被 1×2 多米诺完整铺砌")]
struct Args {
    /// 地板文件；省略时从标准输入读取
    files: Vec<PathBuf>,

    /// 并行检查多个文件
    #[arg(short, long)]
    parallel: bool,

    /// 以 JSON 输出报告
    #[arg(short, long)]
    json: bool,

    /// 读取失败时立即退出
    #[arg(long)]
    fail_fast: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = CheckConfig::new()
        .with_parallel(args.parallel)
        .with_fail_fast(args.fail_fast);
    let checker = BatchChecker::new(config);

    let report = if args.files.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("无法读取标准输入")?;
        checker.check_floors(&[("<stdin>".to_string(), text)])
    } else {
        checker.check_files(&args.files)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !report.all_tileable() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_report(report: &BatchReport) {
    for outcome in &report.outcomes {
        println!("{}: {}", outcome.name, describe(outcome));
    }

    if report.outcomes.len() > 1 {
        println!();
        println!("检查: {}", report.stats.checked);
        println!("  可铺满: {}", report.stats.tileable);
        println!("  错误数: {}", report.stats.errors);
        println!("  耗时: {} ms", report.stats.duration_ms);
    }
}

fn describe(outcome: &FloorOutcome) -> String {
    if let Some(error) = &outcome.error {
        return format!("错误 ({})", error).red().to_string();
    }
    let Some(report) = &outcome.report else {
        return String::new();
    };

    let stats = &report.stats;
    match report.verdict {
        Verdict::Tileable => format!("可以铺满 ({} 块多米诺)", stats.open / 2)
            .green()
            .to_string(),
        Verdict::OddCellCount => format!("无法铺满: 空格子数为奇数 ({})", stats.open)
            .yellow()
            .to_string(),
        Verdict::ColorImbalance => format!(
            "无法铺满: 黑格 {} 与白格 {} 数量不等",
            stats.black, stats.white
        )
        .yellow()
        .to_string(),
        Verdict::InsufficientMatching => format!(
            "无法铺满: 最大匹配 {} 小于白格数 {}",
            report.flow.unwrap_or(0),
            stats.white
        )
        .yellow()
        .to_string(),
    }
}
