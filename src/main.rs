//! hangeul - 한글 음절/자모 분해·조합 명령행 도구

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangeul::config::{config_path, try_load_config_from, HangeulConfig};
use hangeul::{compose, decompose_compound, decompose_syllable, iter_decompose};

/// 한글 음절과 자모 사이의 분해/조합
#[derive(Parser)]
#[command(name = "hangeul", about = "Hangul syllable <-> jamo conversion")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 음절을 자모로 분해 (TEXT가 없으면 표준 입력을 줄 단위로 처리)
    Decompose {
        /// 첫가끝 자모(U+1100 ~)로 출력
        #[arg(long)]
        jamo: bool,
        text: Option<String>,
    },
    /// 자모열을 음절로 조합 (TEXT가 없으면 표준 입력을 줄 단위로 처리)
    Compose { text: Option<String> },
    /// 음절 한 글자의 초성/중성/종성을 JSON으로 출력
    Syllable { syllable: char },
    /// 복합 자모의 구성 자모 출력
    Compound { jamo: char },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 로거 초기화 전이므로 설정 로드 에러는 보관했다가 기록
    let path = config_path();
    let loaded = try_load_config_from(&path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => HangeulConfig::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("설정 파일 로드 실패 ({}): {}", path.display(), e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Decompose { jamo, text } => {
            let use_jamo = jamo || config.use_jamo;
            for_each_input(text, &mut out, |line| iter_decompose(line, use_jamo).collect())?;
        }
        Command::Compose { text } => {
            for_each_input(text, &mut out, compose)?;
        }
        Command::Syllable { syllable } => {
            let parts = decompose_syllable(syllable)?;
            writeln!(out, "{}", serde_json::to_string(&parts)?)?;
        }
        Command::Compound { jamo } => {
            let parts = decompose_compound(jamo)?;
            let parts: Vec<String> = parts.iter().map(|c| c.to_string()).collect();
            writeln!(out, "{}", parts.join(" "))?;
        }
    }

    Ok(())
}

/// 인자로 받은 텍스트, 또는 표준 입력의 각 줄에 변환 적용
fn for_each_input<W, F>(text: Option<String>, out: &mut W, convert: F) -> Result<()>
where
    W: Write,
    F: Fn(&str) -> String,
{
    if let Some(text) = text {
        writeln!(out, "{}", convert(&text))?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("표준 입력 읽기 실패")?;
        writeln!(out, "{}", convert(&line))?;
    }
    Ok(())
}
