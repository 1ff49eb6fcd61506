//! `oj submit` — send code to the judge.

use std::path::Path;

use anyhow::Result;

use oj_api::judge;

/// Submit a source file for grading and print the verdict record.
pub async fn submit(
    problem_id: &str,
    language: &str,
    file: &Path,
    config_path: &Path,
) -> Result<()> {
    let code = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", file.display(), e))?;
    if code.trim().is_empty() {
        anyhow::bail!("refusing to submit an empty file");
    }

    let (gateway, _store) = super::build_gateway(config_path)?;

    let resp = judge::submit(
        &gateway,
        &judge::SubmitCodeParams {
            problem_id: problem_id.to_string(),
            language: language.to_string(),
            code,
        },
    )
    .await?;

    if !resp.is_business_success() {
        anyhow::bail!("submission rejected: {}", resp.message);
    }
    let result = resp
        .into_data()
        .ok_or_else(|| anyhow::anyhow!("empty payload in judge response"))?;

    println!("record {}", result.status_record_id);
    println!("status {}", result.status);
    if !result.compiler_info.is_empty() {
        println!("compiler output:");
        println!("{}", result.compiler_info);
    }
    if result.is_first_ac {
        println!("first accept on this problem!");
    }
    println!("run `oj get record {}` for per-case details", result.status_record_id);
    Ok(())
}
