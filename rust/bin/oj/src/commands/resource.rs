//! Read commands: `oj get problems`, `oj get problem <id>`, etc.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use oj_api::{announcement, discussion, problem, solution, status, tag, user};
use oj_core::{ApiResponse, PageParams};

fn unwrap_data<T>(resp: ApiResponse<T>) -> Result<T> {
    if !resp.is_business_success() {
        anyhow::bail!("request failed: {}", resp.message);
    }
    resp.into_data()
        .ok_or_else(|| anyhow::anyhow!("empty payload in successful response"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }
    let line = |cells: Vec<&str>| {
        let mut out = String::new();
        for (i, cell) in cells.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
        }
        println!("{}", out.trim_end());
    };
    line(headers.to_vec());
    for row in rows {
        line(row.iter().map(String::as_str).collect());
    }
}

/// GET a resource (list, or detail when `id` is given).
pub async fn get(
    resource: &str,
    id: Option<&str>,
    page: u32,
    page_size: u32,
    output_json: bool,
    config_path: &Path,
) -> Result<()> {
    let (gateway, _store) = super::build_gateway(config_path)?;
    let pp = PageParams { page, page_size };

    match (resource.to_lowercase().as_str(), id) {
        ("problems", None) => {
            let data = unwrap_data(
                problem::list(&gateway, &problem::ProblemListParams { page: pp, search: None }).await?,
            )?;
            if output_json {
                return print_json(&data);
            }
            let rows: Vec<Vec<String>> = data
                .list
                .iter()
                .map(|p| {
                    vec![
                        p.problem_id.clone(),
                        p.title.clone(),
                        p.submit_num.to_string(),
                        p.ac_num.to_string(),
                        p.tags.join(","),
                    ]
                })
                .collect();
            print_table(&["ID", "TITLE", "SUBMITS", "AC", "TAGS"], &rows);
            println!("({} total)", data.total);
        }
        ("problem", Some(id)) => {
            let data = unwrap_data(problem::info(&gateway, id).await?)?;
            if output_json {
                return print_json(&data);
            }
            println!("{} — {}", data.problem_id, data.title);
            println!("time {} ms, memory {} MB, {} submits / {} AC", data.time_limit, data.memory_limit, data.submit_num, data.ac_num);
            if !data.tags.is_empty() {
                println!("tags: {}", data.tags.join(", "));
            }
            println!();
            println!("{}", data.description);
        }
        ("announcements", None) => {
            let data = unwrap_data(announcement::list(&gateway, &pp).await?)?;
            if output_json {
                return print_json(&data);
            }
            let rows: Vec<Vec<String>> = data
                .list
                .iter()
                .map(|a| {
                    vec![
                        a.announcement_id.clone(),
                        a.title.clone(),
                        a.views.to_string(),
                        a.comments.to_string(),
                        a.create_time.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "TITLE", "VIEWS", "COMMENTS", "CREATED"], &rows);
        }
        ("announcement", Some(id)) => {
            let data = unwrap_data(announcement::info(&gateway, id).await?)?;
            if output_json {
                return print_json(&data);
            }
            println!("{} — {} ({})", data.announcement_id, data.title, data.create_time);
            println!();
            println!("{}", data.content);
        }
        ("discussions", None) => {
            let data = unwrap_data(
                discussion::list(&gateway, &discussion::DiscussListParams { page: pp, search: None }).await?,
            )?;
            if output_json {
                return print_json(&data);
            }
            let rows: Vec<Vec<String>> = data
                .list
                .iter()
                .map(|d| {
                    vec![
                        d.discuss_id.clone(),
                        d.title.clone(),
                        d.user.nickname.clone(),
                        d.comments.to_string(),
                        d.create_time.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "TITLE", "AUTHOR", "COMMENTS", "CREATED"], &rows);
        }
        ("solutions", None) => {
            let data = unwrap_data(
                solution::list(&gateway, &solution::SolutionListParams { page: pp, search: None }).await?,
            )?;
            if output_json {
                return print_json(&data);
            }
            let rows: Vec<Vec<String>> = data
                .list
                .iter()
                .map(|s| {
                    vec![
                        s.solution_id.clone(),
                        s.title.clone(),
                        s.user.nickname.clone(),
                        s.views.to_string(),
                        s.create_time.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "TITLE", "AUTHOR", "VIEWS", "CREATED"], &rows);
        }
        ("status", None) => {
            let data = unwrap_data(
                status::list(&gateway, &status::StatusListParams { page: pp, search: None }).await?,
            )?;
            if output_json {
                return print_json(&data);
            }
            let rows: Vec<Vec<String>> = data
                .list
                .iter()
                .map(|r| {
                    vec![
                        r.status_record_id.clone(),
                        r.problem_title.clone(),
                        r.user_nickname.clone(),
                        r.status.to_string(),
                        r.language.clone(),
                        r.run_time.clone(),
                        r.submit_time.clone(),
                    ]
                })
                .collect();
            print_table(&["ID", "PROBLEM", "USER", "STATUS", "LANG", "TIME", "SUBMITTED"], &rows);
        }
        ("record", Some(id)) => {
            let data = unwrap_data(status::record(&gateway, id).await?)?;
            if output_json {
                return print_json(&data);
            }
            println!("record {} — {} ({})", data.status_record_id, data.status, data.language);
            if !data.compiler_info.is_empty() {
                println!("compiler: {}", data.compiler_info);
            }
            for (i, case) in data.test_info.iter().enumerate() {
                println!("case {}: {} ({} / {})", i + 1, case.status, case.run_time, case.run_memory);
            }
        }
        ("tags", None) => {
            let data = unwrap_data(tag::problem_tags(&gateway).await?)?;
            if output_json {
                return print_json(&data);
            }
            println!("{}", data.tags.join("\n"));
        }
        ("rank", None) => {
            let data = unwrap_data(user::rank(&gateway, &pp).await?)?;
            if output_json {
                return print_json(&data);
            }
            let rows: Vec<Vec<String>> = data
                .list
                .iter()
                .map(|u| {
                    vec![
                        u.rank.to_string(),
                        u.nickname.clone(),
                        u.ac_num.to_string(),
                        u.submit_num.to_string(),
                    ]
                })
                .collect();
            print_table(&["RANK", "NICKNAME", "AC", "SUBMITS"], &rows);
        }
        ("user", Some(id)) => {
            let data = unwrap_data(user::info(&gateway, id).await?)?;
            if output_json {
                return print_json(&data);
            }
            println!("{:<12}{}", "ID", data.user_id);
            println!("{:<12}{}", "NICKNAME", data.nickname);
            println!("{:<12}{}", "SCHOOL", data.school);
            println!("{:<12}{}", "MAJOR", data.major);
            println!("{:<12}{} AC / {} submits", "RECORD", data.ac_num, data.submit_num);
        }
        (name, Some(_)) => anyhow::bail!("Resource \"{}\" does not take an id.", name),
        (name, None) => anyhow::bail!(
            "Unknown resource \"{}\". Try problems, problem <id>, announcements, announcement <id>, \
             discussions, solutions, status, record <id>, tags, rank, user <id>.",
            name
        ),
    }
    Ok(())
}
