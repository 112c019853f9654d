//! Presentation - 人类可读 / JSON 输出

use chrono::{DateTime, Local};
use serde_json::{json, Value};

use super::Outcome;
use crate::application::FileInfo;
use crate::domain::clone::{CloneError, CloneResult};

const RULE: &str = "============================================================";

fn format_timestamp(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

fn purpose_label(purpose: &str) -> &str {
    match purpose {
        "voice_clone" => "clone audio",
        "prompt_audio" => "prompt audio",
        "t2a_async_input" => "async T2A input",
        "" => "unknown",
        other => other,
    }
}

fn result_json(result: &CloneResult) -> Value {
    json!({
        "task_id": result.task_id,
        "status": result.status,
        "audio_url": result.audio_url,
        "error_message": result.error_message,
    })
}

fn result_lines(result: &CloneResult) -> Vec<String> {
    let mut lines = vec![
        format!("  Task ID: {}", result.task_id),
        format!("  Status: {}", result.status),
    ];
    if let Some(url) = &result.audio_url {
        lines.push(format!("  Audio URL: {}", url));
    }
    if let Some(message) = &result.error_message {
        lines.push(format!("  Service message: {}", message));
    }
    lines
}

fn file_lines(file: &FileInfo, indent: &str) -> Vec<String> {
    let mut lines = vec![
        format!("{}Filename: {}", indent, file.filename),
        format!("{}Size: {:.2} KB", indent, file.bytes as f64 / 1024.0),
        format!("{}Purpose: {}", indent, purpose_label(&file.purpose)),
        format!("{}Created: {}", indent, format_timestamp(file.created_at)),
    ];
    if let Some(url) = &file.download_url {
        lines.push(format!("{}Download URL: {}", indent, url));
    }
    lines
}

fn to_json(value: Value) -> String {
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

/// JSON 渲染
pub fn render_json(outcome: &Outcome) -> String {
    let value = match outcome {
        Outcome::Files(files) => json!({ "files": files, "total": files.len() }),
        Outcome::File(file) => json!(file),
        Outcome::Deleted { file_id, success } => json!({ "success": success, "file_id": file_id }),
        Outcome::DeleteCancelled { file_id } => {
            json!({ "success": false, "cancelled": true, "file_id": file_id })
        }
        Outcome::ReferenceUploaded { file_id } => json!({ "file_id": file_id.as_str() }),
        Outcome::PromptUploaded {
            prompt_file_id,
            file_id,
        } => json!({ "prompt_file_id": prompt_file_id.as_str(), "file_id": file_id }),
        Outcome::Submitted(result) => result_json(result),
        Outcome::Cloned(response) => {
            let mut value = result_json(&response.result);
            value["file_id"] = json!(response.file_id.as_str());
            value["prompt_file_id"] = json!(response.prompt_file_id.as_ref().map(|id| id.as_str()));
            value
        }
    };
    to_json(value)
}

/// 人类可读渲染；`program` 用于提示下一步命令
pub fn render_human(outcome: &Outcome, program: &str) -> String {
    let lines: Vec<String> = match outcome {
        Outcome::Files(files) => {
            let mut lines = vec![RULE.to_string(), "Files".to_string(), RULE.to_string()];
            if files.is_empty() {
                lines.push("No files found".to_string());
            }
            for (i, file) in files.iter().enumerate() {
                lines.push(format!("\n{}. File ID: {}", i + 1, file.file_id));
                lines.extend(file_lines(file, "   "));
            }
            if !files.is_empty() {
                lines.push(format!("\n{} file(s) total", files.len()));
            }
            lines
        }
        Outcome::File(file) => {
            let mut lines = vec![
                RULE.to_string(),
                "File details".to_string(),
                RULE.to_string(),
                format!("File ID: {}", file.file_id),
            ];
            lines.extend(file_lines(file, ""));
            lines
        }
        Outcome::Deleted { file_id, success } => {
            if *success {
                vec![format!("File {} deleted", file_id)]
            } else {
                vec![format!("File {} was not deleted", file_id)]
            }
        }
        Outcome::DeleteCancelled { file_id } => {
            vec![format!("Deletion of file {} cancelled", file_id)]
        }
        Outcome::ReferenceUploaded { file_id } => vec![
            "[Step 1 Complete] Reference audio uploaded".to_string(),
            format!("  File ID: {}", file_id),
            "\nNext steps:".to_string(),
            "  Complete cloning now:".to_string(),
            format!(
                "    {} --step 3 --voice-id <voice_id> --file-id {}",
                program, file_id
            ),
            "  Or upload prompt audio first:".to_string(),
            format!(
                "    {} --step 2 --file-id {} --prompt-audio prompt.m4a",
                program, file_id
            ),
        ],
        Outcome::PromptUploaded {
            prompt_file_id,
            file_id,
        } => vec![
            "[Step 2 Complete] Prompt audio uploaded".to_string(),
            format!("  Prompt File ID: {}", prompt_file_id),
            format!("  Reference File ID: {}", file_id),
            "\nNext step:".to_string(),
            format!(
                "    {} --step 3 --voice-id <voice_id> --file-id {} \\\n        --prompt-file-id {} --prompt-text-file prompt_text.txt",
                program, file_id, prompt_file_id
            ),
        ],
        Outcome::Submitted(result) => {
            let mut lines = vec!["[Step 3 Complete] Voice cloning submitted".to_string()];
            lines.extend(result_lines(result));
            lines
        }
        Outcome::Cloned(response) => {
            let mut lines = vec![
                "Voice cloning task submitted".to_string(),
                format!("  Reference File ID: {}", response.file_id),
            ];
            if let Some(prompt_file_id) = &response.prompt_file_id {
                lines.push(format!("  Prompt File ID: {}", prompt_file_id));
            }
            lines.extend(result_lines(&response.result));
            lines
        }
    };

    lines.join("\n")
}

/// 渲染结果
pub fn render(outcome: &Outcome, json: bool, program: &str) -> String {
    if json {
        render_json(outcome)
    } else {
        render_human(outcome, program)
    }
}

/// 渲染错误；远端错误附带状态码与原始响应体
pub fn render_error(err: &anyhow::Error, json: bool) -> String {
    let clone_err = err.downcast_ref::<CloneError>();

    if json {
        let value = match clone_err {
            Some(e) => json!({
                "error": e.kind(),
                "message": e.to_string(),
                "status": e.status(),
                "body": e.body(),
            }),
            None => json!({ "error": "error", "message": format!("{:#}", err) }),
        };
        return to_json(value);
    }

    match clone_err.and_then(CloneError::status) {
        Some(status) => format!("Error: {:#}\n  HTTP status: {}", err, status),
        None => format!("Error: {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CloneVoiceResponse;
    use crate::domain::clone::RemoteFileId;

    fn result() -> CloneResult {
        CloneResult {
            task_id: "t1".to_string(),
            status: "processing".to_string(),
            audio_url: None,
            error_message: None,
        }
    }

    #[test]
    fn test_json_cloned() {
        let outcome = Outcome::Cloned(CloneVoiceResponse {
            file_id: RemoteFileId::new("42"),
            prompt_file_id: None,
            result: result(),
        });
        let value: Value = serde_json::from_str(&render_json(&outcome)).unwrap();
        assert_eq!(value["task_id"], "t1");
        assert_eq!(value["status"], "processing");
        assert_eq!(value["file_id"], "42");
        assert!(value["prompt_file_id"].is_null());
    }

    #[test]
    fn test_json_files_total() {
        let outcome = Outcome::Files(vec![]);
        let value: Value = serde_json::from_str(&render_json(&outcome)).unwrap();
        assert_eq!(value["total"], 0);
        assert!(value["files"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_human_step_one_suggests_next_commands() {
        let outcome = Outcome::ReferenceUploaded {
            file_id: RemoteFileId::new("42"),
        };
        let text = render_human(&outcome, "vclone");
        assert!(text.contains("File ID: 42"));
        assert!(text.contains("vclone --step 3 --voice-id <voice_id> --file-id 42"));
        assert!(text.contains("vclone --step 2 --file-id 42"));
    }

    #[test]
    fn test_human_submitted() {
        let text = render(&Outcome::Submitted(result()), false, "vclone");
        assert!(text.contains("Task ID: t1"));
        assert!(text.contains("Status: processing"));
    }

    #[test]
    fn test_error_json_carries_status_and_body() {
        let err = anyhow::Error::new(CloneError::api(
            "Voice cloning failed: bad",
            Some(400),
            Some("bad".to_string()),
        ));
        let value: Value = serde_json::from_str(&render_error(&err, true)).unwrap();
        assert_eq!(value["error"], "api_error");
        assert_eq!(value["status"], 400);
        assert_eq!(value["body"], "bad");
    }

    #[test]
    fn test_human_file_details() {
        let file = FileInfo {
            file_id: "42".to_string(),
            filename: "reference.m4a".to_string(),
            bytes: 2048,
            created_at: 1_700_000_000,
            purpose: "prompt_audio".to_string(),
            download_url: Some("https://files.example/reference.m4a".to_string()),
        };
        let text = render_human(&Outcome::File(file), "vclone");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "File details");
        assert!(lines.contains(&"File ID: 42"));
        assert!(lines.contains(&"Size: 2.00 KB"));
        assert!(lines.contains(&"Purpose: prompt audio"));
        assert!(lines.contains(&"Download URL: https://files.example/reference.m4a"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_error_human_with_status() {
        let err = anyhow::Error::new(CloneError::api("File upload failed: busy", Some(503), None));
        assert_eq!(
            render_error(&err, false),
            "Error: File upload failed: busy\n  HTTP status: 503"
        );
    }

    #[test]
    fn test_error_human() {
        let err = anyhow::Error::new(CloneError::InvalidFileId("abc123".to_string()));
        let text = render_error(&err, false);
        assert!(text.starts_with("Error: Invalid file_id format: 'abc123'"));
    }
}
