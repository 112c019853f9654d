//! Command-line arguments for vclone

use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Quick start (all-in-one):
  vclone --voice-id my_voice_001 --audio reference.m4a
  vclone -v my_voice_001 -a reference.m4a -p prompt.m4a -t \"Prompt text\"

Step-by-step workflow:
  vclone --step 1 --audio reference.m4a
  vclone --step 2 --prompt-audio prompt.m4a --file-id <file_id>
  vclone --step 3 --voice-id my_voice_001 --file-id <file_id> \\
      --prompt-file-id <prompt_file_id> --prompt-text-file prompt_text.txt

File management:
  vclone --list-files --purpose voice_clone
  vclone --get-file-info <file_id> --json
  vclone --delete-file <file_id>";

/// Clone voices with the MiniMax voice cloning API
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "vclone")]
#[command(version)]
#[command(about = "Clone voices with the MiniMax voice cloning API")]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// MiniMax API key (highest priority, before MINIMAX_API_KEY and config files)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Credential file to search before .env, .minimax.conf and ~/.minimax.conf
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Application settings file (TOML), defaults to ./vclone.toml
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Run a single step: 1=upload reference audio, 2=upload prompt audio, 3=submit clone
    #[arg(short = 'S', long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub step: Option<u8>,

    /// Reference file ID from step 1 (required for steps 2 and 3)
    #[arg(short = 'f', long)]
    pub file_id: Option<String>,

    /// Prompt file ID from step 2, requires --prompt-text or --prompt-text-file
    #[arg(short = 'F', long)]
    pub prompt_file_id: Option<String>,

    /// Voice ID for the cloned voice (8-256 chars, starts with a letter)
    #[arg(short = 'v', long)]
    pub voice_id: Option<String>,

    /// Reference audio to clone from (mp3/m4a/wav, 10s-5min, max 20MB)
    #[arg(short = 'a', long, value_name = "PATH")]
    pub audio: Option<PathBuf>,

    /// Prompt audio for better cloning quality (mp3/m4a/wav, <8s, max 20MB)
    #[arg(short = 'p', long, value_name = "PATH")]
    pub prompt_audio: Option<PathBuf>,

    /// Transcript of the prompt audio
    #[arg(short = 't', long)]
    pub prompt_text: Option<String>,

    /// File containing the transcript of the prompt audio
    #[arg(short = 'P', long, value_name = "PATH")]
    pub prompt_text_file: Option<PathBuf>,

    /// Text to synthesize with the cloned voice
    #[arg(short = 's', long)]
    pub text: Option<String>,

    /// File containing the text to synthesize
    #[arg(short = 'T', long, value_name = "PATH")]
    pub text_file: Option<PathBuf>,

    /// Clone model (defaults to api.default_model from settings)
    #[arg(short = 'm', long, value_parser = ["speech-2.8", "speech-2.8-hd"])]
    pub model: Option<String>,

    /// List uploaded files
    #[arg(short = 'L', long)]
    pub list_files: bool,

    /// Filter --list-files by purpose
    #[arg(short = 'u', long, value_parser = ["voice_clone", "prompt_audio", "t2a_async_input"])]
    pub purpose: Option<String>,

    /// Show details of an uploaded file
    #[arg(short = 'I', long, value_name = "FILE_ID")]
    pub get_file_info: Option<String>,

    /// Delete an uploaded file (cannot be undone)
    #[arg(short = 'D', long, value_name = "FILE_ID")]
    pub delete_file: Option<String>,

    /// Do not ask for confirmation before deleting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print results as JSON
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Only print results and warnings
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
